//! Generic card hand container.
//!
//! A [`Hand`] is an ordered list of cards with no scoring of its own. It can
//! be bound to a shared [`Deck`] to draw, discard and exchange cards, and it
//! notifies registered observers synchronously after every change.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ops::{Bound, Range, RangeBounds};

use tracing::debug;

use crate::card::{Card, NameStyle, RankValue};
use crate::deck::Deck;
use crate::error::{CardError, HandError};

/// A deck shared between the hands dealt from it.
pub type SharedDeck = Rc<RefCell<Deck>>;

/// Handle returned by [`Hand::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&[Card])>;

/// An ordered, mutable collection of cards.
///
/// Cards are `Copy` values, so everything read out of a hand is an
/// independent copy and nothing written into it aliases the caller.
///
/// Observers run on the caller's stack, in registration order, after each
/// mutation. They must not mutate the hand, or borrow its deck mutably.
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Deck used by draw, discard and exchange.
    deck: Option<SharedDeck>,
    /// Registered change observers.
    observers: Vec<(ObserverId, Observer)>,
    /// Next observer id to hand out.
    next_observer: u64,
}

impl Hand {
    /// Creates an empty hand with no deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            deck: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Creates an empty hand bound to a deck.
    #[must_use]
    pub fn with_deck(deck: SharedDeck) -> Self {
        let mut hand = Self::new();
        hand.deck = Some(deck);
        hand
    }

    /// Creates a hand bound to a deck and draws `count` cards from it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Deck`] if the deck holds fewer than `count` cards.
    pub fn from_deck(deck: SharedDeck, count: usize) -> Result<Self, HandError> {
        let mut hand = Self::with_deck(deck);
        hand.draw(count)?;
        Ok(hand)
    }

    /// Creates a hand from short names such as "AS" or "10D".
    ///
    /// # Errors
    ///
    /// Returns the first name's parse error.
    pub fn from_names<I>(names: I) -> Result<Self, CardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = names
            .into_iter()
            .map(|name| Card::from_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_vec(cards))
    }

    /// Creates a hand holding copies of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self::from_vec(cards.to_vec())
    }

    /// Creates a hand that takes ownership of `cards`.
    #[must_use]
    pub const fn from_vec(cards: Vec<Card>) -> Self {
        Self {
            cards,
            deck: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Returns the bound deck, if any.
    #[must_use]
    pub const fn deck(&self) -> Option<&SharedDeck> {
        self.deck.as_ref()
    }

    /// Binds the hand to a deck, or unbinds it with `None`.
    pub fn set_deck(&mut self, deck: Option<SharedDeck>) {
        self.deck = deck;
    }

    /// Registers an observer called with the new cards after each change.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&[Card]) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    fn changed(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.cards);
        }
    }

    fn bound_deck(&self) -> Result<SharedDeck, HandError> {
        self.deck.clone().ok_or(HandError::NoDeck)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a copy of the card list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns an iterator over copies of the cards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().copied()
    }

    /// Returns a new hand holding copies of the cards in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if the range is out of bounds.
    pub fn slice<R>(&self, range: R) -> Result<Self, HandError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(&range, self.cards.len())?;
        Ok(Self::from_cards(&self.cards[range]))
    }

    /// Returns the canonical indices of the cards.
    ///
    /// Useful to compare hands card by card, suits included.
    #[must_use]
    pub fn index_list(&self) -> Vec<u8> {
        self.cards.iter().map(Card::index).collect()
    }

    /// Returns whether this exact card, suit included, is in the hand.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.is_same(card))
    }

    /// Counts copies of this exact card.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| c.is_same(card)).count()
    }

    /// Counts cards of a rank, given as a number or a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is invalid.
    pub fn count_rank<'a>(&self, rank: impl Into<RankValue<'a>>) -> Result<usize, CardError> {
        let rank = rank.into().resolve()?;
        Ok(self.cards.iter().filter(|c| c.rank() == rank).count())
    }

    /// Returns the index of the first copy of this exact card.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c.is_same(card))
    }

    /// Returns the index of the first card of a rank.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is invalid.
    pub fn position_rank<'a>(
        &self,
        rank: impl Into<RankValue<'a>>,
    ) -> Result<Option<usize>, CardError> {
        let rank = rank.into().resolve()?;
        Ok(self.cards.iter().position(|c| c.rank() == rank))
    }

    /// Appends a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.changed();
    }

    /// Inserts a card before `index`. An index past the end appends.
    pub fn insert(&mut self, index: usize, card: Card) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        self.changed();
    }

    /// Replaces the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if the index is out of range.
    pub fn set(&mut self, index: usize, card: Card) -> Result<(), HandError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(HandError::IndexOutOfRange { index, len })?;
        *slot = card;
        self.changed();
        Ok(())
    }

    /// Replaces the cards in `range` with copies of the cards of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if the range is out of bounds.
    pub fn set_range<R>(&mut self, range: R, other: &Self) -> Result<(), HandError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(&range, self.cards.len())?;
        self.cards.splice(range, other.iter());
        self.changed();
        Ok(())
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        let len = self.cards.len();
        if index >= len {
            return Err(HandError::IndexOutOfRange { index, len });
        }
        let card = self.cards.remove(index);
        self.changed();
        Ok(card)
    }

    /// Removes and returns the last card.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.changed();
        Some(card)
    }

    /// Removes the first copy of this exact card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotFound`] if the card is not in the hand.
    pub fn remove(&mut self, card: &Card) -> Result<(), HandError> {
        let index = self.position(card).ok_or(HandError::NotFound)?;
        self.cards.remove(index);
        self.changed();
        Ok(())
    }

    /// Appends copies of the cards of another hand.
    pub fn extend(&mut self, other: &Self) {
        self.cards.extend(other.iter());
        self.changed();
    }

    /// Appends cards.
    pub fn extend_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.changed();
    }

    /// Repeats the cards so the hand holds `times` copies of them.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidRepeat`] if `times` is zero.
    pub fn repeat_in_place(&mut self, times: usize) -> Result<(), HandError> {
        if times == 0 {
            return Err(HandError::InvalidRepeat);
        }
        self.cards = self.cards.repeat(times);
        self.changed();
        Ok(())
    }

    /// Sorts by rank with aces low, then by suit.
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.cards.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        } else {
            self.cards.sort_by_key(Card::sort_key);
        }
        self.changed();
    }

    /// Reverses the order of the cards.
    pub fn reverse(&mut self) {
        self.cards.reverse();
        self.changed();
    }

    /// Draws cards from the bound deck and appends them.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NoDeck`] if no deck is bound, or the deck's
    /// [`DeckError::Empty`](crate::DeckError::Empty) if it runs short.
    pub fn draw(&mut self, count: usize) -> Result<(), HandError> {
        let deck = self.bound_deck()?;
        let drawn = deck.borrow_mut().draw(count)?;
        self.cards.extend(drawn);
        self.changed();
        Ok(())
    }

    /// Returns every card to the bound deck's discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NoDeck`] if no deck is bound.
    pub fn discard(&mut self) -> Result<(), HandError> {
        let deck = self.bound_deck()?;
        deck.borrow_mut().discard(self.cards.drain(..));
        self.changed();
        Ok(())
    }

    /// Replaces the cards at 1-based `positions` with cards drawn from the
    /// bound deck, and discards the replaced cards.
    ///
    /// All positions are checked and all replacements drawn before any card
    /// moves.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NoDeck`] if no deck is bound,
    /// [`HandError::PositionOutOfRange`] for a position outside `1..=len`,
    /// [`HandError::DuplicatePosition`] for a position given twice, or the
    /// deck's error if it runs short.
    pub fn exchange(&mut self, positions: &[usize]) -> Result<(), HandError> {
        let deck = self.bound_deck()?;
        let len = self.cards.len();
        if let Some(&position) = positions.iter().find(|&&p| p == 0 || p > len) {
            return Err(HandError::PositionOutOfRange { position, len });
        }
        for (i, &position) in positions.iter().enumerate() {
            if positions[..i].contains(&position) {
                return Err(HandError::DuplicatePosition(position));
            }
        }

        let mut deck = deck.borrow_mut();
        let drawn = deck.draw(positions.len())?;
        let replaced: Vec<Card> = positions
            .iter()
            .zip(drawn)
            .map(|(&position, card)| core::mem::replace(&mut self.cards[position - 1], card))
            .collect();
        debug!(?positions, "exchanged cards");
        deck.discard(replaced);
        drop(deck);

        self.changed();
        Ok(())
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the cards and the deck binding. Observers are not copied.
impl Clone for Hand {
    fn clone(&self) -> Self {
        Self {
            cards: self.cards.clone(),
            deck: self.deck.clone(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("cards", &self.cards)
            .field("has_deck", &self.deck.is_some())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Short names, each right-aligned in a four character column.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, " {:>3}", card.name_string(NameStyle::Short))?;
        }
        Ok(())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_vec(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Returns a new hand with copies of the cards of `first` then `second`.
///
/// The new hand has no deck and no observers.
#[must_use]
pub fn combine(first: &Hand, second: &Hand) -> Hand {
    first.iter().chain(second.iter()).collect()
}

/// Returns a new hand with `times` copies of the cards of `hand`.
///
/// # Errors
///
/// Returns [`HandError::InvalidRepeat`] if `times` is zero.
pub fn repeat(hand: &Hand, times: usize) -> Result<Hand, HandError> {
    if times == 0 {
        return Err(HandError::InvalidRepeat);
    }
    Ok(Hand::from_vec(hand.cards().repeat(times)))
}

fn resolve_range<R>(range: &R, len: usize) -> Result<Range<usize>, HandError>
where
    R: RangeBounds<usize>,
{
    let past = |bound: usize| {
        bound
            .checked_add(1)
            .ok_or(HandError::IndexOutOfRange { index: bound, len })
    };
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => past(start)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => past(end)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err(HandError::IndexOutOfRange { index: end, len });
    }
    if start > end {
        return Err(HandError::IndexOutOfRange { index: start, len });
    }
    Ok(start..end)
}
