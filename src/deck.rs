//! Card deck with a discard pile.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// One pack in dealing order, ace of clubs last.
fn pack() -> impl Iterator<Item = Card> {
    (0..DECK_SIZE as u8)
        .rev()
        .filter_map(|idx| Card::from_index(idx).ok())
}

/// A deck of one or more standard packs plus a discard pile.
///
/// The top of the deck is the end of the card list. A fresh deck is in
/// index order from the top, so the first card drawn is the ace of clubs.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards not yet drawn, top last.
    cards: Vec<Card>,
    /// Discarded cards, in discard order.
    discards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck with the given shuffle seed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPacks`] if `options.packs` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pcards::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_packs(2), 7).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn new(options: DeckOptions, seed: u64) -> Result<Self, DeckError> {
        if options.packs == 0 {
            return Err(DeckError::InvalidPacks);
        }

        let mut cards = Vec::with_capacity(options.packs as usize * DECK_SIZE);
        for _ in 0..options.packs {
            cards.extend(pack());
        }
        debug!(packs = options.packs, cards = cards.len(), "created deck");

        Ok(Self {
            cards,
            discards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Creates a single-pack deck.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self {
            cards: pack().collect(),
            discards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws cards from the top of the deck, in the order they are dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if fewer than `count` cards remain; no
    /// cards are drawn in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DeckError::Empty {
                requested: count,
                remaining,
            });
        }

        let mut drawn = self.cards.split_off(remaining - count);
        drawn.reverse();
        debug!(count, remaining = self.cards.len(), "drew cards");
        Ok(drawn)
    }

    /// Adds cards to the discard pile.
    ///
    /// The cards need not have come from this deck.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discards.extend(cards);
    }

    /// Returns the discard pile underneath the remaining cards.
    ///
    /// The order of both the remaining cards and the discards is kept.
    pub fn replace_discards(&mut self) {
        self.discards.append(&mut self.cards);
        core::mem::swap(&mut self.cards, &mut self.discards);
    }

    /// Shuffles the remaining cards, first returning the discard pile to the
    /// deck if `fold_discards` is set.
    pub fn shuffle(&mut self, fold_discards: bool) {
        if fold_discards && !self.discards.is_empty() {
            self.replace_discards();
        }

        self.cards.shuffle(&mut self.rng);
        debug!(
            cards = self.cards.len(),
            discards = self.discards.len(),
            "shuffled deck"
        );
    }

    /// Returns the number of cards remaining, excluding the discard pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discards.len()
    }

    /// Returns the remaining cards, top last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns a copy of the remaining cards.
    #[must_use]
    pub fn card_list(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Returns a copy of the discard pile.
    #[must_use]
    pub fn discard_list(&self) -> Vec<Card> {
        self.discards.clone()
    }

    /// Returns the card at `index`, where the top card is at `len() - 1`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Replaces the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if the index is out of range.
    pub fn set(&mut self, index: usize, card: Card) -> Result<(), DeckError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })?;
        *slot = card;
        Ok(())
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        if index >= len {
            return Err(DeckError::IndexOutOfRange { index, len });
        }
        Ok(self.cards.remove(index))
    }

    /// Returns whether this exact card, suit included, remains in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.is_same(card))
    }

    /// Returns an iterator over copies of the remaining cards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
