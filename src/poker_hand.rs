//! Five-card poker hand.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::error::{CardError, HandError, ScoreError};
use crate::evaluation::{Category, DescriptionStyle, Evaluation, Score, evaluate_cards};
use crate::hand::{Hand, ObserverId, SharedDeck};
use crate::options::PayoutScheme;

/// A poker hand: a [`Hand`] whose five cards are scored after every change.
///
/// The hand is only scored while it holds exactly five cards. Comparing a
/// hand without a score yields no ordering ([`PartialOrd`]) or a
/// [`ScoreError`] ([`PokerHand::try_cmp`]).
///
/// ```
/// use pcards::{Category, PokerHand};
///
/// let mut hand = PokerHand::from_names(["KS", "KD", "3H", "3C", "9S"]).unwrap();
/// assert_eq!(hand.category(), Some(Category::TwoPair));
///
/// hand.hand_mut().pop();
/// assert_eq!(hand.category(), None);
/// ```
pub struct PokerHand {
    hand: Hand,
    evaluation: Rc<Cell<Option<Evaluation>>>,
    observer: ObserverId,
}

impl PokerHand {
    /// Number of cards in a poker hand.
    pub const SIZE: usize = 5;

    /// Creates an empty poker hand with no deck.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Hand::new())
    }

    /// Creates a poker hand bound to a deck and deals five cards from it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Deck`] if the deck holds fewer than five cards.
    pub fn deal(deck: SharedDeck) -> Result<Self, HandError> {
        let mut hand = Self::from(Hand::with_deck(deck));
        hand.hand.draw(Self::SIZE)?;
        Ok(hand)
    }

    /// Creates a poker hand from short names such as "AS" or "10D".
    ///
    /// # Errors
    ///
    /// Returns the first name's parse error.
    pub fn from_names<I>(names: I) -> Result<Self, CardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Hand::from_names(names).map(Self::from)
    }

    /// Creates a poker hand holding copies of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self::from(Hand::from_cards(cards))
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the underlying hand for mutation; the score follows every change.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the underlying hand, detached from scoring.
    #[must_use]
    pub fn into_hand(mut self) -> Hand {
        self.hand.unsubscribe(self.observer);
        self.hand
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the current evaluation, if the hand holds five cards.
    #[must_use]
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation.get()
    }

    /// Returns the current score, if the hand holds five cards.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.evaluation().map(|evaluation| evaluation.score())
    }

    /// Returns the current category, if the hand holds five cards.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.evaluation().map(|evaluation| evaluation.category())
    }

    fn try_evaluation(&self) -> Result<Evaluation, ScoreError> {
        self.evaluation()
            .ok_or_else(|| ScoreError::NotFiveCards(self.hand.len()))
    }

    /// Returns the current score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFiveCards`] if the hand is not scored.
    pub fn try_score(&self) -> Result<Score, ScoreError> {
        self.try_evaluation().map(|evaluation| evaluation.score())
    }

    /// Compares two hands by score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFiveCards`] if either hand is not scored.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ScoreError> {
        Ok(self.try_score()?.cmp(&other.try_score()?))
    }

    /// Describes the hand, e.g. "FH", "Full House" or
    /// "Full house, aces full of threes".
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFiveCards`] if the hand is not scored.
    pub fn describe(&self, style: DescriptionStyle) -> Result<String, ScoreError> {
        self.try_evaluation()
            .map(|evaluation| evaluation.describe(style))
    }

    /// Returns the video poker payout multiplier for this hand.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFiveCards`] if the hand is not scored.
    pub fn payout_multiplier(&self, scheme: PayoutScheme) -> Result<u64, ScoreError> {
        self.try_evaluation()
            .map(|evaluation| evaluation.payout_multiplier(scheme))
    }

    /// Returns the video poker winnings for a bet on this hand.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFiveCards`] if the hand is not scored.
    pub fn video_winnings(&self, bet: u64, scheme: PayoutScheme) -> Result<u64, ScoreError> {
        self.payout_multiplier(scheme)
            .map(|multiplier| multiplier.saturating_mul(bet))
    }
}

impl From<Hand> for PokerHand {
    fn from(mut hand: Hand) -> Self {
        let evaluation = Rc::new(Cell::new(evaluate_cards(hand.cards()).ok()));
        let slot = Rc::clone(&evaluation);
        let observer = hand.subscribe(move |cards| slot.set(evaluate_cards(cards).ok()));

        Self {
            hand,
            evaluation,
            observer,
        }
    }
}

impl Default for PokerHand {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the cards and the deck binding, with a fresh evaluator.
impl Clone for PokerHand {
    fn clone(&self) -> Self {
        Self::from(self.hand.clone())
    }
}

impl fmt::Debug for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokerHand")
            .field("cards", &self.hand.cards())
            .field("score", &self.score())
            .finish()
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hand, f)
    }
}

/// Hands are equal when both are scored and the scores are equal.
impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.score(), other.score()), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}
