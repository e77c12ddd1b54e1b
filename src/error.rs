//! Error types for card, deck, hand and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while constructing or parsing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// No identifying arguments, or a conflicting combination of them.
    #[error("missing or mismatched card arguments")]
    MismatchedArguments,
    /// An empty rank string.
    #[error("missing rank value")]
    MissingRank,
    /// An empty suit string.
    #[error("missing suit value")]
    MissingSuit,
    /// Rank outside 1..=14 or an unrecognized rank string.
    #[error("invalid rank value '{0}'")]
    InvalidRank(String),
    /// Suit outside 0..=3 or an unrecognized suit string.
    #[error("invalid suit value '{0}'")]
    InvalidSuit(String),
    /// Index outside 0..=51.
    #[error("invalid index value '{0}'")]
    InvalidIndex(u8),
    /// A short name that cannot be split into a rank and a suit.
    #[error("invalid card name '{0}'")]
    InvalidName(String),
}

/// Errors that can occur while operating on a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than remain in the deck.
    #[error("cannot draw {requested} cards, only {remaining} remain in the deck")]
    Empty {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// The number of packs must be positive.
    #[error("number of packs must be a positive integer")]
    InvalidPacks,
    /// Index outside the remaining deck.
    #[error("deck index {index} out of range for {len} cards")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur while operating on a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The operation needs a deck and none is bound to the hand.
    #[error("no deck is associated with this hand")]
    NoDeck,
    /// The bound deck rejected the operation.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A card name or rank could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// Zero-based index outside the hand.
    #[error("hand index {index} out of range for {len} cards")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// One-based exchange position outside the hand.
    #[error("hand position {position} out of range for {len} cards")]
    PositionOutOfRange {
        /// Requested position, starting at 1.
        position: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// An exchange named the same position twice.
    #[error("hand position {0} given more than once")]
    DuplicatePosition(usize),
    /// The card is not held in the hand.
    #[error("card not in hand")]
    NotFound,
    /// A hand can only be repeated a positive number of times.
    #[error("a hand can only be repeated a positive number of times")]
    InvalidRepeat,
}

/// Errors that can occur when scoring or comparing poker hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The hand does not hold exactly five cards.
    #[error("a poker hand needs exactly five cards, found {0}")]
    NotFiveCards(usize),
    /// A score vector with an unknown category or malformed tie-break ranks.
    #[error("invalid score vector")]
    InvalidScore,
}

/// Errors that can occur while playing a video poker round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the table maximum.
    #[error("bet exceeds the table maximum of {0}")]
    BetTooLarge(u64),
    /// Insufficient credits.
    #[error("insufficient credits")]
    InsufficientCredits,
    /// The hand or the deck rejected the action.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The hand could not be scored.
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl From<DeckError> for GameError {
    fn from(err: DeckError) -> Self {
        Self::Hand(HandError::Deck(err))
    }
}
