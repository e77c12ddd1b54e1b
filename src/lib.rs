//! Playing cards, decks, hands and five-card poker evaluation with optional
//! `no_std` support.
//!
//! The crate provides [`Card`], [`Deck`] and [`Hand`] building blocks, a
//! [`PokerHand`] that keeps itself scored as its cards change, and a
//! [`VideoPoker`] machine that runs draw poker rounds against a payout table.
//!
//! # Example
//!
//! ```
//! use pcards::{Category, DescriptionStyle, PokerHand};
//!
//! let threes = PokerHand::from_names(["AS", "AH", "3D", "3C", "3S"]).unwrap();
//! let kings = PokerHand::from_names(["KS", "KD", "KH", "9C", "9S"]).unwrap();
//!
//! assert_eq!(threes.category(), Some(Category::FullHouse));
//! assert_eq!(
//!     threes.describe(DescriptionStyle::Full).unwrap(),
//!     "Full house, threes full of aces"
//! );
//! assert!(kings > threes);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod hand;
pub mod options;
pub mod poker_hand;
pub mod result;

// Re-export main types
pub use card::{
    ACE, Card, CardArgs, CardKey, DECK_SIZE, JACK, KING, NameStyle, QUEEN, RankValue, Suit,
    SuitValue, parse_rank, parse_suit, rank_string, suit_string,
};
pub use deck::Deck;
pub use error::{CardError, DeckError, GameError, HandError, ScoreError};
pub use evaluation::{Category, DescriptionStyle, Evaluation, Score, evaluate, evaluate_cards};
pub use game::{GameState, VideoPoker};
pub use hand::{Hand, ObserverId, SharedDeck, combine, repeat};
pub use options::{DeckOptions, GameOptions, PayoutScheme};
pub use poker_hand::PokerHand;
pub use result::RoundResult;
