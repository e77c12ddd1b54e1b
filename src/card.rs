//! Card types, names and parsing.
//!
//! A card is identified by a rank (2 to 14, where 14 is the ace; 1 is
//! accepted as an alias) and a suit. Every card also has a canonical index
//! in `0..52`: `suit * 13 + (rank - 1)`, with the ace at offset 0, so index 0
//! is the ace of clubs and index 51 the king of diamonds.

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per pack.
pub const DECK_SIZE: usize = 52;

/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;
/// Rank of an ace. Aces are always high.
pub const ACE: u8 = 14;

/// Accepted rank keys, in precedence order for prefix matching.
const RANK_KEYS: [(&str, u8); 22] = [
    ("ace", ACE),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("jack", JACK),
    ("queen", QUEEN),
    ("king", KING),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
];

/// Accepted suit keys, in precedence order for prefix matching.
const SUIT_KEYS: [(&str, Suit); 4] = [
    ("clubs", Suit::Clubs),
    ("hearts", Suit::Hearts),
    ("spades", Suit::Spades),
    ("diamonds", Suit::Diamonds),
];

// Indexed by rank, 1 and 14 are both the ace.
const RANK_SHORT: [&str; 15] = [
    "", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];
const RANK_LONG: [&str; 15] = [
    "", "ace", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack",
    "queen", "king", "ace",
];
const RANK_CAPITALIZED: [&str; 15] = [
    "", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King", "Ace",
];

/// Card suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Hearts.
    Hearts = 1,
    /// Spades.
    Spades = 2,
    /// Diamonds.
    Diamonds = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the suit for an integer in `0..4`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Hearts),
            2 => Some(Self::Spades),
            3 => Some(Self::Diamonds),
            _ => None,
        }
    }

    /// Returns the integer value of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit name in the given style, e.g. "S", "spades" or "Spades".
    #[must_use]
    pub const fn name(self, style: NameStyle) -> &'static str {
        match (self, style) {
            (Self::Clubs, NameStyle::Short) => "C",
            (Self::Hearts, NameStyle::Short) => "H",
            (Self::Spades, NameStyle::Short) => "S",
            (Self::Diamonds, NameStyle::Short) => "D",
            (Self::Clubs, NameStyle::Long) => "clubs",
            (Self::Hearts, NameStyle::Long) => "hearts",
            (Self::Spades, NameStyle::Long) => "spades",
            (Self::Diamonds, NameStyle::Long) => "diamonds",
            (Self::Clubs, NameStyle::Capitalized) => "Clubs",
            (Self::Hearts, NameStyle::Capitalized) => "Hearts",
            (Self::Spades, NameStyle::Capitalized) => "Spades",
            (Self::Diamonds, NameStyle::Capitalized) => "Diamonds",
        }
    }
}

/// How a rank, suit or card name is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// Single letters or digits, e.g. "A", "10", "S".
    Short,
    /// Lowercase words, e.g. "ace", "spades".
    #[default]
    Long,
    /// Capitalized words, e.g. "Ace", "Spades".
    Capitalized,
}

/// Returns the name of a rank in `1..=14` in the given style.
///
/// # Errors
///
/// Returns [`CardError::InvalidRank`] if the rank is outside `1..=14`.
pub fn rank_string(rank: u8, style: NameStyle) -> Result<&'static str, CardError> {
    let table = match style {
        NameStyle::Short => &RANK_SHORT,
        NameStyle::Long => &RANK_LONG,
        NameStyle::Capitalized => &RANK_CAPITALIZED,
    };

    match rank {
        1..=14 => Ok(table[rank as usize]),
        _ => Err(CardError::InvalidRank(rank.to_string())),
    }
}

/// Returns the name of a suit in `0..4` in the given style.
///
/// # Errors
///
/// Returns [`CardError::InvalidSuit`] if the suit is outside `0..4`.
pub fn suit_string(suit: u8, style: NameStyle) -> Result<&'static str, CardError> {
    Suit::from_index(suit)
        .map(|suit| suit.name(style))
        .ok_or_else(|| CardError::InvalidSuit(suit.to_string()))
}

/// Parses a rank from a name or a prefix of one.
///
/// Matching is case-insensitive against "ace" through "king" and the
/// numerals "2" through "10". A prefix that matches several keys resolves
/// to the first key in that order, so "t" is a two and "1" is a ten.
///
/// # Errors
///
/// Returns [`CardError::MissingRank`] for an empty string and
/// [`CardError::InvalidRank`] if no key matches.
pub fn parse_rank(text: &str) -> Result<u8, CardError> {
    if text.is_empty() {
        return Err(CardError::MissingRank);
    }

    let lower = text.to_ascii_lowercase();
    RANK_KEYS
        .iter()
        .find(|(key, _)| key.starts_with(lower.as_str()))
        .map(|&(_, rank)| rank)
        .ok_or_else(|| CardError::InvalidRank(text.to_string()))
}

/// Parses a suit from a name or a prefix of one, e.g. "sp" or "Hearts".
///
/// # Errors
///
/// Returns [`CardError::MissingSuit`] for an empty string and
/// [`CardError::InvalidSuit`] if no key matches.
pub fn parse_suit(text: &str) -> Result<Suit, CardError> {
    if text.is_empty() {
        return Err(CardError::MissingSuit);
    }

    let lower = text.to_ascii_lowercase();
    SUIT_KEYS
        .iter()
        .find(|(key, _)| key.starts_with(lower.as_str()))
        .map(|&(_, suit)| suit)
        .ok_or_else(|| CardError::InvalidSuit(text.to_string()))
}

/// A rank given either as an integer or as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankValue<'a> {
    /// Integer rank in `1..=14`.
    Number(u8),
    /// Rank name or prefix, e.g. "queen", "q" or "10".
    Text(&'a str),
}

impl RankValue<'_> {
    /// Normalizes the rank to `2..=14`, mapping a low ace to 14.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is out of range or cannot be parsed.
    pub fn resolve(self) -> Result<u8, CardError> {
        match self {
            Self::Number(1) => Ok(ACE),
            Self::Number(rank @ 2..=14) => Ok(rank),
            Self::Number(rank) => Err(CardError::InvalidRank(rank.to_string())),
            Self::Text(text) => parse_rank(text),
        }
    }
}

impl From<u8> for RankValue<'_> {
    fn from(rank: u8) -> Self {
        Self::Number(rank)
    }
}

impl<'a> From<&'a str> for RankValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// A suit given as a [`Suit`], an integer or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitValue<'a> {
    /// A typed suit.
    Suit(Suit),
    /// Integer suit in `0..4`.
    Number(u8),
    /// Suit name or prefix, e.g. "diamonds" or "d".
    Text(&'a str),
}

impl SuitValue<'_> {
    /// Resolves the value to a [`Suit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the suit is out of range or cannot be parsed.
    pub fn resolve(self) -> Result<Suit, CardError> {
        match self {
            Self::Suit(suit) => Ok(suit),
            Self::Number(suit) => {
                Suit::from_index(suit).ok_or_else(|| CardError::InvalidSuit(suit.to_string()))
            }
            Self::Text(text) => parse_suit(text),
        }
    }
}

impl From<Suit> for SuitValue<'_> {
    fn from(suit: Suit) -> Self {
        Self::Suit(suit)
    }
}

impl From<u8> for SuitValue<'_> {
    fn from(suit: u8) -> Self {
        Self::Number(suit)
    }
}

impl<'a> From<&'a str> for SuitValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// The ways a card can be identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKey<'a> {
    /// A rank and a suit.
    RankSuit(RankValue<'a>, SuitValue<'a>),
    /// A canonical index in `0..52`.
    Index(u8),
    /// A short name such as "AS" or "10D".
    Name(&'a str),
}

/// Loose card arguments, for callers that collect identifying fields
/// independently (e.g. from user input) and need them checked for shape.
///
/// Exactly one of rank and suit together, an index, or a name must be set.
///
/// ```
/// use pcards::{CardArgs, CardError};
///
/// let card = CardArgs::new().rank("queen").suit("h").build().unwrap();
/// assert_eq!(card.name_string(pcards::NameStyle::Short), "QH");
///
/// let err = CardArgs::new().rank(12u8).index(3).build().unwrap_err();
/// assert_eq!(err, CardError::MismatchedArguments);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardArgs<'a> {
    rank: Option<RankValue<'a>>,
    suit: Option<SuitValue<'a>>,
    index: Option<u8>,
    name: Option<&'a str>,
}

impl<'a> CardArgs<'a> {
    /// Creates an empty argument set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rank: None,
            suit: None,
            index: None,
            name: None,
        }
    }

    /// Sets the rank.
    #[must_use]
    pub fn rank(mut self, rank: impl Into<RankValue<'a>>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    /// Sets the suit.
    #[must_use]
    pub fn suit(mut self, suit: impl Into<SuitValue<'a>>) -> Self {
        self.suit = Some(suit.into());
        self
    }

    /// Sets the index.
    #[must_use]
    pub const fn index(mut self, index: u8) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the short name.
    #[must_use]
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Checks the argument shape and returns the matching [`CardKey`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MismatchedArguments`] if nothing is set, if only
    /// one of rank and suit is set, or if identifiers are combined.
    pub const fn into_key(self) -> Result<CardKey<'a>, CardError> {
        match (self.rank, self.suit, self.index, self.name) {
            (Some(rank), Some(suit), None, None) => Ok(CardKey::RankSuit(rank, suit)),
            (None, None, Some(index), None) => Ok(CardKey::Index(index)),
            (None, None, None, Some(name)) => Ok(CardKey::Name(name)),
            _ => Err(CardError::MismatchedArguments),
        }
    }

    /// Builds the card.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error or a value error for bad inputs.
    pub fn build(self) -> Result<Card, CardError> {
        Card::from_key(self.into_key()?)
    }
}

/// A playing card.
///
/// Cards compare, and hash, by rank only with aces always high; the suit
/// only matters for flushes and for [`Card::index`] identity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a card from a rank in `1..=14` and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        let rank = RankValue::Number(rank).resolve()?;
        Ok(Self { rank, suit })
    }

    /// Creates a card from its canonical index in `0..52`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIndex`] if the index is out of range.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        let Some(suit) = Suit::from_index(index / 13) else {
            return Err(CardError::InvalidIndex(index));
        };

        let rank = match index % 13 {
            0 => ACE,
            offset => offset + 1,
        };

        Ok(Self { rank, suit })
    }

    /// Creates a card from a short name such as "AS", "10d" or "qh".
    ///
    /// The last character is the suit and everything before it the rank,
    /// both parsed as with [`parse_rank`] and [`parse_suit`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidName`] if the name is too short, or the
    /// rank or suit error if either part does not parse.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        let split = match name.char_indices().next_back() {
            Some((split, _)) if split > 0 => split,
            _ => return Err(CardError::InvalidName(name.to_string())),
        };

        let (rank, suit) = name.split_at(split);
        Ok(Self {
            rank: parse_rank(rank)?,
            suit: parse_suit(suit)?,
        })
    }

    /// Creates a card from any [`CardKey`].
    ///
    /// # Errors
    ///
    /// Returns a value error if the key does not describe a valid card.
    pub fn from_key(key: CardKey<'_>) -> Result<Self, CardError> {
        match key {
            CardKey::RankSuit(rank, suit) => Ok(Self {
                rank: rank.resolve()?,
                suit: suit.resolve()?,
            }),
            CardKey::Index(index) => Self::from_index(index),
            CardKey::Name(name) => Self::from_name(name),
        }
    }

    /// Returns the rank, with aces as 14.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the rank with aces as 1.
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        if self.rank == ACE { 1 } else { self.rank }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the canonical index in `0..52`.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.suit.index() * 13 + self.rank_value() - 1
    }

    /// Returns whether both cards are the same card, suit included.
    #[must_use]
    pub const fn is_same(&self, other: &Self) -> bool {
        self.index() == other.index()
    }

    /// Sort key ordering cards by rank with aces low, then by suit.
    #[must_use]
    pub const fn sort_key(&self) -> u8 {
        (self.rank_value() - 1) * 4 + self.suit.index()
    }

    /// Returns the rank name, e.g. "A", "ace" or "Ace".
    #[must_use]
    pub const fn rank_string(&self, style: NameStyle) -> &'static str {
        match style {
            NameStyle::Short => RANK_SHORT[self.rank as usize],
            NameStyle::Long => RANK_LONG[self.rank as usize],
            NameStyle::Capitalized => RANK_CAPITALIZED[self.rank as usize],
        }
    }

    /// Returns the suit name, e.g. "S", "spades" or "Spades".
    #[must_use]
    pub const fn suit_string(&self, style: NameStyle) -> &'static str {
        self.suit.name(style)
    }

    /// Returns the card name, e.g. "AS", "ace of spades" or "Ace of Spades".
    #[must_use]
    pub fn name_string(&self, style: NameStyle) -> String {
        let separator = if style == NameStyle::Short { "" } else { " of " };
        let mut name = String::with_capacity(20);
        name.push_str(self.rank_string(style));
        name.push_str(separator);
        name.push_str(self.suit_string(style));
        name
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {}",
            self.rank_string(NameStyle::Capitalized),
            self.suit_string(NameStyle::Capitalized)
        )
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.index()
    }
}
