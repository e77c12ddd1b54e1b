//! Five-card poker hand evaluation.
//!
//! [`evaluate`] classifies five cards into a [`Category`] and builds a
//! [`Score`]: the category followed by the category's tie-break ranks. Scores
//! compare lexicographically, so comparing scores ranks any two hands.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::trace;

use crate::card::{ACE, Card, JACK, NameStyle, rank_string};
use crate::error::ScoreError;
use crate::options::PayoutScheme;

/// Poker hand categories, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// No other category.
    HighCard = 0,
    /// Two cards of one rank.
    Pair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five ranks in sequence.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Three of one rank and two of another.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// A straight in one suit.
    StraightFlush = 8,
    /// Ten to ace in one suit.
    RoyalFlush = 9,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the category's numeric value, 0 for high card to 9 for a royal flush.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the category for a numeric value.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the two letter code, e.g. "FH".
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::HighCard => "HI",
            Self::Pair => "PR",
            Self::TwoPair => "TP",
            Self::ThreeOfAKind => "TK",
            Self::Straight => "ST",
            Self::Flush => "FL",
            Self::FullHouse => "FH",
            Self::FourOfAKind => "FK",
            Self::StraightFlush => "SF",
            Self::RoyalFlush => "RF",
        }
    }

    /// Returns the category name, e.g. "Full House".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two pair",
            Self::ThreeOfAKind => "Three of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a kind",
            Self::StraightFlush => "Straight flush",
            Self::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Up to five ranks, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
struct RankList {
    ranks: [u8; 5],
    len: u8,
}

impl RankList {
    fn push(&mut self, rank: u8) {
        self.ranks[self.len as usize] = rank;
        self.len += 1;
    }

    fn extend(&mut self, ranks: &[u8]) {
        for &rank in ranks {
            self.push(rank);
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.ranks[..self.len as usize]
    }
}

/// Total order over poker hands: a category plus tie-break ranks.
///
/// Serialized as its score vector, category value first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    category: Category,
    tie_break: RankList,
}

impl Score {
    /// Returns the hand category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the tie-break ranks, most significant first.
    #[must_use]
    pub fn tie_break(&self) -> &[u8] {
        self.tie_break.as_slice()
    }

    /// Returns the full score vector, the category value first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut score = Vec::with_capacity(6);
        score.push(self.category.index());
        score.extend_from_slice(self.tie_break());
        score
    }
}

/// Rebuilds a score from its score vector.
impl TryFrom<Vec<u8>> for Score {
    type Error = ScoreError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        let (&category, ranks) = values.split_first().ok_or(ScoreError::InvalidScore)?;
        let category = Category::from_index(category).ok_or(ScoreError::InvalidScore)?;
        if ranks.len() > 5 || ranks.iter().any(|rank| !(2..=ACE).contains(rank)) {
            return Err(ScoreError::InvalidScore);
        }

        let mut tie_break = RankList::default();
        tie_break.extend(ranks);
        Ok(Self {
            category,
            tie_break,
        })
    }
}

impl From<Score> for Vec<u8> {
    fn from(score: Score) -> Self {
        score.to_vec()
    }
}

/// How a hand's value is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptionStyle {
    /// Two letter code, e.g. "TP".
    Short,
    /// Category name, e.g. "Two pair".
    Normal,
    /// Category with ranks where they apply, e.g. "Two pair, kings over threes".
    #[default]
    Full,
}

/// The result of evaluating five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    score: Score,
    singles: RankList,
    low_pair: Option<u8>,
    high_pair: Option<u8>,
    three: Option<u8>,
    four: Option<u8>,
    straight_high: Option<u8>,
    flush: bool,
}

impl Evaluation {
    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.score.category
    }

    /// Returns the unmatched ranks, highest first.
    #[must_use]
    pub fn singles(&self) -> &[u8] {
        self.singles.as_slice()
    }

    /// Returns the rank of the only pair, or the lower of two pairs.
    #[must_use]
    pub const fn low_pair(&self) -> Option<u8> {
        self.low_pair
    }

    /// Returns the rank of the higher of two pairs.
    #[must_use]
    pub const fn high_pair(&self) -> Option<u8> {
        self.high_pair
    }

    /// Returns the rank of three of a kind.
    #[must_use]
    pub const fn three(&self) -> Option<u8> {
        self.three
    }

    /// Returns the rank of four of a kind.
    #[must_use]
    pub const fn four(&self) -> Option<u8> {
        self.four
    }

    /// Returns the high card of a straight, 5 for the wheel.
    #[must_use]
    pub const fn straight_high(&self) -> Option<u8> {
        self.straight_high
    }

    /// Returns whether all five cards share a suit.
    #[must_use]
    pub const fn is_flush(&self) -> bool {
        self.flush
    }

    /// Describes the hand in the given style.
    #[must_use]
    pub fn describe(&self, style: DescriptionStyle) -> String {
        match style {
            DescriptionStyle::Short => self.category().code().into(),
            DescriptionStyle::Normal => self.category().name().into(),
            DescriptionStyle::Full => self.describe_full(),
        }
    }

    fn describe_full(&self) -> String {
        match (self.category(), self.low_pair, self.high_pair, self.three) {
            (Category::HighCard, ..) => {
                let high = self.singles().first().copied().unwrap_or(0);
                format!("{} high", rank_word(high, NameStyle::Capitalized))
            }
            (Category::Pair, Some(pair), ..) => format!("Pair of {}", plural(pair)),
            (Category::TwoPair, Some(low), Some(high), _) => {
                format!("Two pair, {} over {}", plural(high), plural(low))
            }
            (Category::FullHouse, Some(pair), _, Some(three)) => {
                format!("Full house, {} full of {}", plural(three), plural(pair))
            }
            (category, ..) => category.name().into(),
        }
    }

    /// Returns the payout multiplier under a scheme.
    ///
    /// A pair only pays if it is jacks or better.
    #[must_use]
    pub fn payout_multiplier(&self, scheme: PayoutScheme) -> u64 {
        if self.category() == Category::Pair && self.low_pair.is_some_and(|pair| pair < JACK) {
            return 0;
        }
        scheme.table()[self.category().index() as usize]
    }
}

fn rank_word(rank: u8, style: NameStyle) -> &'static str {
    rank_string(rank, style).unwrap_or_default()
}

fn plural(rank: u8) -> String {
    let word = rank_word(rank, NameStyle::Long);
    if word.ends_with('x') {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Evaluates five cards.
///
/// # Panics
///
/// Panics if five cards share a rank, which no hand dealt without wild
/// cards can hold.
#[must_use]
pub fn evaluate(cards: &[Card; 5]) -> Evaluation {
    let mut counts = [0u8; ACE as usize + 1];
    for card in cards {
        counts[card.rank() as usize] += 1;
    }

    let mut singles = RankList::default();
    let mut low_pair = None;
    let mut high_pair = None;
    let mut three = None;
    let mut four = None;

    for rank in (2..=ACE).rev() {
        match counts[rank as usize] {
            0 => {}
            1 => singles.push(rank),
            2 if low_pair.is_none() => low_pair = Some(rank),
            2 => high_pair = low_pair.replace(rank),
            3 => three = Some(rank),
            4 => four = Some(rank),
            _ => panic!("five cards of rank {rank} cannot be evaluated"),
        }
    }

    let mut ranks = cards.map(|card| card.rank());
    ranks.sort_unstable();

    let straight_high = if singles.len < 5 {
        None
    } else if ranks[4] - ranks[0] == 4 {
        Some(ranks[4])
    } else if ranks[4] - ranks[3] == 9 {
        // The wheel: A-2-3-4-5, the ace plays low.
        Some(5)
    } else {
        None
    };
    let flush = cards.iter().all(|card| card.suit() == cards[0].suit());

    let category = match straight_high {
        Some(ACE) if flush => Category::RoyalFlush,
        Some(_) if flush => Category::StraightFlush,
        _ if four.is_some() => Category::FourOfAKind,
        _ if three.is_some() && low_pair.is_some() => Category::FullHouse,
        _ if flush => Category::Flush,
        Some(_) => Category::Straight,
        None if three.is_some() => Category::ThreeOfAKind,
        None if high_pair.is_some() => Category::TwoPair,
        None if low_pair.is_some() => Category::Pair,
        None => Category::HighCard,
    };

    let mut tie_break = RankList::default();
    ranks.reverse();
    match category {
        Category::HighCard | Category::Flush => tie_break.extend(&ranks),
        Category::Pair => {
            tie_break.extend(&[low_pair.unwrap_or_default()]);
            tie_break.extend(singles.as_slice());
        }
        Category::TwoPair => {
            tie_break.extend(&[high_pair.unwrap_or_default(), low_pair.unwrap_or_default()]);
            tie_break.extend(singles.as_slice());
        }
        Category::ThreeOfAKind => {
            tie_break.extend(&[three.unwrap_or_default()]);
            tie_break.extend(singles.as_slice());
        }
        Category::Straight | Category::StraightFlush => {
            tie_break.extend(&[straight_high.unwrap_or_default()]);
        }
        Category::FullHouse => {
            tie_break.extend(&[three.unwrap_or_default(), low_pair.unwrap_or_default()]);
        }
        Category::FourOfAKind => {
            tie_break.extend(&[four.unwrap_or_default()]);
            tie_break.extend(singles.as_slice());
        }
        Category::RoyalFlush => {}
    }

    trace!(?category, tie_break = ?tie_break.as_slice(), "evaluated hand");

    Evaluation {
        score: Score {
            category,
            tie_break,
        },
        singles,
        low_pair,
        high_pair,
        three,
        four,
        straight_high,
        flush,
    }
}

/// Evaluates a slice of cards, which must hold exactly five.
///
/// # Errors
///
/// Returns [`ScoreError::NotFiveCards`] for any other length.
///
/// # Panics
///
/// Panics under the same conditions as [`evaluate`].
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, ScoreError> {
    let cards: &[Card; 5] = cards
        .try_into()
        .map_err(|_| ScoreError::NotFiveCards(cards.len()))?;
    Ok(evaluate(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(names: [&str; 5]) -> Evaluation {
        evaluate(&names.map(|name| Card::from_name(name).unwrap()))
    }

    #[test]
    fn pairs_are_bucketed_low_and_high() {
        let two_pair = eval(["KS", "3D", "KH", "3C", "9S"]);
        assert_eq!(two_pair.low_pair(), Some(3));
        assert_eq!(two_pair.high_pair(), Some(13));
        assert_eq!(two_pair.singles(), &[9]);
        assert_eq!(two_pair.score().tie_break(), &[13, 3, 9]);

        let pair = eval(["QS", "QD", "2H", "7C", "AS"]);
        assert_eq!(pair.low_pair(), Some(12));
        assert_eq!(pair.high_pair(), None);
        assert_eq!(pair.singles(), &[14, 7, 2]);
    }

    #[test]
    fn wheel_plays_ace_low() {
        let wheel = eval(["AS", "2D", "3H", "4C", "5S"]);
        assert_eq!(wheel.straight_high(), Some(5));
        assert_eq!(wheel.score().to_vec(), [4, 5]);
    }

    #[test]
    fn plural_words() {
        assert_eq!(plural(6), "sixes");
        assert_eq!(plural(14), "aces");
        assert_eq!(plural(3), "threes");
    }

    #[test]
    #[should_panic(expected = "five cards of rank")]
    fn five_of_a_kind_is_a_defect() {
        let ace = Card::from_name("AS").unwrap();
        let _ = evaluate(&[ace; 5]);
    }
}
