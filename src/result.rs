//! Round result types for settlement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::evaluation::Category;

/// Result of a settled video poker round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The final five cards, in hand order.
    pub cards: Vec<Card>,
    /// Category of the final hand.
    pub category: Category,
    /// Full description of the final hand, e.g. "Pair of jacks".
    pub description: String,
    /// The bet placed on the round.
    pub bet: u64,
    /// Payout multiplier awarded for the hand.
    pub multiplier: u64,
    /// Credits won (bet times multiplier).
    pub payout: u64,
    /// Credits held after the payout.
    pub credits: u64,
}

impl RoundResult {
    /// Returns whether the hand paid anything.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.payout > 0
    }

    /// Returns the net change in credits over the round.
    #[must_use]
    pub fn net(&self) -> i128 {
        i128::from(self.payout) - i128::from(self.bet)
    }
}
