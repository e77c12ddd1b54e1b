use tracing::debug;

use crate::error::{GameError, ScoreError};
use crate::evaluation::DescriptionStyle;
use crate::result::RoundResult;

use super::{GameState, VideoPoker};

impl VideoPoker {
    /// Exchanges the cards at the given 1-based positions and settles the
    /// round.
    ///
    /// An empty slice stands on the dealt hand. Winnings are added to the
    /// credits before the result is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in play or a position is out of range;
    /// the hand is left untouched in that case.
    pub fn draw(&mut self, positions: &[usize]) -> Result<RoundResult, GameError> {
        if self.state != GameState::Dealt {
            return Err(GameError::InvalidState);
        }

        if !positions.is_empty() {
            self.hand.hand_mut().exchange(positions)?;
        }

        self.settle()
    }

    /// Stands on the dealt hand and settles the round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if no hand is in play.
    pub fn stand(&mut self) -> Result<RoundResult, GameError> {
        self.draw(&[])
    }

    fn settle(&mut self) -> Result<RoundResult, GameError> {
        let evaluation = self
            .hand
            .evaluation()
            .ok_or(ScoreError::NotFiveCards(self.hand.cards().len()))?;

        let bet = core::mem::take(&mut self.bet);
        let multiplier = evaluation.payout_multiplier(self.options.scheme);
        let payout = multiplier.saturating_mul(bet);
        self.credits = self.credits.saturating_add(payout);
        self.state = GameState::RoundOver;

        let description = evaluation.describe(DescriptionStyle::Full);
        debug!(
            hand = %self.hand,
            description = %description,
            bet,
            payout,
            credits = self.credits,
            "settled round"
        );

        Ok(RoundResult {
            cards: self.hand.hand().to_vec(),
            category: evaluation.category(),
            description,
            bet,
            multiplier,
            payout,
            credits: self.credits,
        })
    }
}
