use tracing::debug;

use crate::error::GameError;
use crate::poker_hand::PokerHand;

use super::{GameState, VideoPoker};

impl VideoPoker {
    /// Places the bet for the next round.
    ///
    /// After a settled round this first clears it. A second bet before the
    /// deal replaces the first, which is refunded.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in play, the bet is zero or above the
    /// table maximum, or the player lacks credits.
    pub fn bet(&mut self, amount: u64) -> Result<(), GameError> {
        if amount == 0 {
            return Err(GameError::ZeroBet);
        }
        if amount > self.options.max_bet {
            return Err(GameError::BetTooLarge(self.options.max_bet));
        }

        self.clear_round()?;

        let available = self.credits.saturating_add(self.bet);
        if available < amount {
            return Err(GameError::InsufficientCredits);
        }

        self.credits = available - amount;
        self.bet = amount;
        debug!(bet = amount, credits = self.credits, "placed bet");

        Ok(())
    }

    /// Shuffles and deals five cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the machine is not waiting for a deal, no bet has
    /// been placed, or the deck cannot supply the cards.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.state != GameState::WaitingForBet {
            return Err(GameError::InvalidState);
        }
        if self.bet == 0 {
            return Err(GameError::ZeroBet);
        }

        self.prepare_deck()?;
        self.hand.hand_mut().draw(PokerHand::SIZE)?;
        self.state = GameState::Dealt;
        debug!(hand = %self.hand, "dealt hand");

        Ok(())
    }
}
