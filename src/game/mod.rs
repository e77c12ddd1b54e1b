//! Video poker machine and round flow.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::deck::Deck;
use crate::error::{DeckError, GameError};
use crate::hand::{Hand, SharedDeck};
use crate::options::GameOptions;
use crate::poker_hand::PokerHand;

mod bet;
mod draw;
pub mod state;

pub use state::GameState;

/// A single-hand draw poker machine.
///
/// A round runs [`bet`](Self::bet), [`deal`](Self::deal) and then
/// [`draw`](Self::draw), which exchanges the chosen cards and settles the
/// bet against the configured [`PayoutScheme`](crate::PayoutScheme).
///
/// # Example
///
/// ```
/// use pcards::{GameOptions, GameState, VideoPoker};
///
/// let mut game = VideoPoker::new(GameOptions::default(), 100, 42).unwrap();
/// game.bet(5).unwrap();
/// game.deal().unwrap();
/// let result = game.draw(&[1, 2]).unwrap();
///
/// assert_eq!(game.state(), GameState::RoundOver);
/// assert_eq!(game.credits(), 95 + result.payout);
/// ```
#[derive(Debug)]
pub struct VideoPoker {
    /// Game options.
    options: GameOptions,
    /// The machine's deck, shared with the hand.
    deck: SharedDeck,
    /// The player's hand.
    hand: PokerHand,
    /// Credits not currently at stake.
    credits: u64,
    /// Bet for the current round.
    bet: u64,
    /// Current game state.
    state: GameState,
}

impl VideoPoker {
    /// Creates a machine holding `credits`, shuffling with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.packs` is zero.
    pub fn new(options: GameOptions, credits: u64, seed: u64) -> Result<Self, GameError> {
        let mut deck = Deck::new(options.deck_options(), seed)?;
        deck.shuffle(false);
        let deck = Rc::new(RefCell::new(deck));
        let hand = PokerHand::from(Hand::with_deck(Rc::clone(&deck)));

        Ok(Self {
            options,
            deck,
            hand,
            credits,
            bet: 0,
            state: GameState::WaitingForBet,
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the credits not currently at stake.
    #[must_use]
    pub const fn credits(&self) -> u64 {
        self.credits
    }

    /// Returns the bet at stake, or zero once the round is settled.
    #[must_use]
    pub const fn current_bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &PokerHand {
        &self.hand
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.borrow().len()
    }

    /// Returns the number of cards in the deck's discard pile.
    #[must_use]
    pub fn discards(&self) -> usize {
        self.deck.borrow().discard_len()
    }

    /// Adds credits to the machine.
    pub const fn add_credits(&mut self, amount: u64) {
        self.credits = self.credits.saturating_add(amount);
    }

    /// Removes all credits and returns them, refunding any bet not yet dealt.
    ///
    /// A settled bet is never refunded.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] while a dealt hand is in play.
    pub fn cash_out(&mut self) -> Result<u64, GameError> {
        if matches!(self.state, GameState::Dealt) {
            return Err(GameError::InvalidState);
        }

        let total = self.credits.saturating_add(self.bet);
        self.credits = 0;
        self.bet = 0;
        Ok(total)
    }

    /// Discards the last hand and returns the machine to `WaitingForBet`.
    ///
    /// A bet placed but not yet dealt is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] while a dealt hand is in play.
    pub fn clear_round(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::Dealt => Err(GameError::InvalidState),
            GameState::WaitingForBet => Ok(()),
            GameState::RoundOver => {
                self.hand.hand_mut().discard()?;
                self.state = GameState::WaitingForBet;
                Ok(())
            }
        }
    }

    /// Makes sure enough cards remain for a deal and a full exchange, then
    /// shuffles.
    fn prepare_deck(&self) -> Result<(), DeckError> {
        let needed = PokerHand::SIZE * 2;
        let mut deck = self.deck.borrow_mut();

        if deck.len() < needed {
            deck.replace_discards();
        }
        if deck.len() < needed {
            return Err(DeckError::Empty {
                requested: needed,
                remaining: deck.len(),
            });
        }

        deck.shuffle(self.options.fold_discards);
        Ok(())
    }
}
