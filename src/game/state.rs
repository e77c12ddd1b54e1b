//! Game state types.

/// Round state of a [`VideoPoker`](super::VideoPoker) machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Accepting a bet for the next round.
    #[default]
    WaitingForBet,
    /// Five cards are dealt and the player may exchange some of them.
    Dealt,
    /// The round has been settled; the next bet starts a new round.
    RoundOver,
}
