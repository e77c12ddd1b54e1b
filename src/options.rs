//! Deck, payout and game configuration options.

/// Configuration options for a [`Deck`](crate::Deck).
///
/// ```
/// use pcards::DeckOptions;
///
/// let options = DeckOptions::default().with_packs(6);
/// assert_eq!(options.packs, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of standard 52-card packs. Must be positive.
    pub packs: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self { packs: 1 }
    }
}

impl DeckOptions {
    /// Sets the number of packs.
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }
}

/// Video poker payout table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PayoutScheme {
    /// Standard payouts.
    #[default]
    Normal,
    /// Generous payouts.
    Easy,
}

impl PayoutScheme {
    const NORMAL: [u64; 10] = [0, 1, 2, 3, 4, 6, 9, 25, 50, 800];
    const EASY: [u64; 10] = [0, 2, 3, 4, 15, 20, 50, 100, 250, 2500];

    /// Returns the multipliers indexed by hand category, high card first.
    ///
    /// The pair entry only applies to jacks or better.
    #[must_use]
    pub const fn table(self) -> &'static [u64; 10] {
        match self {
            Self::Normal => &Self::NORMAL,
            Self::Easy => &Self::EASY,
        }
    }
}

/// Configuration options for a [`VideoPoker`](crate::VideoPoker) machine.
///
/// ```
/// use pcards::{GameOptions, PayoutScheme};
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_scheme(PayoutScheme::Easy)
///     .with_max_bet(10);
/// assert_eq!(options.scheme, PayoutScheme::Easy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of packs in the machine's deck.
    pub packs: u8,
    /// Payout table.
    pub scheme: PayoutScheme,
    /// Largest accepted bet.
    pub max_bet: u64,
    /// Whether discards return to the deck when it is shuffled between rounds.
    pub fold_discards: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            scheme: PayoutScheme::Normal,
            max_bet: 5,
            fold_discards: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the payout table.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: PayoutScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the largest accepted bet.
    ///
    /// # Example
    ///
    /// ```
    /// use pcards::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bet(100);
    /// assert_eq!(options.max_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u64) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets whether discards are folded back in on each shuffle.
    #[must_use]
    pub const fn with_fold_discards(mut self, fold: bool) -> Self {
        self.fold_discards = fold;
        self
    }

    /// Returns the deck options implied by these game options.
    #[must_use]
    pub const fn deck_options(&self) -> DeckOptions {
        DeckOptions { packs: self.packs }
    }
}
