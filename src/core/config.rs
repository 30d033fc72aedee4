//! Game configuration types.
//!
//! - `PileId`: Stable slot identifier shared with the presentation layer
//! - `PileRole`: What a slot is used for (tableau column, waste, foundation)
//! - `GameConfig`: Per-game options (seed, joker variant)

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Pile identifier.
///
/// Ids are small, stable integers so a presentation layer can map them
/// to whatever visual primitive it uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u8);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The ID as an index into the board's pile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Well-known role of a pile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    /// One of the main playing columns, numbered from 0.
    Tableau(u8),
    /// Face-up pile fed by drawing from the deck.
    Waste,
    /// Ace-to-king destination pile for a single suit.
    Foundation(Suit),
}

impl PileRole {
    /// Flat piles only show their top card.
    #[must_use]
    pub fn is_flat(self) -> bool {
        !matches!(self, PileRole::Tableau(_))
    }

    /// Asset key shown when the pile is empty.
    #[must_use]
    pub fn placeholder(self) -> String {
        match self {
            PileRole::Tableau(_) => "empty_tableau".to_string(),
            PileRole::Waste => "empty_waste".to_string(),
            PileRole::Foundation(suit) => format!("foundation_{}", suit.name()),
        }
    }
}

impl std::fmt::Display for PileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRole::Tableau(column) => write!(f, "Tableau {}", column),
            PileRole::Waste => write!(f, "Waste"),
            PileRole::Foundation(suit) => write!(f, "{} Foundation", suit),
        }
    }
}

/// Per-game options.
///
/// ```
/// use patience::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(7).with_jokers(true);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.jokers);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Add a red and a black joker to the deck.
    ///
    /// Jokers are out of play: no pile accepts them.
    pub jokers: bool,
}

impl GameConfig {
    /// Create a configuration with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the joker variant.
    #[must_use]
    pub fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }
}
