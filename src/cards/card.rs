//! Card values.
//!
//! A `Card` is an immutable `(rank, suit, color)` triple. Color comes from
//! the suit for every standard card; jokers have no suit, so their color
//! is given explicitly. A joker rank and `Suit::None` always go together.

use serde::{Deserialize, Deserializer, Serialize};

use super::taxonomy::{Color, Rank, Suit};
use crate::core::error::{EngineError, Result};

/// Asset key for the back of a card.
pub const CARD_BACK: &str = "red_back";

/// Number of distinct card indices (52 standard cards plus two jokers).
pub const CARD_INDEX_COUNT: usize = 54;

/// One physical card.
///
/// ```
/// use patience::cards::{Card, Color, Rank, Suit};
///
/// let queen = Card::standard(Rank::Queen, Suit::Hearts);
/// assert_eq!(queen.color(), Color::Red);
/// assert_eq!(queen.name(), "Queen of Hearts");
/// assert_eq!(queen.asset_id(), "queen_hearts");
///
/// let joker = Card::joker(Color::Red);
/// assert_eq!(joker.name(), "Red Joker");
/// assert_eq!(joker.asset_id(), "red_joker");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    color: Color,
}

impl Card {
    /// Create a card.
    ///
    /// A joker rank or `Suit::None` yields a joker of `color`. Any other
    /// card takes its color from the suit and `color` is ignored.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, color: Color) -> Self {
        match (rank, suit.color()) {
            (Rank::Joker, _) | (_, None) => Self {
                rank: Rank::Joker,
                suit: Suit::None,
                color,
            },
            (_, Some(derived)) => Self {
                rank,
                suit,
                color: derived,
            },
        }
    }

    /// Create a standard suited card.
    #[must_use]
    pub const fn standard(rank: Rank, suit: Suit) -> Self {
        Self::new(rank, suit, Color::Red)
    }

    /// Create a joker of the given color.
    #[must_use]
    pub const fn joker(color: Color) -> Self {
        Self::new(Rank::Joker, Suit::None, color)
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_joker(self) -> bool {
        self.rank == Rank::Joker
    }

    /// Human-readable name, e.g. "Queen of Hearts" or "Red Joker".
    #[must_use]
    pub fn name(self) -> String {
        if self.is_joker() {
            format!("{} {}", self.color, self.rank)
        } else {
            format!("{} of {}", self.rank, self.suit)
        }
    }

    /// Stable asset key, e.g. "queen_hearts" or "red_joker".
    #[must_use]
    pub fn asset_id(self) -> String {
        if self.is_joker() {
            format!("{}_{}", self.color.name(), self.rank.name())
        } else {
            format!("{}_{}", self.rank.name(), self.suit.name())
        }
    }

    /// Stable small integer id in `0..54`.
    ///
    /// Standard cards use `suit position * 13 + rank - 1` with suits in
    /// deal order (Diamonds, Clubs, Spades, Hearts); the red joker is 52
    /// and the black joker 53.
    #[must_use]
    pub fn index(self) -> u8 {
        if self.is_joker() {
            return 52 + self.color.value();
        }
        (self.suit.value() - 1) * 13 + self.rank.value() - 1
    }

    /// Inverse of [`Card::index`].
    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0..=51 => {
                let suit = Suit::PLAYING[usize::from(index / 13)];
                let rank = Rank::PLAYING[usize::from(index % 13)];
                Ok(Card::standard(rank, suit))
            }
            52 => Ok(Card::joker(Color::Red)),
            53 => Ok(Card::joker(Color::Black)),
            _ => Err(EngineError::UnknownCardIndex(index)),
        }
    }
}

impl<'de> Deserialize<'de> for Card {
    /// Rebuilds through [`Card::new`], so a payload cannot pair a suit with
    /// the wrong color or a suitless card with a playing rank.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            rank: Rank,
            suit: Suit,
            color: Color,
        }

        let Fields { rank, suit, color } = Fields::deserialize(deserializer)?;
        Ok(Card::new(rank, suit, color))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
