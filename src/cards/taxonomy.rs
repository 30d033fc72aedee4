//! Rank, suit, and color enumerations.
//!
//! Each enum maps both ways between the variant, its numeric code, and its
//! lowercase name. The tables are `match` expressions, so the compiler
//! checks that every variant is covered.
//!
//! | Enum  | Codes  | Names                                      |
//! |-------|--------|--------------------------------------------|
//! | Rank  | 0..=13 | joker, ace, two, ..., ten, jack, queen, king |
//! | Suit  | 0..=4  | none, diamonds, clubs, spades, hearts      |
//! | Color | 0..=1  | red, black                                 |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Card rank.
///
/// Ace through King are ordered by their numeric code so run-building
/// can use `succ`/`pred`. Joker (code 0) sits outside that order and is
/// never the successor or predecessor of anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Joker = 0,
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All ranks in code order.
    pub const ALL: [Rank; 14] = [
        Rank::Joker,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The 13 ranks of a standard deck, Ace first.
    pub const PLAYING: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric code.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by numeric code.
    pub fn from_value(value: u8) -> Result<Self> {
        Rank::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(EngineError::UnknownRankValue(value))
    }

    /// Lowercase name, also used in asset keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Joker => "joker",
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    /// Look up a rank by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(match name {
            "joker" => Rank::Joker,
            "ace" => Rank::Ace,
            "two" => Rank::Two,
            "three" => Rank::Three,
            "four" => Rank::Four,
            "five" => Rank::Five,
            "six" => Rank::Six,
            "seven" => Rank::Seven,
            "eight" => Rank::Eight,
            "nine" => Rank::Nine,
            "ten" => Rank::Ten,
            "jack" => Rank::Jack,
            "queen" => Rank::Queen,
            "king" => Rank::King,
            _ => return Err(EngineError::UnknownRank(name.to_string())),
        })
    }

    /// The next rank up (`rank + 1`). `None` for King and Joker.
    #[must_use]
    pub fn succ(self) -> Option<Rank> {
        match self {
            Rank::Joker | Rank::King => None,
            _ => Rank::from_value(self.value() + 1).ok(),
        }
    }

    /// The next rank down (`rank - 1`). `None` for Ace and Joker.
    #[must_use]
    pub fn pred(self) -> Option<Rank> {
        match self {
            Rank::Joker | Rank::Ace => None,
            _ => Rank::from_value(self.value() - 1).ok(),
        }
    }
}

impl FromStr for Rank {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Rank::from_name(s)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&capitalize(self.name()))
    }
}

/// Card suit. `None` is only used by jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    None = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
    Hearts = 4,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Suit; 5] = [Suit::None, Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::Hearts];

    /// The four suits of a standard deck, in deal order.
    pub const PLAYING: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::Hearts];

    /// Numeric code.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a suit by numeric code.
    pub fn from_value(value: u8) -> Result<Self> {
        Suit::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(EngineError::UnknownSuitValue(value))
    }

    /// Lowercase name, also used in asset keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::None => "none",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
        }
    }

    /// Look up a suit by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(match name {
            "none" => Suit::None,
            "diamonds" => Suit::Diamonds,
            "clubs" => Suit::Clubs,
            "spades" => Suit::Spades,
            "hearts" => Suit::Hearts,
            _ => return Err(EngineError::UnknownSuit(name.to_string())),
        })
    }

    /// Color of the suit. `None` for `Suit::None`.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Suit::Diamonds | Suit::Hearts => Some(Color::Red),
            Suit::Clubs | Suit::Spades => Some(Color::Black),
            Suit::None => None,
        }
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Suit::from_name(s)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&capitalize(self.name()))
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Numeric code.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a color by numeric code.
    pub fn from_value(value: u8) -> Result<Self> {
        Color::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(EngineError::UnknownColorValue(value))
    }

    /// Lowercase name, also used in asset keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }

    /// Look up a color by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            _ => Err(EngineError::UnknownColor(name.to_string())),
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_name(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&capitalize(self.name()))
    }
}
