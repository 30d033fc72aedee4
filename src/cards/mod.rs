//! Card system: taxonomy, card values, and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Color`: Fixed enumerations with name and code lookups
//! - `Card`: Immutable card value with display name and asset key
//! - `Deck`: Shuffleable stack the game is dealt from

pub mod card;
pub mod deck;
pub mod taxonomy;

pub use card::{Card, CARD_BACK, CARD_INDEX_COUNT};
pub use deck::Deck;
pub use taxonomy::{Color, Rank, Suit};
