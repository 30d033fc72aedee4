//! Klondike patience.
//!
//! - Seven tableau columns dealt 1..=7 cards, only the top face-up
//! - Draw one card at a time onto the waste; recycle when the deck runs out
//! - Build the four foundations Ace to King by suit
//! - Build tableau columns down in alternating colors; only Kings open an empty column

mod game;

pub use game::{Klondike, KlondikeBuilder, Slots, TABLEAU_CARDS, TABLEAU_COLUMNS};
