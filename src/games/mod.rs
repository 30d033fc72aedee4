//! Game implementations built on the engine.
//!
//! - `klondike`: Classic draw-one Klondike

pub mod klondike;

pub use klondike::{Klondike, KlondikeBuilder, Slots};
