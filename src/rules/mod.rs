//! Board state and the rules that mutate it.
//!
//! - `Board`: Piles plus deck, with the conservation check and snapshots
//! - `execute_move`: Validated transfer of a face-up run between piles
//! - `draw`: Deck-to-waste draw and waste-to-deck recycle
//! - `legal_moves`, `result`: Pure queries for hints and win detection

pub mod board;
pub mod engine;

pub use board::Board;
pub use engine::{draw, execute_move, legal_moves, result, validate_move, GameResult};
