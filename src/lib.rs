//! # patience
//!
//! Rules engine and pile state model for Klondike patience.
//!
//! The engine receives abstract requests (move a run, draw a card) and
//! produces abstract pile snapshots. Rendering, input handling, and assets
//! belong to a presentation layer built on top.
//!
//! ## Design Principles
//!
//! 1. **Counter-Based Visibility**: Each pile tracks how many cards are
//!    face-up from the top, so face-down cards are always one block at
//!    the bottom and flips happen by arithmetic.
//!
//! 2. **Closed Rule Set**: Acceptance rules are a small enum, not closures.
//!
//! 3. **Rejections Are Outcomes**: Illegal moves return
//!    `MoveOutcome::Rejected` and leave the board untouched. Only caller
//!    bugs produce `EngineError`.
//!
//! ## Modules
//!
//! - `core`: Pile ids, configuration, requests and outcomes, RNG, errors
//! - `cards`: Rank/suit/color taxonomy, cards, deck
//! - `piles`: Piles, acceptance rules, snapshots
//! - `rules`: Board, move engine, draw/recycle, hints, win detection
//! - `games`: Klondike layout and session
//!
//! ## Example
//!
//! ```
//! use patience::{Command, KlondikeBuilder, Slots};
//!
//! let mut game = KlondikeBuilder::new().seed(42).build().unwrap();
//! assert_eq!(game.deck_size(), 24);
//!
//! game.apply(Command::Draw);
//! assert_eq!(game.pile(Slots::WASTE).unwrap().size(), 1);
//!
//! for request in game.legal_moves() {
//!     println!("{:?}", request);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod piles;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PileId, PileRole, GameConfig,
    GameRng, GameRngState,
    Command, CommandOutcome, MoveRequest, MoveOutcome, MoveRejection, DrawOutcome,
    EngineError, Result,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::piles::{BoardView, CardView, MoveRule, Pile, PileConfig, PileView, Run};

pub use crate::rules::{Board, GameResult};

pub use crate::games::{Klondike, KlondikeBuilder, Slots};
