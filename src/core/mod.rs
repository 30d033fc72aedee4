//! Core engine types: pile ids, configuration, requests, RNG, errors.
//!
//! These are the building blocks shared by the card, pile, and rules
//! modules, and the vocabulary of the presentation boundary.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Command, CommandOutcome, DrawOutcome, MoveOutcome, MoveRejection, MoveRequest};
pub use config::{GameConfig, PileId, PileRole};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
