//! Engine error type.
//!
//! Only caller bugs end up here: drawing from an empty deck, popping an
//! empty pile, building a board from misordered slots, loading a pile
//! whose state is inconsistent. Illegal
//! moves are ordinary outcomes and are reported through
//! `MoveOutcome::Rejected` instead.

use thiserror::Error;

use super::config::PileId;

/// Errors raised by the engine on incorrect calling discipline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("cannot remove a card from empty {0}")]
    EmptyPile(PileId),
    #[error("unknown rank name {0:?}")]
    UnknownRank(String),
    #[error("unknown suit name {0:?}")]
    UnknownSuit(String),
    #[error("unknown color name {0:?}")]
    UnknownColor(String),
    #[error("unknown rank value {0}")]
    UnknownRankValue(u8),
    #[error("unknown suit value {0}")]
    UnknownSuitValue(u8),
    #[error("unknown color value {0}")]
    UnknownColorValue(u8),
    #[error("unknown card index {0}")]
    UnknownCardIndex(u8),
    #[error("{id} configured in slot {slot}")]
    PileSlotMismatch { id: PileId, slot: usize },
    #[error("{revealed} revealed cards in a pile of {size}")]
    InvalidRevealCount { revealed: usize, size: usize },
    #[error("card conservation violated: {missing} missing, {duplicated} duplicated")]
    Conservation { missing: usize, duplicated: usize },
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
