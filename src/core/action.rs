//! Requests from the presentation layer and their outcomes.
//!
//! The presentation layer turns gestures into `Command`s; the engine
//! answers each with an outcome and never looks at presentation objects.
//! For example:
//! - Dragging a run onto a column = `Command::Move(MoveRequest { .. })`
//! - Clicking the deck = `Command::Draw`

use serde::{Deserialize, Serialize};

use super::config::PileId;
use crate::cards::Card;

/// Request to move the run starting at `index` of `source` onto `destination`.
///
/// ```
/// use patience::core::{MoveRequest, PileId};
///
/// // Move everything from the third card up of column 1 onto column 4
/// let request = MoveRequest::new(PileId::new(1), 2, PileId::new(4));
/// assert_eq!(request.index, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Pile the run is taken from.
    pub source: PileId,

    /// Zero-based index (from the bottom) of the deepest card of the run.
    pub index: usize,

    /// Pile the run is dropped on.
    pub destination: PileId,
}

impl MoveRequest {
    /// Create a new move request.
    #[must_use]
    pub const fn new(source: PileId, index: usize, destination: PileId) -> Self {
        Self {
            source,
            index,
            destination,
        }
    }
}

/// A single inbound command, processed strictly in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move a run between piles.
    Move(MoveRequest),
    /// Draw from the deck, or recycle the waste when the deck is empty.
    Draw,
}

impl From<MoveRequest> for Command {
    fn from(request: MoveRequest) -> Self {
        Command::Move(request)
    }
}

/// Why a move left the board untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Source and destination are the same pile.
    SamePile,
    /// Either pile id is not on the board.
    UnknownPile,
    /// The run cannot leave its source (face-down, out of range, or
    /// below the top of a flat pile).
    NotMovable,
    /// The destination's acceptance rule refused the run.
    Refused,
}

/// Result of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The run moved; `count` cards changed piles.
    Moved { count: usize },
    /// Nothing changed.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Did the board change?
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// One card was dealt face-up onto the waste.
    Drew(Card),
    /// The deck was empty; `count` waste cards went back into it.
    Recycled { count: usize },
    /// Deck and waste were both empty.
    NoOp,
}

/// Result of any command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandOutcome {
    Move(MoveOutcome),
    Draw(DrawOutcome),
}

impl CommandOutcome {
    /// Did the board change?
    #[must_use]
    pub fn changed_board(self) -> bool {
        match self {
            CommandOutcome::Move(outcome) => outcome.is_moved(),
            CommandOutcome::Draw(outcome) => outcome != DrawOutcome::NoOp,
        }
    }
}
