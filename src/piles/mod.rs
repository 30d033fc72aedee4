//! Pile system: card stacks with revealed suffixes and acceptance rules.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered stack with a face-up suffix counter
//! - `PileConfig`: Slot id, role, display flag, rule, placeholder
//! - `MoveRule`: Closed set of acceptance predicates
//! - `PileView`, `CardView`, `BoardView`: Snapshots for rendering

pub mod pile;
pub mod rules;
pub mod view;

pub use pile::{Pile, PileConfig, Run};
pub use rules::MoveRule;
pub use view::{BoardView, CardView, PileView};
