//! Acceptance rules for dropped runs.
//!
//! Every pile carries one `MoveRule`. A rule is a pure predicate over the
//! proposed run (bottom card first) and the pile's current top card.
//! Empty runs and jokers are never accepted by the suit-aware rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Closed set of acceptance predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRule {
    /// Accept any non-empty run.
    AcceptAll,
    /// Never accept a dropped run (waste pile).
    RejectAll,
    /// Descending rank, alternating color; only a King opens an empty pile.
    TableauDescendAlternating,
    /// Single card of the given suit, Ace first, ascending by one.
    FoundationAscend(Suit),
}

impl MoveRule {
    /// Would a pile with top card `top` accept `run`?
    #[must_use]
    pub fn accepts(self, run: &[Card], top: Option<&Card>) -> bool {
        let Some(bottom) = run.first() else {
            return false;
        };

        match self {
            MoveRule::AcceptAll => true,
            MoveRule::RejectAll => false,
            MoveRule::TableauDescendAlternating => {
                if bottom.is_joker() {
                    return false;
                }
                match top {
                    None => bottom.rank() == Rank::King,
                    Some(top) => {
                        !top.is_joker()
                            && top.rank().pred() == Some(bottom.rank())
                            && bottom.color() == top.color().opposite()
                    }
                }
            }
            MoveRule::FoundationAscend(suit) => {
                if run.len() != 1 || bottom.suit() != suit || bottom.is_joker() {
                    return false;
                }
                match top {
                    None => bottom.rank() == Rank::Ace,
                    Some(top) => top.rank().succ() == Some(bottom.rank()),
                }
            }
        }
    }
}
