//! Read-only snapshots for the presentation layer.
//!
//! Face-down cards are reported without their identity; the presentation
//! layer only learns that a card is there and shows the back.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CARD_BACK};
use crate::core::config::{PileId, PileRole};

/// One card slot in a pile snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// The card, or `None` when face-down.
    pub card: Option<Card>,
    pub face_up: bool,
}

impl CardView {
    #[must_use]
    pub fn new(card: Card, face_up: bool) -> Self {
        Self {
            card: face_up.then_some(card),
            face_up,
        }
    }

    /// Asset key to render: the card face, or the card back.
    #[must_use]
    pub fn asset_id(&self) -> String {
        match self.card {
            Some(card) => card.asset_id(),
            None => CARD_BACK.to_string(),
        }
    }
}

/// Snapshot of one pile, bottom card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub id: PileId,
    pub role: PileRole,
    /// Render only the top card.
    pub flat: bool,
    /// Empty-pile asset key; `Some` only when the pile is empty.
    pub placeholder: Option<String>,
    pub cards: Vec<CardView>,
}

impl PileView {
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Asset keys bottom to top, or the placeholder alone for an empty pile.
    #[must_use]
    pub fn asset_ids(&self) -> Vec<String> {
        match &self.placeholder {
            Some(placeholder) if self.cards.is_empty() => vec![placeholder.clone()],
            _ => self.cards.iter().map(CardView::asset_id).collect(),
        }
    }
}

/// Snapshot of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Piles in slot order.
    pub piles: Vec<PileView>,
    /// Cards left in the deck.
    pub deck_size: usize,
    /// Deck is empty and the waste has cards, so the draw control recycles.
    pub can_recycle: bool,
}
