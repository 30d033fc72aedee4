//! Piles: ordered card stacks with a revealed suffix.
//!
//! Visibility is a single counter, `num_revealed`, counted from the top.
//! A card at index `i` (from the bottom) is face-up iff
//! `len - i - 1 < num_revealed`, so face-down cards always form one
//! unbroken block at the bottom and revealing happens top-down.
//!
//! Removing cards cascades the reveal: once the revealed run shrinks to
//! one card, the new top is considered revealed without an explicit flip.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::rules::MoveRule;
use super::view::{CardView, PileView};
use crate::cards::Card;
use crate::core::config::{PileId, PileRole};
use crate::core::error::{EngineError, Result};

/// A run of cards moved together, bottom card first.
///
/// Inline capacity covers a full King-to-Ace tableau run.
pub type Run = SmallVec<[Card; 13]>;

/// Construction-time description of a pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    /// Slot identifier.
    pub id: PileId,

    /// Role on the board.
    pub role: PileRole,

    /// Only the top card is rendered (waste, foundations).
    pub flat: bool,

    /// Acceptance predicate for dropped runs.
    pub rule: MoveRule,

    /// Asset key shown when the pile is empty.
    pub placeholder: String,
}

impl PileConfig {
    /// Create a config with the defaults for `role`.
    ///
    /// Tableau columns fan out and follow the descending rule, the waste
    /// is flat and refuses drops, foundations are flat and build up by suit.
    pub fn new(id: PileId, role: PileRole) -> Self {
        let rule = match role {
            PileRole::Tableau(_) => MoveRule::TableauDescendAlternating,
            PileRole::Waste => MoveRule::RejectAll,
            PileRole::Foundation(suit) => MoveRule::FoundationAscend(suit),
        };
        Self {
            id,
            role,
            flat: role.is_flat(),
            rule,
            placeholder: role.placeholder(),
        }
    }

    /// Override the acceptance rule.
    #[must_use]
    pub fn with_rule(mut self, rule: MoveRule) -> Self {
        self.rule = rule;
        self
    }

    /// Override the empty-pile asset key.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Ordered stack of cards, bottom first, with a revealed suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pile {
    config: PileConfig,
    cards: Vec<Card>,
    num_revealed: usize,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(config: PileConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
            num_revealed: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.config.id
    }

    #[must_use]
    pub fn role(&self) -> PileRole {
        self.config.role
    }

    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.config.flat
    }

    #[must_use]
    pub fn rule(&self) -> MoveRule {
        self.config.rule
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Current card count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of face-up cards counted from the top.
    #[must_use]
    pub fn num_revealed(&self) -> usize {
        self.num_revealed
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    // === Mutation ===

    /// Put one card on top.
    pub fn add_card(&mut self, card: Card, revealed: bool) {
        self.cards.push(card);
        if revealed {
            self.num_revealed += 1;
        }
    }

    /// Put a sequence of cards on top; the last one becomes the new top.
    pub fn add_cards<I>(&mut self, cards: I, revealed: bool)
    where
        I: IntoIterator<Item = Card>,
    {
        let before = self.cards.len();
        self.cards.extend(cards);
        if revealed {
            self.num_revealed += self.cards.len() - before;
        }
    }

    /// Pop the top card.
    ///
    /// The revealed count only shrinks while more than one card is
    /// revealed, so removing the last revealed card reveals the new top.
    pub fn remove_card(&mut self) -> Result<Card> {
        let card = self.cards.pop().ok_or(EngineError::EmptyPile(self.config.id))?;
        if self.num_revealed > 1 {
            self.num_revealed -= 1;
        }
        self.num_revealed = self.num_revealed.min(self.cards.len());
        Ok(card)
    }

    /// Pop the top `count` cards, returned bottom first.
    ///
    /// Taking everything resets the revealed count to zero. Otherwise the
    /// revealed count drops by `count` but never below one, so the new top
    /// is face-up.
    pub fn remove_cards(&mut self, count: usize) -> Run {
        if count == 0 {
            return Run::new();
        }
        if count >= self.cards.len() {
            self.num_revealed = 0;
            return self.cards.drain(..).collect();
        }

        let start = self.cards.len() - count;
        let run: Run = self.cards.drain(start..).collect();
        self.num_revealed = self.num_revealed.saturating_sub(count).max(1);
        run
    }

    // === Queries ===

    /// The top card, if any.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card at `index` from the bottom, if in range.
    #[must_use]
    pub fn peek_card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Cards from `from` to the top. Empty if `from` is out of range.
    #[must_use]
    pub fn peek_cards(&self, from: usize) -> &[Card] {
        self.cards.get(from..).unwrap_or(&[])
    }

    /// Is the card at `index` face-up?
    #[must_use]
    pub fn visible_at_index(&self, index: usize) -> bool {
        index < self.cards.len() && self.cards.len() - index - 1 < self.num_revealed
    }

    /// Can the run starting at `index` leave this pile?
    ///
    /// The deepest card of the run must be face-up, and flat piles only
    /// give up their top card.
    #[must_use]
    pub fn can_remove_from(&self, index: usize) -> bool {
        if !self.visible_at_index(index) {
            return false;
        }
        !self.config.flat || index + 1 == self.cards.len()
    }

    /// Would this pile accept `run` dropped on it right now?
    #[must_use]
    pub fn should_accept_cards(&self, run: &[Card]) -> bool {
        self.config.rule.accepts(run, self.peek_top())
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> PileView {
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, &card)| CardView::new(card, self.visible_at_index(i)))
            .collect();

        PileView {
            id: self.config.id,
            role: self.config.role,
            flat: self.config.flat,
            placeholder: self.cards.is_empty().then(|| self.config.placeholder.clone()),
            cards,
        }
    }
}

impl<'de> Deserialize<'de> for Pile {
    /// Refuses a revealed count larger than the pile.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            config: PileConfig,
            cards: Vec<Card>,
            num_revealed: usize,
        }

        let Fields {
            config,
            cards,
            num_revealed,
        } = Fields::deserialize(deserializer)?;

        if num_revealed > cards.len() {
            return Err(serde::de::Error::custom(EngineError::InvalidRevealCount {
                revealed: num_revealed,
                size: cards.len(),
            }));
        }

        Ok(Self {
            config,
            cards,
            num_revealed,
        })
    }
}
