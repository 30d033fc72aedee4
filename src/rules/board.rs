//! The board: every pile plus the deck.
//!
//! Cards are owned exclusively: each card of the full deck is either in
//! the deck or in exactly one pile. `check_conservation` verifies that.

use rustc_hash::FxHashMap;

use crate::cards::Deck;
use crate::core::config::{PileId, PileRole};
use crate::core::error::{EngineError, Result};
use crate::piles::{BoardView, Pile, PileConfig};

/// Fixed, ordered collection of piles and the remaining deck.
///
/// Pile ids index directly into the pile list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    piles: Vec<Pile>,
    deck: Deck,
    jokers: bool,
}

impl Board {
    /// Create a board with empty piles and the given deck.
    ///
    /// Pile ids are used as indices, so each config's id must match its
    /// position in `configs`.
    pub fn new(configs: Vec<PileConfig>, deck: Deck, jokers: bool) -> Result<Self> {
        let piles = configs
            .into_iter()
            .enumerate()
            .map(|(slot, config)| {
                if config.id.index() == slot {
                    Ok(Pile::new(config))
                } else {
                    Err(EngineError::PileSlotMismatch { id: config.id, slot })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { piles, deck, jokers })
    }

    // === Piles ===

    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        self.piles.get_mut(id.index())
    }

    /// All piles in slot order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Number of piles on the board.
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// First pile with the given role.
    #[must_use]
    pub fn find_role(&self, role: PileRole) -> Option<PileId> {
        self.piles.iter().find(|p| p.role() == role).map(Pile::id)
    }

    /// Piles whose role satisfies `pred`, in slot order.
    pub fn piles_where<'a, F>(&'a self, pred: F) -> impl Iterator<Item = &'a Pile> + 'a
    where
        F: Fn(PileRole) -> bool + 'a,
    {
        self.piles.iter().filter(move |p| pred(p.role()))
    }

    // === Deck ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Deck and the pile with `id`, borrowed together.
    pub fn deck_and_pile_mut(&mut self, id: PileId) -> Option<(&mut Deck, &mut Pile)> {
        let pile = self.piles.get_mut(id.index())?;
        Some((&mut self.deck, pile))
    }

    /// Is the joker variant in play?
    #[must_use]
    pub fn has_jokers(&self) -> bool {
        self.jokers
    }

    /// Total cards on the board, deck included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.size() + self.piles.iter().map(Pile::size).sum::<usize>()
    }

    // === Invariants ===

    /// Verify that deck plus piles hold exactly the full deck, once each.
    pub fn check_conservation(&self) -> Result<()> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        let held = self.deck.iter().chain(self.piles.iter().flat_map(|p| p.cards()));
        for card in held {
            *counts.entry(card.index()).or_insert(0) += 1;
        }

        let expected = Deck::standard(self.jokers);
        let mut missing = 0;
        let mut duplicated = 0;
        for card in &expected {
            match counts.remove(&card.index()) {
                None => missing += 1,
                Some(n) => duplicated += n - 1,
            }
        }
        // Anything left over is not part of the configured deck.
        duplicated += counts.values().sum::<usize>();

        if missing == 0 && duplicated == 0 {
            Ok(())
        } else {
            Err(EngineError::Conservation { missing, duplicated })
        }
    }

    // === Snapshots ===

    /// Snapshot of every pile and the deck count.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let waste_has_cards = self
            .find_role(PileRole::Waste)
            .and_then(|id| self.pile(id))
            .is_some_and(|p| !p.is_empty());

        BoardView {
            piles: self.piles.iter().map(Pile::view).collect(),
            deck_size: self.deck.size(),
            can_recycle: self.deck.is_empty() && waste_has_cards,
        }
    }
}
