//! The draw deck.
//!
//! A `Deck` is a stack of cards: the last element is the top. It is built
//! once per game, shuffled, drained by the deal and by draws, and refilled
//! only when the waste is recycled into it.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::taxonomy::{Color, Rank, Suit};
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// Ordered stack of cards, top last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the 52 standard cards, optionally followed by a red and a
    /// black joker. Cards are grouped by suit in deal order, Ace to King.
    #[must_use]
    pub fn standard(jokers: bool) -> Self {
        let mut cards = Vec::with_capacity(54);
        for suit in Suit::PLAYING {
            for rank in Rank::PLAYING {
                cards.push(Card::standard(rank, suit));
            }
        }
        if jokers {
            for color in Color::ALL {
                cards.push(Card::joker(color));
            }
        }
        Self { cards }
    }

    /// Shuffle in place with Fisher–Yates.
    ///
    /// Walks from the last position down to 1, swapping each position with
    /// a uniformly chosen index in `[0, position]`.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for position in (1..self.cards.len()).rev() {
            let swap = rng.gen_range_usize(0..=position);
            self.cards.swap(position, swap);
        }
    }

    /// Remove and return the top card.
    pub fn deal_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Push cards onto the top. The first card ends up deepest.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
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

    /// The top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
