//! Move engine and the draw/recycle action.
//!
//! These are the only mutations after the deal. Each either completes
//! fully or leaves the board untouched.

use log::debug;

use super::board::Board;
use crate::core::action::{DrawOutcome, MoveOutcome, MoveRejection, MoveRequest};
use crate::core::config::PileRole;

/// Result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Cards remain outside the foundations.
    InProgress,
    /// Every foundation runs Ace to King.
    Won,
}

/// Check whether `request` would be accepted, without changing anything.
pub fn validate_move(board: &Board, request: MoveRequest) -> Result<usize, MoveRejection> {
    if request.source == request.destination {
        return Err(MoveRejection::SamePile);
    }

    let (Some(source), Some(destination)) = (board.pile(request.source), board.pile(request.destination))
    else {
        return Err(MoveRejection::UnknownPile);
    };

    if !source.can_remove_from(request.index) {
        return Err(MoveRejection::NotMovable);
    }

    let run = source.peek_cards(request.index);
    if !destination.should_accept_cards(run) {
        return Err(MoveRejection::Refused);
    }

    Ok(run.len())
}

/// Move the run described by `request`, if the destination accepts it.
///
/// On success the run keeps its order and lands face-up; the source
/// reveals its new top through the pile's reveal cascade.
pub fn execute_move(board: &mut Board, request: MoveRequest) -> MoveOutcome {
    let count = match validate_move(board, request) {
        Ok(count) => count,
        Err(reason) => {
            debug!(
                "rejected move {} @{} -> {}: {:?}",
                request.source, request.index, request.destination, reason
            );
            return MoveOutcome::Rejected(reason);
        }
    };

    let run = match board.pile_mut(request.source) {
        Some(source) => source.remove_cards(count),
        None => return MoveOutcome::Rejected(MoveRejection::UnknownPile),
    };
    match board.pile_mut(request.destination) {
        Some(destination) => destination.add_cards(run, true),
        None => return MoveOutcome::Rejected(MoveRejection::UnknownPile),
    }

    debug!(
        "moved {} card(s) {} @{} -> {}",
        count, request.source, request.index, request.destination
    );
    MoveOutcome::Moved { count }
}

/// Draw one card onto the waste, or recycle the waste into an empty deck.
///
/// Recycling reverses the waste so the first card wasted is dealt first
/// again. With both deck and waste empty this is a no-op.
pub fn draw(board: &mut Board) -> DrawOutcome {
    let Some(waste_id) = board.find_role(PileRole::Waste) else {
        return DrawOutcome::NoOp;
    };
    let Some((deck, waste)) = board.deck_and_pile_mut(waste_id) else {
        return DrawOutcome::NoOp;
    };

    if let Ok(card) = deck.deal_one() {
        waste.add_card(card, true);
        debug!("drew {} onto the waste", card);
        return DrawOutcome::Drew(card);
    }

    if waste.is_empty() {
        debug!("draw with empty deck and waste");
        return DrawOutcome::NoOp;
    }

    let cards = waste.remove_cards(waste.size());
    let count = cards.len();
    deck.add_cards(cards.into_iter().rev());
    debug!("recycled {} waste card(s) into the deck", count);
    DrawOutcome::Recycled { count }
}

/// Every move the engine would currently accept.
///
/// Sources are scanned in slot order; within a source, runs go from the
/// deepest movable card up to the top; destinations in slot order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<MoveRequest> {
    let mut moves = Vec::new();

    for source in board.piles() {
        for index in (0..source.size()).filter(|&i| source.can_remove_from(i)) {
            let run = source.peek_cards(index);
            for destination in board.piles() {
                if destination.id() != source.id() && destination.should_accept_cards(run) {
                    moves.push(MoveRequest::new(source.id(), index, destination.id()));
                }
            }
        }
    }

    moves
}

/// Won iff there are four foundations and each holds a full suit.
///
/// Foundations only accept an ascending same-suit sequence from the Ace,
/// so thirteen cards means Ace to King.
#[must_use]
pub fn result(board: &Board) -> GameResult {
    let foundations: Vec<_> = board
        .piles_where(|role| matches!(role, PileRole::Foundation(_)))
        .collect();

    if foundations.len() == 4 && foundations.iter().all(|p| p.size() == 13) {
        GameResult::Won
    } else {
        GameResult::InProgress
    }
}
