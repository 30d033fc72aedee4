//! Klondike integration tests.
//!
//! These tests drive the engine through its public surface the way a
//! presentation layer would: deal, draw, move, and re-read snapshots.

use patience::rules::{self, Board};
use patience::{
    Card, Color, Command, CommandOutcome, Deck, DrawOutcome, GameResult, Klondike, KlondikeBuilder,
    MoveOutcome, MoveRejection, MoveRequest, PileId, PileRole, Rank, Slots, Suit,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::standard(rank, suit)
}

fn empty_klondike_board(deck: Deck) -> Board {
    Board::new(Slots::configs(), deck, false).unwrap()
}

fn tableau(column: u8) -> PileId {
    Slots::tableau(column).unwrap()
}

fn foundation(suit: Suit) -> PileId {
    Slots::foundation(suit).unwrap()
}

// =============================================================================
// Deal
// =============================================================================

/// Each column gets `i` face-down cards and one face-up; 24 stay in the deck.
#[test]
fn test_initial_deal() {
    let game = KlondikeBuilder::new().seed(2024).build().unwrap();

    assert_eq!(game.deck_size(), 24);

    for (column, id) in Slots::tableaus().enumerate() {
        let pile = game.pile(id).unwrap();
        assert_eq!(pile.size(), column + 1);

        let top = pile.size() - 1;
        for i in 0..pile.size() {
            assert_eq!(pile.visible_at_index(i), i == top, "column {} index {}", column, i);
        }
    }

    for suit in Suit::PLAYING {
        assert!(game.pile(foundation(suit)).unwrap().is_empty());
    }
    assert!(game.check_conservation().is_ok());
}

/// The snapshot hides face-down cards and exposes placeholders for empty piles.
#[test]
fn test_initial_view() {
    let game = Klondike::with_seed(5).unwrap();
    let view = game.view();

    assert_eq!(view.piles.len(), 12);
    assert_eq!(view.deck_size, 24);
    assert!(!view.can_recycle);

    let last_column = &view.piles[6];
    assert_eq!(last_column.role, PileRole::Tableau(6));
    assert!(!last_column.flat);
    assert_eq!(last_column.cards.len(), 7);
    assert!(last_column.cards[..6].iter().all(|c| !c.face_up && c.card.is_none()));
    assert!(last_column.cards[6].face_up);
    assert_eq!(last_column.asset_ids()[0], "red_back");

    let waste = &view.piles[Slots::WASTE.index()];
    assert!(waste.flat);
    assert_eq!(waste.placeholder.as_deref(), Some("empty_waste"));

    let hearts = &view.piles[foundation(Suit::Hearts).index()];
    assert_eq!(hearts.asset_ids(), vec!["foundation_hearts".to_string()]);
}

// =============================================================================
// Draw / recycle
// =============================================================================

/// Drawing the whole deck and recycling restores the deck exactly.
#[test]
fn test_draw_recycle_round_trip() {
    let mut game = Klondike::with_seed(77).unwrap();
    let before = game.board().deck().clone();

    for _ in 0..24 {
        assert!(matches!(game.request_draw(), DrawOutcome::Drew(_)));
    }
    assert_eq!(game.deck_size(), 0);
    assert!(game.view().can_recycle);

    assert_eq!(game.request_draw(), DrawOutcome::Recycled { count: 24 });
    assert_eq!(game.board().deck(), &before);
    assert!(game.pile(Slots::WASTE).unwrap().is_empty());
    assert!(game.check_conservation().is_ok());
}

/// The waste only ever shows its top card as movable.
#[test]
fn test_waste_only_top_moves() {
    let mut game = Klondike::with_seed(11).unwrap();
    game.request_draw();
    game.request_draw();

    let outcome = game.request_move(Slots::WASTE, 0, tableau(0));
    assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::NotMovable));
}

// =============================================================================
// Moves
// =============================================================================

/// Tableau acceptance on a black seven.
#[test]
fn test_tableau_legality() {
    let mut board = empty_klondike_board(Deck::new());
    let col0 = tableau(0);
    let col1 = tableau(1);
    board.pile_mut(col0).unwrap().add_card(card(Rank::Seven, Suit::Clubs), true);

    let col1_pile = board.pile_mut(col1).unwrap();
    col1_pile.add_card(card(Rank::Six, Suit::Spades), true);
    let before = board.clone();
    assert_eq!(
        rules::execute_move(&mut board, MoveRequest::new(col1, 0, col0)),
        MoveOutcome::Rejected(MoveRejection::Refused)
    );
    assert_eq!(board, before);

    board.pile_mut(col1).unwrap().remove_card().unwrap();
    board.pile_mut(col1).unwrap().add_card(card(Rank::Five, Suit::Hearts), true);
    assert!(!rules::execute_move(&mut board, MoveRequest::new(col1, 0, col0)).is_moved());

    board.pile_mut(col1).unwrap().remove_card().unwrap();
    board.pile_mut(col1).unwrap().add_card(card(Rank::Six, Suit::Hearts), true);
    assert_eq!(
        rules::execute_move(&mut board, MoveRequest::new(col1, 0, col0)),
        MoveOutcome::Moved { count: 1 }
    );
    assert!(board.pile(col1).unwrap().is_empty());
}

/// Only a King-based run opens an empty column.
#[test]
fn test_empty_column_takes_kings_only() {
    let mut board = empty_klondike_board(Deck::new());
    let col0 = tableau(0);
    let col1 = tableau(1);
    board
        .pile_mut(col1)
        .unwrap()
        .add_cards([card(Rank::Queen, Suit::Hearts), card(Rank::Jack, Suit::Spades)], true);

    assert_eq!(
        rules::execute_move(&mut board, MoveRequest::new(col1, 0, col0)),
        MoveOutcome::Rejected(MoveRejection::Refused)
    );

    let col2 = tableau(2);
    board
        .pile_mut(col2)
        .unwrap()
        .add_cards([card(Rank::King, Suit::Spades), card(Rank::Queen, Suit::Diamonds)], true);
    assert_eq!(
        rules::execute_move(&mut board, MoveRequest::new(col2, 0, col0)),
        MoveOutcome::Moved { count: 2 }
    );
}

/// Foundation acceptance: Ace first, then ascending by one, single cards only.
#[test]
fn test_foundation_legality() {
    let mut board = empty_klondike_board(Deck::new());
    let diamonds = foundation(Suit::Diamonds);
    let col0 = tableau(0);

    board.pile_mut(col0).unwrap().add_card(card(Rank::Two, Suit::Diamonds), true);
    assert!(!rules::execute_move(&mut board, MoveRequest::new(col0, 0, diamonds)).is_moved());

    board.pile_mut(col0).unwrap().add_card(card(Rank::Ace, Suit::Hearts), true);
    assert!(!rules::execute_move(&mut board, MoveRequest::new(col0, 1, diamonds)).is_moved());

    let col1 = tableau(1);
    board.pile_mut(col1).unwrap().add_card(card(Rank::Ace, Suit::Diamonds), true);
    assert!(rules::execute_move(&mut board, MoveRequest::new(col1, 0, diamonds)).is_moved());

    // Lift the Ace of Hearts off so the Two is on top
    board.pile_mut(col0).unwrap().remove_card().unwrap();
    assert!(rules::execute_move(&mut board, MoveRequest::new(col0, 0, diamonds)).is_moved());
    assert_eq!(board.pile(diamonds).unwrap().size(), 2);
}

/// A multi-card run never goes to a foundation, even if its bottom fits.
#[test]
fn test_foundation_rejects_runs() {
    let mut board = empty_klondike_board(Deck::new());
    let diamonds = foundation(Suit::Diamonds);
    for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
        board.pile_mut(diamonds).unwrap().add_card(card(rank, Suit::Diamonds), true);
    }
    let col0 = tableau(0);
    board
        .pile_mut(col0)
        .unwrap()
        .add_cards([card(Rank::Six, Suit::Diamonds), card(Rank::Five, Suit::Spades)], true);

    assert_eq!(
        rules::execute_move(&mut board, MoveRequest::new(col0, 0, diamonds)),
        MoveOutcome::Rejected(MoveRejection::Refused)
    );
}

/// Moving a run off face-down cards reveals the new top.
#[test]
fn test_reveal_after_move() {
    let mut board = empty_klondike_board(Deck::new());
    let col0 = tableau(0);
    let col1 = tableau(1);
    {
        let pile = board.pile_mut(col0).unwrap();
        pile.add_card(card(Rank::Two, Suit::Clubs), false);
        pile.add_card(card(Rank::Three, Suit::Clubs), false);
        pile.add_card(card(Rank::Queen, Suit::Hearts), true);
    }
    board.pile_mut(col1).unwrap().add_card(card(Rank::King, Suit::Spades), true);

    assert!(rules::execute_move(&mut board, MoveRequest::new(col0, 2, col1)).is_moved());

    let pile = board.pile(col0).unwrap();
    assert!(!pile.visible_at_index(0));
    assert!(pile.visible_at_index(1));
    assert_eq!(pile.peek_top(), Some(&card(Rank::Three, Suit::Clubs)));
}

/// Jokers never leave their pile.
#[test]
fn test_jokers_are_out_of_play() {
    let mut board = Board::new(Slots::configs(), Deck::new(), true).unwrap();
    let col0 = tableau(0);
    board.pile_mut(col0).unwrap().add_card(Card::joker(Color::Black), true);

    for destination in (0..12).map(PileId::new) {
        assert!(!rules::execute_move(&mut board, MoveRequest::new(col0, 0, destination)).is_moved());
    }
    assert!(rules::legal_moves(&board).is_empty());
}

// =============================================================================
// Serial command processing
// =============================================================================

/// Commands are processed in arrival order and each gets an outcome.
#[test]
fn test_apply_all_in_order() {
    let mut game = Klondike::with_seed(9).unwrap();
    let first = game.board().deck().cards()[23];
    let second = game.board().deck().cards()[22];

    let outcomes = game.apply_all([
        Command::Draw,
        Command::Move(MoveRequest::new(Slots::WASTE, 0, Slots::WASTE)),
        Command::Draw,
    ]);

    assert_eq!(
        outcomes,
        vec![
            CommandOutcome::Draw(DrawOutcome::Drew(first)),
            CommandOutcome::Move(MoveOutcome::Rejected(MoveRejection::SamePile)),
            CommandOutcome::Draw(DrawOutcome::Drew(second)),
        ]
    );
}

/// Every reported legal move is accepted when applied to a copy of the game.
#[test]
fn test_legal_moves_are_accepted() {
    let mut game = Klondike::with_seed(31).unwrap();

    for _ in 0..30 {
        for request in game.legal_moves() {
            let mut copy = game.clone();
            assert!(copy.apply(Command::Move(request)).changed_board(), "{:?}", request);
            assert!(copy.check_conservation().is_ok());
        }
        game.request_draw();
    }
}

// =============================================================================
// Win detection
// =============================================================================

/// Completing the last foundation wins the game.
#[test]
fn test_win_detection() {
    let mut board = empty_klondike_board(Deck::new());
    for suit in Suit::PLAYING {
        let id = foundation(suit);
        for rank in &Rank::PLAYING[..12] {
            board.pile_mut(id).unwrap().add_card(card(*rank, suit), true);
        }
    }
    for (column, suit) in Suit::PLAYING.into_iter().enumerate() {
        board
            .pile_mut(tableau(column as u8))
            .unwrap()
            .add_card(card(Rank::King, suit), true);
    }
    assert!(board.check_conservation().is_ok());
    assert_eq!(rules::result(&board), GameResult::InProgress);

    for (column, suit) in Suit::PLAYING.into_iter().enumerate() {
        let request = MoveRequest::new(tableau(column as u8), 0, foundation(suit));
        assert!(rules::execute_move(&mut board, request).is_moved());
    }

    assert_eq!(rules::result(&board), GameResult::Won);
}
