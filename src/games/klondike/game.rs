//! Klondike session: layout, deal, and the inbound request surface.

use log::{info, trace};

use crate::cards::{Deck, Suit};
use crate::core::{
    Command, CommandOutcome, DrawOutcome, GameConfig, GameRng, GameRngState, MoveOutcome, MoveRequest,
    PileId, PileRole, Result,
};
use crate::piles::{BoardView, Pile, PileConfig};
use crate::rules::{self, Board, GameResult};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: u8 = 7;

/// Cards dealt into the tableau (1 + 2 + ... + 7).
pub const TABLEAU_CARDS: usize = 28;

/// Pile ids for the fixed Klondike layout.
///
/// Ids 0..=6 are the tableau columns, 7 the waste, 8..=11 the
/// foundations in suit order Diamonds, Clubs, Spades, Hearts.
#[derive(Clone, Copy, Debug)]
pub struct Slots;

impl Slots {
    pub const WASTE: PileId = PileId::new(TABLEAU_COLUMNS);

    /// Tableau column `column` (0-based). `None` past the last column.
    #[must_use]
    pub fn tableau(column: u8) -> Option<PileId> {
        (column < TABLEAU_COLUMNS).then(|| PileId::new(column))
    }

    /// Foundation for `suit`. `None` for `Suit::None`.
    #[must_use]
    pub fn foundation(suit: Suit) -> Option<PileId> {
        let position = Suit::PLAYING.iter().position(|&s| s == suit)?;
        Some(PileId::new(TABLEAU_COLUMNS + 1 + position as u8))
    }

    /// Every tableau id in column order.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COLUMNS).map(PileId::new)
    }

    /// Pile configs for the whole layout, in slot order.
    #[must_use]
    pub fn configs() -> Vec<PileConfig> {
        let mut configs: Vec<PileConfig> = (0..TABLEAU_COLUMNS)
            .map(|column| PileConfig::new(PileId::new(column), PileRole::Tableau(column)))
            .collect();

        configs.push(PileConfig::new(Self::WASTE, PileRole::Waste));

        for (position, suit) in Suit::PLAYING.into_iter().enumerate() {
            let id = PileId::new(TABLEAU_COLUMNS + 1 + position as u8);
            configs.push(PileConfig::new(id, PileRole::Foundation(suit)));
        }

        configs
    }
}

/// A single game of Klondike.
///
/// Owns the board exclusively. Every mutating call takes `&mut self`, so
/// requests are processed one at a time and never observed half-done.
#[derive(Clone, Debug)]
pub struct Klondike {
    config: GameConfig,
    board: Board,
    seed: u64,
    rng_state: GameRngState,
}

/// Builder for creating a Klondike game.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: GameConfig,
}

impl KlondikeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed so the deal can be replayed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Include the two jokers in the deck. They never leave their pile.
    pub fn jokers(mut self, jokers: bool) -> Self {
        self.config = self.config.with_jokers(jokers);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle and deal.
    pub fn build(self) -> Result<Klondike> {
        Klondike::new(self.config)
    }
}

impl Klondike {
    /// Shuffle a fresh deck and deal the tableau.
    ///
    /// Column `i` gets `i` face-down cards and one face-up card on top.
    /// The remaining cards stay in the deck.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        let rng_state = rng.state();

        let mut deck = Deck::standard(config.jokers);
        deck.shuffle(&mut rng);

        let mut board = Board::new(Slots::configs(), deck, config.jokers)?;
        for id in Slots::tableaus() {
            let face_down = id.index();
            if let Some((deck, pile)) = board.deck_and_pile_mut(id) {
                for _ in 0..face_down {
                    pile.add_card(deck.deal_one()?, false);
                }
                let top = deck.deal_one()?;
                trace!("dealt {} face-up onto {}", top, id);
                pile.add_card(top, true);
            }
        }

        info!(
            "dealt klondike game with seed {} ({} cards left in deck)",
            seed,
            board.deck().size()
        );

        Ok(Self {
            config,
            board,
            seed,
            rng_state,
        })
    }

    /// Start a game with default options and a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(GameConfig::new().with_seed(seed))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// RNG state before the shuffle, for replaying the deal.
    #[must_use]
    pub fn rng_state(&self) -> &GameRngState {
        &self.rng_state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Inbound requests ===

    /// Move the run starting at `index` of `source` onto `destination`.
    pub fn request_move(&mut self, source: PileId, index: usize, destination: PileId) -> MoveOutcome {
        rules::execute_move(&mut self.board, MoveRequest::new(source, index, destination))
    }

    /// Draw a card onto the waste, or recycle the waste if the deck is empty.
    pub fn request_draw(&mut self) -> DrawOutcome {
        rules::draw(&mut self.board)
    }

    /// Process one command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Move(request) => CommandOutcome::Move(rules::execute_move(&mut self.board, request)),
            Command::Draw => CommandOutcome::Draw(rules::draw(&mut self.board)),
        }
    }

    /// Process commands strictly in order.
    pub fn apply_all<I>(&mut self, commands: I) -> Vec<CommandOutcome>
    where
        I: IntoIterator<Item = Command>,
    {
        commands.into_iter().map(|command| self.apply(command)).collect()
    }

    // === Queries ===

    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.board.pile(id)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.board.deck().size()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    /// Every move that would currently be accepted.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        rules::legal_moves(&self.board)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        rules::result(&self.board)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.result() == GameResult::Won
    }

    /// Verify every card is held exactly once.
    pub fn check_conservation(&self) -> Result<()> {
        self.board.check_conservation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_layout() {
        let configs = Slots::configs();
        assert_eq!(configs.len(), 12);

        for (i, config) in configs.iter().enumerate() {
            assert_eq!(config.id.index(), i);
        }
        assert_eq!(configs[7].role, PileRole::Waste);
        assert_eq!(Slots::foundation(Suit::Diamonds), Some(PileId::new(8)));
        assert_eq!(Slots::foundation(Suit::Hearts), Some(PileId::new(11)));
        assert_eq!(Slots::foundation(Suit::None), None);
        assert_eq!(configs[11].role, PileRole::Foundation(Suit::Hearts));
        assert_eq!(Slots::tableau(6), Some(PileId::new(6)));
    }

    #[test]
    fn test_tableau_out_of_range() {
        assert_eq!(Slots::tableau(7), None);
        assert_eq!(Slots::tableau(u8::MAX), None);
        assert_eq!(Slots::tableaus().last(), Slots::tableau(TABLEAU_COLUMNS - 1));
    }

    #[test]
    fn test_deal() {
        let game = Klondike::with_seed(42).unwrap();

        assert_eq!(game.seed(), 42);
        assert_eq!(game.deck_size(), 52 - TABLEAU_CARDS);
        for (column, id) in Slots::tableaus().enumerate() {
            let pile = game.pile(id).unwrap();
            assert_eq!(pile.size(), column + 1);
            assert_eq!(pile.num_revealed(), 1);
        }
        assert!(game.pile(Slots::WASTE).unwrap().is_empty());
        assert!(game.check_conservation().is_ok());
        assert!(!game.is_won());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Klondike::with_seed(7).unwrap();
        let b = KlondikeBuilder::new().seed(7).build().unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn test_joker_deal() {
        let game = KlondikeBuilder::new().seed(1).jokers(true).build().unwrap();

        assert_eq!(game.deck_size(), 54 - TABLEAU_CARDS);
        assert!(game.board().has_jokers());
        assert!(game.check_conservation().is_ok());
    }

    #[test]
    fn test_unseeded_game_records_seed() {
        let game = KlondikeBuilder::new().build().unwrap();
        let replay = Klondike::with_seed(game.seed()).unwrap();

        assert_eq!(game.board(), replay.board());
    }

    #[test]
    fn test_apply_draw() {
        let mut game = Klondike::with_seed(3).unwrap();
        let top = *game.board().deck().peek().unwrap();

        let outcome = game.apply(Command::Draw);

        assert_eq!(outcome, CommandOutcome::Draw(DrawOutcome::Drew(top)));
        assert_eq!(game.pile(Slots::WASTE).unwrap().peek_top(), Some(&top));
    }
}
