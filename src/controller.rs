//! Game controller: one session of human-versus-memory play
//!
//! The controller owns the board and the move memory, applies both sides'
//! moves through the rule module, and prunes the computer's last move from
//! memory whenever the player wins.

use std::{fmt, path::PathBuf, sync::Arc};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    error::{Error, MoveError},
    game::{Board, BoardKey, CELLS, Cell, GameResult, RuleModule, Side},
    memory::MoveMemory,
    ports::MemoryRepository,
};

/// Where a session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingComputerMove,
    GameOver(GameResult),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingPlayerMove => write!(f, "awaiting the player's move"),
            Phase::AwaitingComputerMove => write!(f, "awaiting the computer's move"),
            Phase::GameOver(result) => write!(f, "over ({result:?})"),
        }
    }
}

/// The computer's most recent move, kept so a loss can be blamed on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord<M> {
    pub key: BoardKey,
    pub mv: M,
}

/// What the computer did on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerTurn<M> {
    Played(M),
    /// No stored move for the position; the player wins
    Conceded,
}

/// Repository handle shared between the app container and its sessions
pub type SharedRepository<M> = Arc<dyn MemoryRepository<M> + Send + Sync>;

struct StoreBinding<M> {
    repository: SharedRepository<M>,
    path: PathBuf,
}

/// Controller for one game session
pub struct GameController<R: RuleModule> {
    rules: R,
    memory: MoveMemory<R::Move>,
    board: Board,
    phase: Phase,
    pending: Option<MoveRecord<R::Move>>,
    conceded: bool,
    /// Side whose half-move was applied last; `None` on a fresh board
    last_mover: Option<Side>,
    rng: StdRng,
    store: Option<StoreBinding<R::Move>>,
}

impl<R: RuleModule> fmt::Debug for GameController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("rules", &self.rules.name())
            .field("board", &self.board.key())
            .field("phase", &self.phase)
            .field("positions", &self.memory.len())
            .field("store", &self.store.as_ref().map(|s| &s.path))
            .finish()
    }
}

impl<R: RuleModule> GameController<R> {
    /// Create a controller playing from `memory`, with a fresh board.
    ///
    /// With a seed the computer's choices are reproducible.
    pub fn new(rules: R, memory: MoveMemory<R::Move>, seed: Option<u64>) -> Self {
        let board = rules.initial_board();
        let mut controller = GameController {
            rules,
            memory,
            board,
            phase: Phase::AwaitingPlayerMove,
            pending: None,
            conceded: false,
            last_mover: None,
            rng: StdRng::seed_from_u64(0),
            store: None,
        };
        controller.reseed(seed);
        controller
    }

    /// Open a session whose memory is loaded from `repository` at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the store is missing, empty or malformed; there is no fallback
    /// to an empty memory.
    pub fn open(
        rules: R,
        repository: SharedRepository<R::Move>,
        path: impl Into<PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let path = path.into();
        let memory = repository.load(&path)?;
        Ok(Self::new(rules, memory, seed).with_store(repository, path))
    }

    /// Attach the store that [`persist`](Self::persist) writes to.
    pub fn with_store(mut self, repository: SharedRepository<R::Move>, path: impl Into<PathBuf>) -> Self {
        self.store = Some(StoreBinding {
            repository,
            path: path.into(),
        });
        self
    }

    /// Set or reset the RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
    }

    /// Reset to the variant's initial layout for a new game.
    ///
    /// Clears the pending move record and any concession.
    pub fn init_board(&mut self) {
        self.board = self.rules.initial_board();
        self.pending = None;
        self.conceded = false;
        self.last_mover = None;
        self.phase = Phase::AwaitingPlayerMove;
    }

    /// Reload the memory from the attached store.
    ///
    /// # Errors
    ///
    /// Fails if no store is attached or the store cannot be loaded.
    pub fn init_memory(&mut self) -> Result<()> {
        let store = self.store.as_ref().ok_or(Error::StoreNotConfigured)?;
        self.memory = store.repository.load(&store.path)?;
        Ok(())
    }

    /// Start another game after the previous one ended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfTurn`] unless the current game is over.
    pub fn play_again(&mut self) -> Result<()> {
        if !matches!(self.phase, Phase::GameOver(_)) {
            return Err(self.out_of_turn());
        }
        self.init_board();
        Ok(())
    }

    /// Submit the human's move.
    ///
    /// On success the position is adjudicated and the phase advances. A
    /// rejected move leaves the board and phase unchanged.
    pub fn player_move(&mut self, mv: R::Move) -> std::result::Result<(), MoveError> {
        if self.phase != Phase::AwaitingPlayerMove {
            return Err(MoveError::OutOfTurn);
        }

        self.rules
            .validate_and_apply_player_move(&mut self.board, mv)?;
        log::debug!("player played {mv}; board {}", self.board.key());
        self.last_mover = Some(Side::Player);
        self.adjudicate(Side::Player);
        Ok(())
    }

    /// Play the computer's turn from memory.
    ///
    /// When memory has no move for the position the computer concedes and the
    /// game ends as a player win.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfTurn`] unless the computer is to move.
    pub fn computer_move(&mut self) -> Result<ComputerTurn<R::Move>> {
        if self.phase != Phase::AwaitingComputerMove {
            return Err(self.out_of_turn());
        }

        let key = self.board.key();
        let turn = match self.memory.propose(&key, &mut self.rng) {
            Some(mv) => {
                log::debug!("computer plays {mv} from {key}");
                self.rules.apply_computer_move(&mut self.board, mv);
                self.pending = Some(MoveRecord { key, mv });
                ComputerTurn::Played(mv)
            }
            None => {
                log::info!("no stored move for {key}; computer concedes");
                self.conceded = true;
                ComputerTurn::Conceded
            }
        };

        self.last_mover = Some(Side::Computer);
        self.adjudicate(Side::Computer);
        Ok(turn)
    }

    /// Adjudicate the board after `last_mover` completed a half-move.
    ///
    /// [`player_move`](Self::player_move) and
    /// [`computer_move`](Self::computer_move) already do this, so calling it
    /// again is safe: a finished game returns its result, and a side that did
    /// not make the last half-move gets `InProgress` with the phase untouched.
    /// A repeated call never prunes twice.
    pub fn evaluate_and_maybe_prune(&mut self, last_mover: Side) -> GameResult {
        if let Phase::GameOver(result) = self.phase {
            return result;
        }
        if self.last_mover != Some(last_mover) {
            return GameResult::InProgress;
        }
        self.adjudicate(last_mover)
    }

    /// Advance the phase after a half-move and prune on a player win
    fn adjudicate(&mut self, last_mover: Side) -> GameResult {
        let result = if self.conceded {
            GameResult::PlayerWin
        } else {
            self.rules.evaluate(&self.board, last_mover)
        };

        self.phase = match result {
            GameResult::InProgress => match last_mover {
                Side::Player => Phase::AwaitingComputerMove,
                Side::Computer => Phase::AwaitingPlayerMove,
            },
            over => Phase::GameOver(over),
        };

        if result == GameResult::PlayerWin {
            if let Some(record) = self.pending.take() {
                if self.memory.retract(&record.key, record.mv) {
                    log::info!("forgetting {} as a reply to {}", record.mv, record.key);
                }
            }
        }

        result
    }

    /// Write the memory to the attached store, replacing its contents.
    ///
    /// # Errors
    ///
    /// Fails if no store is attached or the write fails.
    pub fn persist(&self) -> Result<()> {
        let store = self.store.as_ref().ok_or(Error::StoreNotConfigured)?;
        store.repository.save(&self.memory, &store.path)
    }

    /// End the session, persisting the memory.
    ///
    /// # Errors
    ///
    /// Fails if the memory cannot be saved.
    pub fn end_session(self) -> Result<MoveMemory<R::Move>> {
        self.persist()?;
        Ok(self.memory)
    }

    /// Copy of the cells for rendering
    pub fn board_snapshot(&self) -> [Cell; CELLS] {
        *self.board.cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn memory(&self) -> &MoveMemory<R::Move> {
        &self.memory
    }

    pub fn pending_record(&self) -> Option<&MoveRecord<R::Move>> {
        self.pending.as_ref()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    fn out_of_turn(&self) -> Error {
        Error::OutOfTurn {
            phase: self.phase.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::InMemoryRepository,
        memory::FlatCodec,
        variants::{Hexapawn, Placement, Step, TicTacToe},
    };

    fn key(s: &str) -> BoardKey {
        BoardKey::parse(s).unwrap()
    }

    fn tictactoe(text: &str) -> GameController<TicTacToe> {
        GameController::new(TicTacToe, FlatCodec::decode(text).unwrap(), Some(42))
    }

    #[test]
    fn test_starts_awaiting_player() {
        let controller = tictactoe("000010000:3");
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(controller.board_snapshot(), [Cell::Empty; CELLS]);
        assert!(controller.pending_record().is_none());
    }

    #[test]
    fn test_rejected_move_does_not_advance() {
        let mut controller = tictactoe("000010000:3");
        assert_eq!(controller.player_move(Placement(0)), Err(MoveError::OutOfRange));
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);

        controller.player_move(Placement(5)).unwrap();
        assert_eq!(controller.phase(), Phase::AwaitingComputerMove);
        assert_eq!(controller.player_move(Placement(1)), Err(MoveError::OutOfTurn));
    }

    #[test]
    fn test_computer_move_out_of_turn() {
        let mut controller = tictactoe("000010000:3");
        assert!(matches!(
            controller.computer_move(),
            Err(Error::OutOfTurn { .. })
        ));
    }

    #[test]
    fn test_computer_plays_and_records() {
        let mut controller = tictactoe("000010000:3");
        controller.player_move(Placement(5)).unwrap();

        assert_eq!(
            controller.computer_move().unwrap(),
            ComputerTurn::Played(Placement(3))
        );
        assert_eq!(controller.board().key(), key("002010000"));
        assert_eq!(
            controller.pending_record(),
            Some(&MoveRecord {
                key: key("000010000"),
                mv: Placement(3),
            })
        );
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
    }

    #[test]
    fn test_concession_is_player_win_and_prunes_previous_move() {
        // Player 5, computer 1, player 9; nothing stored for the new position.
        let mut controller = tictactoe("000010000:1");
        controller.player_move(Placement(5)).unwrap();
        controller.computer_move().unwrap();
        controller.player_move(Placement(9)).unwrap();

        assert_eq!(controller.computer_move().unwrap(), ComputerTurn::Conceded);
        assert_eq!(controller.phase(), Phase::GameOver(GameResult::PlayerWin));
        assert!(controller.memory().is_empty());
        assert!(controller.pending_record().is_none());
    }

    #[test]
    fn test_repeated_evaluation_does_not_prune_twice() {
        let mut controller = tictactoe("000010000:3,7");
        controller.player_move(Placement(5)).unwrap();
        controller.computer_move().unwrap();
        controller.player_move(Placement(1)).unwrap();

        assert_eq!(controller.computer_move().unwrap(), ComputerTurn::Conceded);
        assert_eq!(controller.memory().move_count(), 1);

        assert_eq!(
            controller.evaluate_and_maybe_prune(Side::Computer),
            GameResult::PlayerWin
        );
        assert_eq!(controller.memory().move_count(), 1);
    }

    #[test]
    fn test_evaluate_on_fresh_board_keeps_player_first() {
        let mut controller = tictactoe("000000000:5");

        assert_eq!(
            controller.evaluate_and_maybe_prune(Side::Player),
            GameResult::InProgress
        );
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
        assert!(matches!(
            controller.computer_move(),
            Err(Error::OutOfTurn { .. })
        ));
        assert_eq!(controller.board().key(), key("000000000"));
    }

    #[test]
    fn test_evaluate_for_wrong_side_changes_nothing() {
        // 2 2 2
        // 2 . .
        // . 1 1    after 7-4 and the capture 2-4 the player is to move
        let mut controller = GameController::new(
            Hexapawn,
            FlatCodec::decode("222100011:2-4").unwrap(),
            Some(5),
        );
        controller.player_move(Step::new(7, 4)).unwrap();
        controller.computer_move().unwrap();
        let memory = controller.memory().clone();

        assert_eq!(
            controller.evaluate_and_maybe_prune(Side::Player),
            GameResult::InProgress
        );
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(controller.memory(), &memory);
        assert!(controller.pending_record().is_some());

        assert_eq!(
            controller.evaluate_and_maybe_prune(Side::Computer),
            GameResult::InProgress
        );
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
    }

    #[test]
    fn test_computer_win_leaves_memory_untouched() {
        // 2 2 .
        // 1 1 .
        // 1 . .    computer completes the top row with 3
        let mut controller = GameController::new(
            TicTacToe,
            FlatCodec::decode("220110100:3").unwrap(),
            Some(1),
        );
        controller.board = Board::from_key(&key("220110100"));
        controller.phase = Phase::AwaitingComputerMove;

        assert_eq!(
            controller.computer_move().unwrap(),
            ComputerTurn::Played(Placement(3))
        );
        assert_eq!(controller.phase(), Phase::GameOver(GameResult::ComputerWin));
        assert_eq!(controller.memory().move_count(), 1);
    }

    #[test]
    fn test_play_again_only_after_game_over() {
        let mut controller = GameController::new(
            Hexapawn,
            FlatCodec::decode("222100011:2-4").unwrap(),
            Some(5),
        );
        assert!(controller.play_again().is_err());

        controller.player_move(Step::new(7, 4)).unwrap();
        controller.computer_move().unwrap();
        // 2 . 2
        // 2 1 .
        // . . 1    computer can still capture 1-5, but has nothing stored
        controller.player_move(Step::new(8, 5)).unwrap();
        assert_eq!(controller.computer_move().unwrap(), ComputerTurn::Conceded);

        controller.play_again().unwrap();
        assert_eq!(controller.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(controller.board().key(), key("222000111"));
        // The capture 2-4 led to a concession and is gone.
        assert!(controller.memory().is_empty());
    }

    #[test]
    fn test_persist_requires_store() {
        let controller = tictactoe("000010000:3");
        assert!(matches!(
            controller.persist(),
            Err(Error::StoreNotConfigured)
        ));
    }

    #[test]
    fn test_open_persist_and_reload() {
        let repo = InMemoryRepository::new();
        repo.insert_text(std::path::Path::new("ttt"), "000010000:3|100000000:5");

        let mut controller =
            GameController::open(TicTacToe, Arc::new(repo.clone()), "ttt", Some(9)).unwrap();
        controller.player_move(Placement(5)).unwrap();
        controller.computer_move().unwrap();
        controller.player_move(Placement(1)).unwrap();
        controller.player_move(Placement(9)).unwrap_err();
        assert_eq!(controller.computer_move().unwrap(), ComputerTurn::Conceded);
        controller.persist().unwrap();

        assert_eq!(
            repo.text(std::path::Path::new("ttt")).as_deref(),
            Some("100000000:5")
        );

        controller.init_memory().unwrap();
        assert_eq!(controller.memory().len(), 1);
    }
}
