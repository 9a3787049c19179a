use crate::{
    board::{Board, CellView},
    common::{AttackOutcome, GameError},
    config::{GameConfig, SinkMarking, GRID_SIZE, NUM_SHIPS},
};
use log::{debug, info};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    Playing,
    Won,
}

/// Read-only picture of a game for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cells: [[CellView; GRID_SIZE]; GRID_SIZE],
    pub destroyed_ships: usize,
    pub shots: usize,
    pub status: GameStatus,
}

/// Authoritative game value. Every attack produces a new `GameState`; the
/// destroyed count and status are always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    sink_marking: SinkMarking,
}

impl GameState {
    pub fn new(board: Board, sink_marking: SinkMarking) -> Self {
        Self {
            board,
            sink_marking,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn sink_marking(&self) -> SinkMarking {
        self.sink_marking
    }

    /// Resolve an attack at (row, col) and return the next state.
    ///
    /// Repeated attacks and attacks after the game is won return `self`
    /// unchanged. Coordinates outside the grid are rejected.
    pub fn attack(&self, row: usize, col: usize) -> Result<(GameState, AttackOutcome), GameError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.is_won() {
            return Ok((*self, AttackOutcome::GameOver));
        }
        let mut next = *self;
        let outcome = next.board.strike(row, col, self.sink_marking)?;
        debug!("attack ({}, {}) -> {:?}", row, col, outcome);
        Ok((next, outcome))
    }

    /// Number of sunk ships.
    pub fn destroyed_count(&self) -> usize {
        self.board.destroyed_ships()
    }

    pub fn status(&self) -> GameStatus {
        if self.destroyed_count() == NUM_SHIPS {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// Distinct cells attacked so far.
    pub fn shots(&self) -> usize {
        self.board.hits().count_ones()
    }

    pub fn snapshot(&self) -> Snapshot {
        let cells = self.board.cells().map(|row| row.map(|cell| cell.view()));
        Snapshot {
            cells,
            destroyed_ships: self.destroyed_count(),
            shots: self.shots(),
            status: self.status(),
        }
    }
}

/// A single-player session: owns the current state and replaces it on every
/// attack or restart.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    config: GameConfig,
}

impl Game {
    /// Generate a fresh random layout and start playing.
    pub fn new<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        let board = Board::generate(rng)?;
        info!("new game: {} ships placed", board.ships().count());
        Ok(Self::from_board(board, config))
    }

    /// Start playing on a prepared board.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            state: GameState::new(board, config.sink_marking),
            config,
        }
    }

    /// Attack (row, col) and keep the resulting state.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, GameError> {
        let was_won = self.state.is_won();
        let (next, outcome) = self.state.attack(row, col)?;
        self.state = next;
        if !was_won && self.state.is_won() {
            info!("all ships destroyed after {} shots", self.state.shots());
        }
        Ok(outcome)
    }

    /// Throw away the current game and start a new one with the same config.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Game::new(rng, self.config)?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn destroyed_count(&self) -> usize {
        self.state.destroyed_count()
    }

    pub fn shots(&self) -> usize {
        self.state.shots()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}
