//! The turn orchestrator.
//!
//! `GameState` owns the grid and runs one step of the turn cycle per
//! call: resolve a move, wait for the renderer, spawn, check for the end.
//! It holds no interpolation state; "an animation is owed" is simply the
//! `Animating` phase.

use crate::action::{Action, ActionError};
use crate::clock::{Clock, SystemClock};
use crate::config::GameConfig;
use crate::contracts::{Contract, MoveContract, PlaceContract};
use crate::direction::Direction;
use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::phases::Phase;
use crate::resolver::resolve;
use crate::rules::is_terminal;
use crate::snapshot::GameSnapshot;
use crate::spawner::{SpawnedTile, Spawner};
use crate::transition::Transition;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Tiles placed on a fresh board.
const INITIAL_TILES: usize = 2;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) phase: Phase,
    spawner: Spawner,
    clock: Arc<dyn Clock>,
    started_at: Instant,
    pub(crate) ended_at: Option<Instant>,
    pending: Vec<Transition>,
    last_spawn: Option<SpawnedTile>,
}

impl GameState {
    /// Starts a game on a `size`×`size` board with an OS-seeded spawner.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is below 2.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_parts(size, Spawner::from_entropy(), Arc::new(SystemClock))
    }

    /// Starts a game from configuration, seeding the spawner if asked.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if the configured size is below 2.
    #[instrument(skip(config), fields(size = config.grid_size(), seed = ?config.seed()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, GridError> {
        let spawner = match config.seed() {
            Some(seed) => Spawner::from_seed(*seed),
            None => Spawner::from_entropy(),
        };
        Self::with_parts(*config.grid_size(), spawner, Arc::new(SystemClock))
    }

    /// Starts a game with an injected spawner and clock.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is below 2.
    #[instrument(skip(spawner, clock))]
    pub fn with_parts(
        size: usize,
        spawner: Spawner,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GridError> {
        let grid = Grid::empty(size)?;
        let mut game = Self::from_grid(grid, spawner, clock);
        game.seed_board();
        info!(size, "Game started");
        Ok(game)
    }

    /// Resumes play on an existing grid.
    ///
    /// The phase is derived from the board: a terminal grid starts out
    /// in `GameOver` with zero elapsed time.
    #[instrument(skip(grid, spawner, clock), fields(size = grid.size()))]
    pub fn from_grid(grid: Grid, spawner: Spawner, clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        let mut game = Self {
            grid,
            phase: Phase::Playing,
            spawner,
            clock,
            started_at,
            ended_at: None,
            pending: Vec::new(),
            last_spawn: None,
        };
        game.settle_at(started_at);
        game
    }

    // ─────────────────────────────────────────────────────────────
    //  Inputs
    // ─────────────────────────────────────────────────────────────

    /// Slides and merges toward `direction`.
    ///
    /// Returns true if the board changed. A move that changes nothing,
    /// or any move outside `Playing`, is ignored: no spawn, no
    /// transitions, no phase change.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if let Err(err) = MoveContract::pre(self, &direction) {
            debug!(%err, "Move ignored");
            return false;
        }

        let outcome = resolve(&self.grid, direction);
        if !outcome.moved {
            debug!("Move changed nothing");
            return false;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid = outcome.grid;
        self.pending = outcome.transitions;
        self.last_spawn = None;
        self.phase = Phase::Animating;

        #[cfg(debug_assertions)]
        crate::contracts::assert_postcondition(MoveContract::post(&before, self));

        debug!(transitions = self.pending.len(), "Move committed");
        true
    }

    /// Signals that the renderer finished animating the last move.
    ///
    /// Spawns one tile and checks for the end of the game. Outside
    /// `Animating` this does nothing. Returns the resulting phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn animations_complete(&mut self) -> Phase {
        if self.phase != Phase::Animating {
            debug!("No animation owed");
            return self.phase;
        }

        self.pending.clear();
        self.last_spawn = self.spawn_tile();
        self.settle();
        self.phase
    }

    /// Drops a 2 or 4 on the empty cell at `(row, col)`.
    ///
    /// Returns false, leaving the game untouched, if the game is not
    /// `Playing` or the cell is occupied or off the board.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, row: usize, col: usize) -> bool {
        match self.try_place_at(Cell::new(row, col)) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "Placement rejected");
                false
            }
        }
    }

    /// Drops a 2 or 4 on `cell`, reporting why a placement was refused.
    ///
    /// The end-of-game check runs immediately, so a placement that fills
    /// the last gap can end the game.
    ///
    /// # Errors
    ///
    /// - [`ActionError::NotAccepting`] outside `Playing`
    /// - [`ActionError::OutOfRange`] for a cell off the board
    /// - [`ActionError::Occupied`] for a cell holding a tile
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn try_place_at(&mut self, cell: Cell) -> Result<SpawnedTile, ActionError> {
        PlaceContract::pre(self, &cell)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let value = self.spawner.tile_value();
        self.grid = self.grid.with_tile(cell, value);
        let tile = SpawnedTile::new(cell, value);
        self.last_spawn = Some(tile);
        self.settle();

        #[cfg(debug_assertions)]
        crate::contracts::assert_postcondition(PlaceContract::post(&before, self));

        debug!(%cell, value, "Tile placed");
        Ok(tile)
    }

    /// Starts over: empty board, two fresh tiles, timer reset.
    ///
    /// Accepted in every phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn restart(&mut self) {
        let size = self.grid.size();
        self.grid = Grid::from_cells(size, vec![0; size * size]);
        self.phase = Phase::Playing;
        self.started_at = self.clock.now();
        self.ended_at = None;
        self.pending.clear();
        self.seed_board();
        info!(size, "Game restarted");
    }

    /// Dispatches an [`Action`] to the matching input method.
    ///
    /// Returns true if the action was accepted.
    #[instrument(skip(self), fields(action = %action))]
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Move(direction) => self.apply_move(direction),
            Action::Place(cell) => self.try_place_at(cell).is_ok(),
            Action::AnimationsComplete => {
                let owed = self.phase == Phase::Animating;
                self.animations_complete();
                owed
            }
            Action::Restart => {
                self.restart();
                true
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Outputs
    // ─────────────────────────────────────────────────────────────

    /// Returns the current board.
    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once no move can change the board.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Transitions of the last committed move, without consuming them.
    pub fn pending_transitions(&self) -> &[Transition] {
        &self.pending
    }

    /// Hands the last move's transitions to the caller and clears them.
    #[instrument(skip(self), fields(count = self.pending.len()))]
    pub fn take_pending_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.pending)
    }

    /// The tile most recently spawned or placed, if any since the last move.
    pub fn last_spawn(&self) -> Option<SpawnedTile> {
        self.last_spawn
    }

    /// When the current game started.
    pub fn start_time(&self) -> Instant {
        self.started_at
    }

    /// When the game ended; `None` until game over.
    pub fn end_time(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Time since the game started, frozen at game over.
    pub fn elapsed_time(&self) -> Duration {
        let until = self.ended_at.unwrap_or_else(|| self.clock.now());
        until.saturating_duration_since(self.started_at)
    }

    /// Serializable view of the game for a renderer.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            phase: self.phase,
            game_over: self.is_game_over(),
            elapsed_ms: whole_millis(self.elapsed_time()),
            transitions: self.pending.clone(),
            last_spawn: self.last_spawn,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn seed_board(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        self.last_spawn = None;
        self.settle();
    }

    fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let (grid, tile) = self.spawner.spawn(&self.grid)?;
        self.grid = grid;
        Some(tile)
    }

    /// Moves to `GameOver` if the board is terminal, else to `Playing`.
    fn settle(&mut self) {
        let now = self.clock.now();
        self.settle_at(now);
    }

    fn settle_at(&mut self, now: Instant) {
        if is_terminal(&self.grid) {
            self.phase = Phase::GameOver;
            self.ended_at = Some(now);
            info!(
                elapsed_ms = whole_millis(now.saturating_duration_since(self.started_at)),
                tiles = self.grid.tile_count(),
                "Game over"
            );
        } else {
            self.phase = Phase::Playing;
        }
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
