//! Turn orchestration.
//!
//! One call to `GameService::play` is one unit of work: load the game,
//! apply the human move, let the machine reply while it holds the turn,
//! resolve passes and game end, and store the result.

use tracing::{debug, instrument};

use crate::ai::{Opponent, OpponentConfig};
use crate::core::{Difficulty, GameMode, GameRng, GameRngState, Move, Side};
use crate::error::SessionError;
use crate::rules::{next_turn, turn_for, TurnState};

use super::snapshot::GameSnapshot;
use super::store::GameStore;

/// Side played by the machine in `GameMode::Cpu`.
pub const MACHINE_SIDE: Side = Side::Second;

/// Runs games stored in a `GameStore`.
///
/// The Easy tier draws from one RNG owned by the service, seeded once
/// from `OpponentConfig::seed` (or entropy) and advanced across all games.
#[derive(Debug)]
pub struct GameService<S: GameStore> {
    store: S,
    config: OpponentConfig,
    rng: GameRng,
}

impl<S: GameStore> GameService<S> {
    /// Create a service with default opponent configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, OpponentConfig::default())
    }

    /// Create a service with custom opponent configuration.
    pub fn with_config(store: S, config: OpponentConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self { store, config, rng }
    }

    /// Resume the machine's RNG from a saved state.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    /// Current RNG state, for saving alongside the store.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load an existing game.
    pub fn get(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        self.store
            .get(id)?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Load a game, creating it on the starting board if it does not exist.
    ///
    /// `mode` and `difficulty` only apply to a newly created game.
    pub fn start(
        &mut self,
        id: &str,
        mode: GameMode,
        difficulty: Option<Difficulty>,
    ) -> Result<GameSnapshot, SessionError> {
        if let Some(existing) = self.store.get(id)? {
            return Ok(existing);
        }
        let snapshot = GameSnapshot::new(id, mode, difficulty);
        self.store.put(snapshot.clone())?;
        debug!(id, %mode, ?difficulty, "game created");
        Ok(snapshot)
    }

    /// Remove a game from the store.
    pub fn delete(&mut self, id: &str) -> Result<Option<GameSnapshot>, SessionError> {
        Ok(self.store.delete(id)?)
    }

    /// Play `(row, col)` for the side to move, then let the machine reply.
    ///
    /// On error the stored game is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, id: &str, row: i32, col: i32) -> Result<GameSnapshot, SessionError> {
        let mut snapshot = self.get(id)?;
        if snapshot.is_game_over {
            return Err(SessionError::GameOver(id.to_string()));
        }

        let mut board = snapshot.board()?;
        let side = turn_for(&board, snapshot.current_player)
            .side_to_move()
            .ok_or_else(|| SessionError::GameOver(id.to_string()))?;
        if snapshot.mode == GameMode::Cpu && side == MACHINE_SIDE {
            return Err(SessionError::NotYourTurn { side });
        }

        if !board.make_move(row, col, side) {
            return Err(SessionError::IllegalMove { row, col, side });
        }
        snapshot.last_move = Move::try_new(row, col);
        debug!(%side, row, col, "move applied");

        let mut turn = next_turn(&board, side);
        let mut last = side;

        if snapshot.mode == GameMode::Cpu {
            let mut opponent = Opponent::with_config(
                snapshot.difficulty.unwrap_or_default(),
                &self.config,
            )
            .with_rng(self.rng.clone());
            while turn.side_to_move() == Some(MACHINE_SIDE) {
                if matches!(turn, TurnState::Pass(_)) {
                    debug!(side = %MACHINE_SIDE.opponent(), "forced pass");
                }
                let Some(mv) = opponent.select_move(&board, MACHINE_SIDE) else {
                    break;
                };
                board.play(mv, MACHINE_SIDE);
                snapshot.last_move = Some(mv);
                last = MACHINE_SIDE;
                debug!(side = %MACHINE_SIDE, %mv, "machine move applied");
                turn = next_turn(&board, MACHINE_SIDE);
            }
            self.rng = opponent.rng().clone();
        }

        snapshot.set_board(&board);
        match turn {
            TurnState::Move(next) => snapshot.current_player = next,
            TurnState::Pass(next) => {
                debug!(side = %next.opponent(), "forced pass");
                snapshot.current_player = next;
            }
            TurnState::Over(result) => {
                snapshot.current_player = last.opponent();
                snapshot.is_game_over = true;
                snapshot.winner = result.winner();
                let score = board.score();
                debug!(?result, first = score.first, second = score.second, "game over");
            }
        }

        self.store.put(snapshot.clone())?;
        Ok(snapshot)
    }
}
