//! The current-game handle.
//!
//! One [`GameService`] owns one game. Every mutating call takes `&mut self`,
//! so a player move and the automated reply run as one unit and two requests
//! can never interleave on the same game.

use serde::Serialize;
use thiserror::Error;

use heuristic_engine::HeuristicEngine;
use xiangqi_core::{legal_moves, Engine, GameState, Move, MoveError};

use crate::config::ServiceConfig;
use crate::store::{SnapshotStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no game in progress")]
    NoGame,
    #[error("game is already over")]
    GameOver,
    #[error("invalid move {0}")]
    IllegalMove(Move),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of one accepted player turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    /// The player's move, relative to the state before the turn
    pub player_move: Move,
    /// The automated reply, relative to the state after the player's move
    pub reply: Option<Move>,
    /// State after both moves
    pub state: GameState,
}

pub struct GameService<E = HeuristicEngine> {
    store: SnapshotStore,
    engine: E,
    current: Option<GameState>,
}

impl GameService<HeuristicEngine> {
    /// Build the service described by `config`, restoring any saved game.
    pub fn open(config: &ServiceConfig) -> Result<Self, StoreError> {
        let engine = match config.seed {
            Some(seed) => HeuristicEngine::seeded(seed),
            None => HeuristicEngine::new(),
        }
        .with_top_candidates(config.top_candidates);

        Self::with_engine(SnapshotStore::new(&config.snapshot_path), engine)
    }
}

impl<E: Engine> GameService<E> {
    pub fn with_engine(store: SnapshotStore, engine: E) -> Result<Self, StoreError> {
        let current = store.load()?;
        match &current {
            Some(state) => tracing::info!(
                path = %store.path().display(),
                turn = %state.current_turn(),
                game_over = state.is_game_over(),
                "restored saved game"
            ),
            None => tracing::info!(path = %store.path().display(), "no saved game"),
        }
        Ok(Self {
            store,
            engine,
            current,
        })
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Start a fresh game, replacing any current one.
    pub fn new_game(&mut self) -> Result<&GameState, ServiceError> {
        let state = GameState::startpos();
        self.store.save(&state)?;
        self.engine.new_game();
        tracing::info!("new game started");
        Ok(&*self.current.insert(state))
    }

    pub fn state(&self) -> Result<&GameState, ServiceError> {
        self.current.as_ref().ok_or(ServiceError::NoGame)
    }

    /// Legal moves for the side to move in the current game.
    pub fn legal_moves(&self) -> Result<Vec<Move>, ServiceError> {
        Ok(legal_moves(self.state()?))
    }

    /// Play the player's move and, unless that ends the game, the engine's
    /// reply. The new state is persisted before it becomes current; on any
    /// error the current game is left exactly as it was.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, ServiceError> {
        let current = self.current.as_ref().ok_or(ServiceError::NoGame)?;
        if current.is_game_over() {
            tracing::warn!(%mv, "move rejected: game is over");
            return Err(ServiceError::GameOver);
        }
        if !current.is_legal(mv) {
            tracing::warn!(%mv, "move rejected: illegal");
            return Err(ServiceError::IllegalMove(mv));
        }

        let after_player = current.apply(mv)?;
        tracing::info!(%mv, "player move accepted");

        let (state, reply) = if after_player.is_game_over() {
            (after_player, None)
        } else {
            match self.engine.search(&after_player).best_move {
                Some(reply) => {
                    let state = after_player.apply(reply)?;
                    tracing::info!(%reply, engine = self.engine.name(), "automated reply");
                    (state, Some(reply))
                }
                None => {
                    tracing::info!("automated side has no legal move");
                    (after_player, None)
                }
            }
        };

        if state.is_game_over() {
            match state.winner() {
                Some(side) => tracing::info!(winner = %side, "game over"),
                None => tracing::info!("game over"),
            }
        }

        self.store.save(&state)?;
        self.current = Some(state.clone());

        Ok(TurnOutcome {
            player_move: mv,
            reply,
            state,
        })
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
