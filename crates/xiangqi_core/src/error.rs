use thiserror::Error;

use crate::types::{Move, Side};

/// Failure of [`GameState::apply`](crate::GameState::apply).
///
/// The input state is never modified, whichever variant is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("piece #{piece_id} does not exist (state holds {len} pieces)")]
    InvalidReference { piece_id: usize, len: usize },
    #[error("move {0} is illegal in this position")]
    IllegalMove(Move),
}

/// A snapshot that breaks the game state invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("piece #{index} is off the board at ({x}, {y})")]
    OffBoard { index: usize, x: i8, y: i8 },
    #[error("pieces #{first} and #{second} share the cell ({x}, {y})")]
    SharedCell {
        first: usize,
        second: usize,
        x: i8,
        y: i8,
    },
    #[error("{0} has more than one general")]
    ExtraGeneral(Side),
    #[error("game_over={game_over} does not match {generals} general(s) on the board")]
    GameOverMismatch { game_over: bool, generals: usize },
    #[error("winner {recorded:?} does not match the surviving general {expected:?}")]
    WinnerMismatch {
        recorded: Option<Side>,
        expected: Option<Side>,
    },
}
