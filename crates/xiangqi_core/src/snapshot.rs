//! Whole-state snapshots for transport and persistence.
//!
//! [`GameState`] (de)serializes through [`Snapshot`], so every state read back
//! from JSON has passed [`GameState::validate`].

use serde::{Deserialize, Serialize};

use crate::board::GameState;
use crate::error::StateError;
use crate::types::*;

/// Plain wire form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pieces: Vec<Piece>,
    pub current_turn: Side,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Side>,
}

impl From<GameState> for Snapshot {
    fn from(state: GameState) -> Self {
        Self {
            pieces: state.pieces,
            current_turn: state.current_turn,
            game_over: state.game_over,
            winner: state.winner,
        }
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = StateError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let state = GameState {
            pieces: snapshot.pieces,
            current_turn: snapshot.current_turn,
            game_over: snapshot.game_over,
            winner: snapshot.winner,
        };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Check the structural invariants of this state.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut cells: [Option<usize>; (WIDTH as usize) * (HEIGHT as usize)] =
            [None; (WIDTH as usize) * (HEIGHT as usize)];
        let mut generals = [0usize; 2];

        for (index, p) in self.pieces.iter().enumerate() {
            if !on_board(p.x, p.y) {
                return Err(StateError::OffBoard {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
            let cell = &mut cells[p.y as usize * WIDTH as usize + p.x as usize];
            if let Some(first) = *cell {
                return Err(StateError::SharedCell {
                    first,
                    second: index,
                    x: p.x,
                    y: p.y,
                });
            }
            *cell = Some(index);

            if p.kind == PieceKind::General {
                generals[p.side.idx()] += 1;
                if generals[p.side.idx()] > 1 {
                    return Err(StateError::ExtraGeneral(p.side));
                }
            }
        }

        let total = generals[0] + generals[1];
        if self.game_over != (total < 2) {
            return Err(StateError::GameOverMismatch {
                game_over: self.game_over,
                generals: total,
            });
        }

        let expected = match generals {
            [1, 0] if self.game_over => Some(Side::Red),
            [0, 1] if self.game_over => Some(Side::Black),
            _ => None,
        };
        if self.winner != expected {
            return Err(StateError::WinnerMismatch {
                recorded: self.winner,
                expected,
            });
        }

        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
