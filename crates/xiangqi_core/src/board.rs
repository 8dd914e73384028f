use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::*;

/// Orientation of a straight line on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Vertical line: fixed x, varying y.
    File,
    /// Horizontal line: fixed y, varying x.
    Rank,
}

/// An immutable game position.
///
/// Pieces are addressed by their index in [`GameState::pieces`]. The order is
/// kept across a transition except for the one captured piece, which is
/// removed, so indices past a capture shift down by one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Snapshot", into = "Snapshot")]
pub struct GameState {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) current_turn: Side,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Side>,
}

impl GameState {
    /// The standard opening layout with red to move.
    pub fn startpos() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (side, back, cannons, soldiers) in [(Side::Red, 9, 7, 6), (Side::Black, 0, 2, 3)] {
            let mut add = |kind, x| pieces.push(Piece::new(kind, side, x, back));
            add(PieceKind::General, 4);
            add(PieceKind::Advisor, 3);
            add(PieceKind::Advisor, 5);
            add(PieceKind::Elephant, 2);
            add(PieceKind::Elephant, 6);
            add(PieceKind::Horse, 1);
            add(PieceKind::Horse, 7);
            add(PieceKind::Chariot, 0);
            add(PieceKind::Chariot, 8);
            pieces.push(Piece::new(PieceKind::Cannon, side, 1, cannons));
            pieces.push(Piece::new(PieceKind::Cannon, side, 7, cannons));
            for x in [0, 2, 4, 6, 8] {
                pieces.push(Piece::new(PieceKind::Soldier, side, x, soldiers));
            }
        }
        Self::from_pieces(pieces, Side::Red)
    }

    /// Build a position from an arbitrary piece list.
    ///
    /// `game_over` and `winner` are derived from the generals on the board.
    /// No other invariant is checked here; see [`GameState::validate`].
    pub fn from_pieces(pieces: Vec<Piece>, current_turn: Side) -> Self {
        let mut generals = pieces.iter().filter(|p| p.kind == PieceKind::General);
        let (game_over, winner) = match (generals.next(), generals.next()) {
            (Some(_), Some(_)) => (false, None),
            (Some(g), None) => (true, Some(g.side)),
            (None, _) => (true, None),
        };
        Self {
            pieces,
            current_turn,
            game_over,
            winner,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, piece_id: usize) -> Option<&Piece> {
        self.pieces.get(piece_id)
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn piece_at(&self, x: i8, y: i8) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_at(x, y))
    }

    pub fn piece_index_at(&self, x: i8, y: i8) -> Option<usize> {
        self.pieces.iter().position(|p| p.is_at(x, y))
    }

    /// Count pieces strictly between `a` and `b` on the line `axis` = `fixed`.
    /// Neither endpoint is ever counted.
    pub fn pieces_between(&self, axis: Axis, fixed: i8, a: i8, b: i8) -> usize {
        let (lo, hi) = (a.min(b), a.max(b));
        self.pieces
            .iter()
            .filter(|p| {
                let (on_line, along) = match axis {
                    Axis::File => (p.x == fixed, p.y),
                    Axis::Rank => (p.y == fixed, p.x),
                };
                on_line && lo < along && along < hi
            })
            .count()
    }

    pub fn general(&self, side: Side) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.side == side && p.kind == PieceKind::General)
    }

    /// Whether `mv` is legal for the side to move.
    pub fn is_legal(&self, mv: Move) -> bool {
        rules::is_legal(self, mv)
    }

    /// Play `mv` and return the successor state.
    ///
    /// All-or-nothing: on error `self` is untouched and nothing is returned.
    pub fn apply(&self, mv: Move) -> Result<GameState, MoveError> {
        if mv.piece_id >= self.pieces.len() {
            return Err(MoveError::InvalidReference {
                piece_id: mv.piece_id,
                len: self.pieces.len(),
            });
        }
        if !rules::is_legal(self, mv) {
            return Err(MoveError::IllegalMove(mv));
        }

        let captured = self
            .piece_index_at(mv.to_x, mv.to_y)
            .filter(|&i| i != mv.piece_id);

        let pieces = self
            .pieces
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != captured)
            .map(|(i, p)| {
                if i == mv.piece_id {
                    Piece {
                        x: mv.to_x,
                        y: mv.to_y,
                        ..*p
                    }
                } else {
                    *p
                }
            })
            .collect();

        Ok(GameState::from_pieces(pieces, self.current_turn.other()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Free-function form of [`GameState::apply`].
pub fn apply(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    state.apply(mv)
}

/// Free-function form of [`GameState::piece_at`].
pub fn piece_at(state: &GameState, x: i8, y: i8) -> Option<&Piece> {
    state.piece_at(x, y)
}

/// Free-function form of [`GameState::pieces_between`].
pub fn pieces_between(state: &GameState, axis: Axis, fixed: i8, a: i8, b: i8) -> usize {
    state.pieces_between(axis, fixed, a, b)
}
