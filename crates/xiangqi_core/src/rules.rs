//! Move legality.
//!
//! Checks run in a fixed order and stop at the first failure. The reason is
//! reported through `tracing` only; the verdict never depends on it.

use std::fmt;

use crate::board::{Axis, GameState};
use crate::types::*;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    UnknownPiece,
    OffBoard,
    WrongTurn,
    NullMove,
    OwnPieceOnTarget,
    Geometry(PieceKind),
    OutsidePalace,
    CrossesRiver,
    HorseLegBlocked,
    PathBlocked,
    CannonScreen { between: usize, capture: bool },
    SoldierDirection,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownPiece => write!(f, "piece id out of range"),
            Violation::OffBoard => write!(f, "destination off the board"),
            Violation::WrongTurn => write!(f, "piece does not belong to the side to move"),
            Violation::NullMove => write!(f, "destination equals origin"),
            Violation::OwnPieceOnTarget => write!(f, "destination holds a friendly piece"),
            Violation::Geometry(kind) => write!(f, "{kind:?} cannot move that way"),
            Violation::OutsidePalace => write!(f, "destination outside the palace"),
            Violation::CrossesRiver => write!(f, "elephant cannot cross the river"),
            Violation::HorseLegBlocked => write!(f, "horse leg is blocked"),
            Violation::PathBlocked => write!(f, "path is not clear"),
            Violation::CannonScreen { between, capture } => write!(
                f,
                "cannon {} needs {} screen(s), found {between}",
                if *capture { "capture" } else { "move" },
                usize::from(*capture)
            ),
            Violation::SoldierDirection => write!(f, "soldier cannot move that way"),
        }
    }
}

/// Whether `mv` is legal in `state`.
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    match check(state, mv) {
        Ok(()) => true,
        Err(reason) => {
            tracing::trace!(%mv, %reason, "illegal move");
            false
        }
    }
}

/// Full legality check, reporting the first rule the move breaks.
pub fn check(state: &GameState, mv: Move) -> Result<(), Violation> {
    let piece = *state.piece(mv.piece_id).ok_or(Violation::UnknownPiece)?;
    let (tx, ty) = (mv.to_x, mv.to_y);

    if !on_board(tx, ty) {
        return Err(Violation::OffBoard);
    }
    if piece.side != state.current_turn() {
        return Err(Violation::WrongTurn);
    }
    if piece.is_at(tx, ty) {
        return Err(Violation::NullMove);
    }
    let target = state.piece_at(tx, ty);
    if target.is_some_and(|t| t.side == piece.side) {
        return Err(Violation::OwnPieceOnTarget);
    }

    let dx = tx - piece.x;
    let dy = ty - piece.y;

    match piece.kind {
        PieceKind::General => {
            if !piece.side.in_palace(tx, ty) {
                return Err(Violation::OutsidePalace);
            }
            if dx.abs() + dy.abs() != 1 {
                return Err(Violation::Geometry(piece.kind));
            }
        }
        PieceKind::Advisor => {
            if !piece.side.in_palace(tx, ty) {
                return Err(Violation::OutsidePalace);
            }
            if dx.abs() != 1 || dy.abs() != 1 {
                return Err(Violation::Geometry(piece.kind));
            }
        }
        PieceKind::Elephant => {
            if dx.abs() != 2 || dy.abs() != 2 {
                return Err(Violation::Geometry(piece.kind));
            }
            if !piece.side.owns_rank(ty) {
                return Err(Violation::CrossesRiver);
            }
        }
        PieceKind::Horse => {
            let leg = match (dx.abs(), dy.abs()) {
                (2, 1) => (piece.x + dx.signum(), piece.y),
                (1, 2) => (piece.x, piece.y + dy.signum()),
                _ => return Err(Violation::Geometry(piece.kind)),
            };
            if state.piece_at(leg.0, leg.1).is_some() {
                return Err(Violation::HorseLegBlocked);
            }
        }
        PieceKind::Chariot => {
            if straight_line_between(state, &piece, tx, ty)? != 0 {
                return Err(Violation::PathBlocked);
            }
        }
        PieceKind::Cannon => {
            let between = straight_line_between(state, &piece, tx, ty)?;
            let capture = target.is_some();
            let required = usize::from(capture);
            if between != required {
                return Err(Violation::CannonScreen { between, capture });
            }
        }
        PieceKind::Soldier => {
            if dx.abs() + dy.abs() != 1 {
                return Err(Violation::Geometry(piece.kind));
            }
            let forward = dy == piece.side.forward();
            let sideways = dy == 0 && !piece.side.owns_rank(piece.y);
            if !forward && !sideways {
                return Err(Violation::SoldierDirection);
            }
        }
    }

    Ok(())
}

/// Pieces strictly between the piece and `(tx, ty)`, which must share a line.
fn straight_line_between(
    state: &GameState,
    piece: &Piece,
    tx: i8,
    ty: i8,
) -> Result<usize, Violation> {
    if piece.x == tx {
        Ok(state.pieces_between(Axis::File, tx, piece.y, ty))
    } else if piece.y == ty {
        Ok(state.pieces_between(Axis::Rank, ty, piece.x, tx))
    } else {
        Err(Violation::Geometry(piece.kind))
    }
}
