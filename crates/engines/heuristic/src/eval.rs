//! Static one-ply move scoring.

use xiangqi_core::{manhattan, GameState, Move, PieceKind};

/// Captures are worth twice the victim's material value.
const CAPTURE_MULTIPLIER: i32 = 2;
/// Moving closer to the enemy general.
const APPROACH_BONUS: i32 = 15;
/// A chariot, cannon or horse landing on the enemy general's file or rank.
const LINE_BONUS: i32 = 25;
/// Per friendly general or chariot within two steps of the destination.
const ESCORT_BONUS: i32 = 10;
const ESCORT_RADIUS: i32 = 2;
/// Landing on files 3..=5.
const CENTER_BONUS: i32 = 5;
/// A soldier landing past the river.
const CROSSING_BONUS: i32 = 20;

/// Scores `mv` in `state`. Higher is better for the side making the move.
///
/// Assumes `mv` is legal; an unknown piece id scores 0 and any other illegal
/// move gets a meaningless score.
pub fn score(state: &GameState, mv: Move) -> i32 {
    let Some(piece) = state.piece(mv.piece_id) else {
        return 0;
    };
    let (tx, ty) = (mv.to_x, mv.to_y);
    let mut score = 0i32;

    if let Some(target) = state.piece_at(tx, ty) {
        if target.side != piece.side {
            score += CAPTURE_MULTIPLIER * target.kind.value();
        }
    }

    if let Some(enemy) = state.general(piece.side.other()) {
        if manhattan(tx, ty, enemy.x, enemy.y) < piece.distance_to(enemy.x, enemy.y) {
            score += APPROACH_BONUS;
        }
        let attacker = matches!(
            piece.kind,
            PieceKind::Chariot | PieceKind::Cannon | PieceKind::Horse
        );
        if attacker && (tx == enemy.x || ty == enemy.y) {
            score += LINE_BONUS;
        }
    }

    // Counted on the pre-move board, so a moving general or chariot counts itself.
    let escorts = state
        .pieces()
        .iter()
        .filter(|p| p.side == piece.side)
        .filter(|p| matches!(p.kind, PieceKind::General | PieceKind::Chariot))
        .filter(|p| p.distance_to(tx, ty) <= ESCORT_RADIUS)
        .count() as i32;
    score += ESCORT_BONUS * escorts;

    if (3..=5).contains(&tx) {
        score += CENTER_BONUS;
    }

    if piece.kind == PieceKind::Soldier && !piece.side.owns_rank(ty) {
        score += CROSSING_BONUS;
    }

    score
}
