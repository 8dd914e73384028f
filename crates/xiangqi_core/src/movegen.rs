use crate::{board::GameState, rules::is_legal, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// Order is stable: ascending piece index, then x, then y.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    let mover = state.current_turn();

    for (piece_id, piece) in state.pieces().iter().enumerate() {
        if piece.side != mover {
            continue;
        }
        // Probe every cell; the checker owns all geometry.
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                let mv = Move::new(piece_id, x, y);
                if is_legal(state, mv) {
                    out.push(mv);
                }
            }
        }
    }
}

/// Legal moves for a single piece, in x-then-y order.
pub fn piece_moves(state: &GameState, piece_id: usize) -> Vec<Move> {
    let mut out = Vec::new();
    if state.piece(piece_id).is_none() {
        return out;
    }
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            let mv = Move::new(piece_id, x, y);
            if is_legal(state, mv) {
                out.push(mv);
            }
        }
    }
    out
}
