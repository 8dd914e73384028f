//! Invariant checks over seeded random playouts.
//!
//! Every game is reproducible from its seed; games run in parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use xiangqi_core::{legal_moves, perft, Axis, GameState, Move, PieceKind, Side};

const GAMES: u64 = 48;
const MAX_PLIES: usize = 160;

fn generals(state: &GameState) -> usize {
    state
        .pieces()
        .iter()
        .filter(|p| p.kind == PieceKind::General)
        .count()
}

/// Re-derive the per-kind obstruction rules independently of the checker.
fn check_obstruction(state: &GameState, mv: Move) {
    let piece = state.pieces()[mv.piece_id];
    let capture = state.piece_at(mv.to_x, mv.to_y).is_some();
    match piece.kind {
        PieceKind::Cannon | PieceKind::Chariot => {
            let between = if piece.x == mv.to_x {
                state.pieces_between(Axis::File, piece.x, piece.y, mv.to_y)
            } else {
                state.pieces_between(Axis::Rank, piece.y, piece.x, mv.to_x)
            };
            let expected = if piece.kind == PieceKind::Cannon && capture { 1 } else { 0 };
            assert_eq!(between, expected, "{:?} {mv}", piece.kind);
        }
        PieceKind::Horse => {
            let (dx, dy) = (mv.to_x - piece.x, mv.to_y - piece.y);
            let leg = if dx.abs() == 2 {
                (piece.x + dx.signum(), piece.y)
            } else {
                (piece.x, piece.y + dy.signum())
            };
            assert!(state.piece_at(leg.0, leg.1).is_none(), "horse leg {mv}");
        }
        PieceKind::Soldier => {
            let toward_far_edge = match piece.side {
                Side::Red => mv.to_y <= piece.y,
                Side::Black => mv.to_y >= piece.y,
            };
            assert!(toward_far_edge, "soldier retreat {mv}");
        }
        _ => {}
    }
}

fn play_out(seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::startpos();
    let mut plies = 0;

    while plies < MAX_PLIES && !state.is_game_over() {
        let moves = legal_moves(&state);
        for &mv in &moves {
            assert_eq!(state.pieces()[mv.piece_id].side, state.current_turn());
            check_obstruction(&state, mv);
        }
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };

        let next = state.apply(mv).expect("generated moves apply");
        let removed = state.pieces().len() - next.pieces().len();
        assert!(removed <= 1, "at most one capture per ply");
        assert_ne!(next.current_turn(), state.current_turn());
        assert_eq!(next.is_game_over(), generals(&next) < 2);
        if next.is_game_over() {
            let survivor = next
                .pieces()
                .iter()
                .find(|p| p.kind == PieceKind::General)
                .map(|p| p.side);
            assert_eq!(next.winner(), survivor);
        }
        next.validate().expect("successor keeps invariants");

        let json = next.to_json().expect("serialize");
        assert_eq!(GameState::from_json(&json).expect("parse"), next);

        state = next;
        plies += 1;
    }
    plies
}

#[test]
fn random_playouts_keep_invariants() {
    let plies: usize = (0..GAMES).into_par_iter().map(play_out).sum();
    assert!(plies > 0);
}

#[test]
fn playouts_are_reproducible() {
    assert_eq!(play_out(7), play_out(7));
}

#[test]
fn perft_depth_two_matches_parallel_split() {
    let state = GameState::startpos();
    let split: u64 = legal_moves(&state)
        .par_iter()
        .map(|&mv| perft(&state.apply(mv).expect("legal"), 1))
        .sum();
    assert_eq!(perft(&state, 2), split);
}
