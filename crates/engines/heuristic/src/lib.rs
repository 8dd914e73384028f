//! Heuristic Xiangqi Engine
//!
//! Scores every legal move with a static one-ply heuristic and plays one of
//! the best few at random. No search beyond the current ply.
//!
//! The random source is a type parameter so tests can pin it with a seed.

mod eval;


use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use xiangqi_core::{legal_moves, Engine, GameState, Move, SearchResult};

pub use eval::score;

/// How many top-ranked moves the selector draws from by default.
pub const DEFAULT_TOP_CANDIDATES: usize = 3;

/// Legal moves paired with their scores, best first.
///
/// The sort is stable, so equal scores keep generation order.
pub fn rank_moves(state: &GameState) -> Vec<(Move, i32)> {
    let mut ranked: Vec<(Move, i32)> = legal_moves(state)
        .into_iter()
        .map(|mv| (mv, score(state, mv)))
        .collect();
    ranked.sort_by_key(|&(_, s)| Reverse(s));
    ranked
}

/// Pick uniformly among the `top` best-scoring moves.
///
/// Returns the move with its score, or `None` when the side to move has no
/// legal move. A `top` of zero is treated as one.
pub fn select_from_top<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
    top: usize,
) -> Option<(Move, i32)> {
    let ranked = rank_moves(state);
    let top = top.max(1).min(ranked.len());
    ranked[..top].choose(rng).copied()
}

/// Pick a move for the side to move among the three best-scoring moves.
pub fn select_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Move> {
    select_from_top(state, rng, DEFAULT_TOP_CANDIDATES).map(|(mv, _)| mv)
}

/// Automated opponent built on [`rank_moves`].
///
/// This engine provides:
/// - Material-weighted capture scoring
/// - Pressure on the enemy general and escort of friendly heavy pieces
/// - Center and river-crossing bonuses
/// - Random choice among the best `top_candidates` moves
#[derive(Debug, Clone)]
pub struct HeuristicEngine<R = StdRng> {
    rng: R,
    top_candidates: usize,
}

impl HeuristicEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed seed; identical seeds make identical choices.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HeuristicEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> HeuristicEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            top_candidates: DEFAULT_TOP_CANDIDATES,
        }
    }

    pub fn with_top_candidates(mut self, top: usize) -> Self {
        self.top_candidates = top.max(1);
        self
    }

    pub fn top_candidates(&self) -> usize {
        self.top_candidates
    }

    /// Pick a move for the side to move, or `None` if it has none.
    pub fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.search(state).best_move
    }
}

impl<R: Rng + Send> Engine for HeuristicEngine<R> {
    fn search(&mut self, state: &GameState) -> SearchResult {
        let ranked = rank_moves(state);
        let candidates = ranked.len();
        let top = self.top_candidates.min(candidates);
        let chosen = ranked[..top].choose(&mut self.rng).copied();

        match chosen {
            Some((mv, score)) => {
                tracing::debug!(
                    candidates,
                    best = ranked[0].1,
                    %mv,
                    score,
                    "heuristic move selected"
                );
                SearchResult {
                    best_move: Some(mv),
                    score,
                    candidates,
                }
            }
            None => {
                tracing::debug!(side = %state.current_turn(), "no legal move available");
                SearchResult {
                    best_move: None,
                    score: 0,
                    candidates: 0,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }
}
