pub mod board;
pub mod display;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod movegen_tests;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::{check, is_legal, Violation};
pub use snapshot::Snapshot;
pub use types::*;

// =============================================================================
// Engine trait, implemented by automated opponents
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Heuristic score of the chosen move
    pub score: i32,
    /// Number of legal moves considered
    pub candidates: usize,
}

/// Trait that automated opponents implement.
pub trait Engine: Send {
    /// Pick a move for the side to move in `state`.
    fn search(&mut self, state: &GameState) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
