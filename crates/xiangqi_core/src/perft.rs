use crate::{board::GameState, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all states reachable from `state` in exactly `depth` plies.
/// Finished games are leaves.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    fn inner(state: &GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || state.is_game_over() {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(state, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            if let Ok(next) = state.apply(mv) {
                nodes += inner(&next, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}
