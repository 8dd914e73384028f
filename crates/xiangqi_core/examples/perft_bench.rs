//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p xiangqi_core -- [depth] [snapshot.json]
//!
//! Examples:
//!   # Default: depth 3 over the built-in positions
//!   cargo flamegraph --example perft_bench -p xiangqi_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p xiangqi_core -- 4
//!
//!   # Custom depth and a saved game snapshot
//!   cargo flamegraph --example perft_bench -p xiangqi_core -- 3 xiangqi_game.json

use std::env;
use std::time::{Duration, Instant};
use xiangqi_core::{perft, GameState, Move, Piece, PieceKind, Side};

/// Built-in positions: the opening, an early middlegame and a sparse ending.
fn test_positions() -> Vec<(&'static str, GameState)> {
    let opening = GameState::startpos();

    let mut middlegame = opening.clone();
    for mv in [
        Move::new(9, 4, 7),
        Move::new(26, 4, 2),
        Move::new(5, 2, 7),
        Move::new(22, 6, 2),
    ] {
        match middlegame.apply(mv) {
            Ok(next) => middlegame = next,
            Err(e) => {
                eprintln!("skipping middlegame setup: {e}");
                break;
            }
        }
    }

    let ending = GameState::from_pieces(
        vec![
            Piece::new(PieceKind::General, Side::Red, 4, 9),
            Piece::new(PieceKind::General, Side::Black, 3, 0),
            Piece::new(PieceKind::Chariot, Side::Red, 0, 5),
            Piece::new(PieceKind::Horse, Side::Red, 6, 6),
            Piece::new(PieceKind::Cannon, Side::Black, 4, 2),
            Piece::new(PieceKind::Soldier, Side::Black, 5, 6),
        ],
        Side::Red,
    );

    vec![
        ("Starting position", opening),
        ("Central cannons", middlegame),
        ("Chariot ending", ending),
    ]
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    // If a snapshot is provided, use single position mode
    if let Some(path) = args.get(2) {
        match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameState::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(state) => run_single_position(path, &state, depth),
            Err(e) => eprintln!("cannot load {path}: {e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(name: &str, state: &GameState, depth: u8) {
    println!("Position: {name}");
    println!("{state}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(state, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(state, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, state) in test_positions() {
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
