use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use xiangqi_core::{Piece, PieceKind, SearchResult, Side};

static NEXT: AtomicUsize = AtomicUsize::new(0);

fn scratch() -> PathBuf {
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("xiangqi_service_{}_{}", std::process::id(), n))
        .join("game.json")
}

fn seeded_service(path: &PathBuf, seed: u64) -> GameService {
    let store = SnapshotStore::new(path);
    GameService::with_engine(store, HeuristicEngine::seeded(seed)).expect("open service")
}

/// Never finds a move.
struct Passive;

impl Engine for Passive {
    fn search(&mut self, _state: &GameState) -> SearchResult {
        SearchResult {
            best_move: None,
            score: 0,
            candidates: 0,
        }
    }

    fn name(&self) -> &str {
        "Passive"
    }
}

/// Red chariot on an open file facing the black general.
fn chariot_mates() -> GameState {
    GameState::from_pieces(
        vec![
            Piece::new(PieceKind::General, Side::Red, 3, 9),
            Piece::new(PieceKind::General, Side::Black, 4, 0),
            Piece::new(PieceKind::Chariot, Side::Red, 4, 5),
        ],
        Side::Red,
    )
}

#[test]
fn test_no_game_yet() {
    let path = scratch();
    let mut service = seeded_service(&path, 1);

    assert!(matches!(service.state(), Err(ServiceError::NoGame)));
    assert!(matches!(service.legal_moves(), Err(ServiceError::NoGame)));
    assert!(matches!(
        service.play(Move::new(11, 0, 5)),
        Err(ServiceError::NoGame)
    ));
    assert!(!path.exists());
}

#[test]
fn test_new_game_is_persisted() {
    let path = scratch();
    let mut service = seeded_service(&path, 1);

    let state = service.new_game().expect("new game").clone();
    assert_eq!(state, GameState::startpos());
    assert_eq!(service.legal_moves().expect("moves").len(), 44);

    let stored = SnapshotStore::new(&path).load().expect("load");
    assert_eq!(stored, Some(state));
}

#[test]
fn test_play_runs_player_and_reply() {
    let path = scratch();
    let mut service = seeded_service(&path, 7);
    service.new_game().expect("new game");

    let mv = Move::new(11, 0, 5);
    let outcome = service.play(mv).expect("legal move");
    assert_eq!(outcome.player_move, mv);

    let reply = outcome.reply.expect("black has moves");
    let after_player = GameState::startpos().apply(mv).expect("legal");
    assert!(after_player.is_legal(reply));
    assert_eq!(after_player.apply(reply).as_ref(), Ok(&outcome.state));

    assert_eq!(outcome.state.current_turn(), Side::Red);
    assert_eq!(service.state().expect("game"), &outcome.state);

    let stored = SnapshotStore::new(&path).load().expect("load");
    assert_eq!(stored, Some(outcome.state));
}

#[test]
fn test_illegal_move_leaves_game_untouched() {
    let path = scratch();
    let mut service = seeded_service(&path, 7);
    service.new_game().expect("new game");

    // Soldier two steps at once.
    let mv = Move::new(11, 0, 4);
    assert!(matches!(service.play(mv), Err(ServiceError::IllegalMove(m)) if m == mv));
    // Black piece on red's turn.
    assert!(matches!(
        service.play(Move::new(27, 0, 4)),
        Err(ServiceError::IllegalMove(_))
    ));
    // Out of range reference.
    assert!(matches!(
        service.play(Move::new(99, 0, 0)),
        Err(ServiceError::IllegalMove(_))
    ));

    assert_eq!(service.state().expect("game"), &GameState::startpos());
    let stored = SnapshotStore::new(&path).load().expect("load");
    assert_eq!(stored, Some(GameState::startpos()));
}

#[test]
fn test_capturing_general_ends_game_without_reply() {
    let path = scratch();
    SnapshotStore::new(&path)
        .save(&chariot_mates())
        .expect("seed snapshot");
    let mut service = seeded_service(&path, 3);

    let outcome = service.play(Move::new(2, 4, 0)).expect("capture");
    assert_eq!(outcome.reply, None);
    assert!(outcome.state.is_game_over());
    assert_eq!(outcome.state.winner(), Some(Side::Red));

    assert!(matches!(
        service.play(Move::new(0, 3, 8)),
        Err(ServiceError::GameOver)
    ));

    // A reopened service sees the finished game too.
    let mut reopened = seeded_service(&path, 3);
    assert!(reopened.state().expect("game").is_game_over());
    assert!(matches!(
        reopened.play(Move::new(0, 3, 8)),
        Err(ServiceError::GameOver)
    ));
}

#[test]
fn test_new_game_replaces_finished_one() {
    let path = scratch();
    SnapshotStore::new(&path)
        .save(&chariot_mates())
        .expect("seed snapshot");
    let mut service = seeded_service(&path, 3);
    service.play(Move::new(2, 4, 0)).expect("capture");

    service.new_game().expect("new game");
    assert!(!service.state().expect("game").is_game_over());
    assert!(service.play(Move::new(11, 0, 5)).is_ok());
}

#[test]
fn test_engine_without_move_passes_turn() {
    let path = scratch();
    let mut service =
        GameService::with_engine(SnapshotStore::new(&path), Passive).expect("open service");
    assert_eq!(service.engine_name(), "Passive");
    service.new_game().expect("new game");

    let outcome = service.play(Move::new(11, 0, 5)).expect("legal move");
    assert_eq!(outcome.reply, None);
    assert_eq!(outcome.state.current_turn(), Side::Black);
    assert!(!outcome.state.is_game_over());
}

#[test]
fn test_same_seed_same_replies() {
    let moves = [Move::new(11, 0, 5), Move::new(13, 4, 5), Move::new(15, 8, 5)];
    let play_out = |seed: u64| {
        let path = scratch();
        let mut service = seeded_service(&path, seed);
        service.new_game().expect("new game");
        let mut replies = Vec::new();
        for mv in moves {
            // Replies may move or capture soldiers, so skip what became illegal.
            if let Ok(outcome) = service.play(mv) {
                replies.push(outcome.reply);
            }
        }
        (replies, service.state().expect("game").clone())
    };

    assert_eq!(play_out(11), play_out(11));
}

#[test]
fn test_open_from_config_restores_game() {
    let path = scratch();
    let config = ServiceConfig {
        snapshot_path: path.clone(),
        seed: Some(5),
        top_candidates: 1,
        ..ServiceConfig::default()
    };

    let mut first = GameService::open(&config).expect("open");
    assert_eq!(first.engine_name(), "Heuristic v1.0");
    first.new_game().expect("new game");
    let outcome = first.play(Move::new(9, 4, 7)).expect("central cannon");

    let second = GameService::open(&config).expect("reopen");
    assert_eq!(second.state().expect("game"), &outcome.state);
}
