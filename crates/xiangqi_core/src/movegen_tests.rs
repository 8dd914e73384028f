use super::*;

/// Black to move with every black piece frozen: the general is boxed in by
/// its own horses and every horse leg is covered by a red soldier.
fn frozen_black() -> GameState {
    let pieces = vec![
        Piece::new(PieceKind::General, Side::Red, 4, 9),
        Piece::new(PieceKind::General, Side::Black, 3, 0),
        Piece::new(PieceKind::Horse, Side::Black, 4, 0),
        Piece::new(PieceKind::Horse, Side::Black, 3, 1),
        Piece::new(PieceKind::Soldier, Side::Red, 5, 0),
        Piece::new(PieceKind::Soldier, Side::Red, 4, 1),
        Piece::new(PieceKind::Soldier, Side::Red, 2, 1),
        Piece::new(PieceKind::Soldier, Side::Red, 3, 2),
    ];
    GameState::from_pieces(pieces, Side::Black)
}

#[test]
fn test_startpos_moves() {
    let state = GameState::startpos();
    let moves = legal_moves(&state);
    // Starting position has 44 legal moves
    assert_eq!(moves.len(), 44);
}

#[test]
fn test_black_reply_count() {
    let state = GameState::startpos()
        .apply(Move::new(11, 0, 5))
        .expect("soldier advance");
    assert_eq!(legal_moves(&state).len(), 44);
}

#[test]
fn test_moves_belong_to_side_to_move() {
    let state = GameState::startpos()
        .apply(Move::new(9, 4, 7))
        .expect("central cannon");
    for mv in legal_moves(&state) {
        let piece = state.piece(mv.piece_id).expect("generated id exists");
        assert_eq!(piece.side, state.current_turn());
        assert!(state.is_legal(mv));
    }
}

#[test]
fn test_generation_order() {
    let moves = legal_moves(&GameState::startpos());
    let keys: Vec<_> = moves.iter().map(|m| (m.piece_id, m.to_x, m.to_y)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(moves.first(), Some(&Move::new(0, 4, 8)));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let state = GameState::startpos();
    let mut buf = vec![Move::new(99, 0, 0)];
    legal_moves_into(&state, &mut buf);
    assert_eq!(buf, legal_moves(&state));
}

#[test]
fn test_piece_moves() {
    let state = GameState::startpos();
    // Left cannon: four up the file, the capture on (1,0), one back, one
    // left and five along rank 7.
    assert_eq!(piece_moves(&state, 9).len(), 12);
    assert_eq!(piece_moves(&state, 11), vec![Move::new(11, 0, 5)]);
    assert!(piece_moves(&state, 16).is_empty());
    assert!(piece_moves(&state, 100).is_empty());
}

#[test]
fn test_frozen_side_has_no_moves() {
    let state = frozen_black();
    assert!(!state.is_game_over());
    assert!(legal_moves(&state).is_empty());
}

#[test]
fn test_perft_shallow() {
    let state = GameState::startpos();
    assert_eq!(perft(&state, 0), 1);
    assert_eq!(perft(&state, 1), 44);

    let by_hand: u64 = legal_moves(&state)
        .into_iter()
        .map(|mv| legal_moves(&state.apply(mv).expect("generated move")).len() as u64)
        .sum();
    assert_eq!(perft(&state, 2), by_hand);
}
