use super::*;
use crate::board::Board;

#[test]
fn start_position_move_count() {
    let b = Board::start();
    let moves = legal_moves(&b);
    // 12 geometric moves; Kb2 walks into the black rook's file.
    assert_eq!(moves.len(), 11);
}

#[test]
fn start_position_first_move_is_rook_to_a1() {
    // Enumeration is row-major by source, then destination.
    let b = Board::start();
    let moves = legal_moves(&b);
    assert_eq!(moves[0], Move::new(1, 0));
}

#[test]
fn enumeration_order_is_deterministic() {
    let b = Board::start();
    let moves = legal_moves(&b);
    let mut sorted = moves.clone();
    sorted.sort();
    assert_eq!(moves, sorted);
    assert_eq!(moves, legal_moves(&b));
}

#[test]
fn no_legal_move_leaves_own_king_in_check() {
    for fen in [
        "1rkb1/5/5/5/1RKB1 w",
        "1rkb1/5/5/5/1RKB1 b",
        "k3r/5/5/5/2R1K w",
        "1r2k/5/1R3/1K3/5 w",
    ] {
        let b = Board::from_fen(fen);
        for mv in legal_moves(&b) {
            let mut scratch = b.clone();
            let moved = scratch.piece_at(mv.from);
            scratch.set_piece(mv.to, moved);
            scratch.set_piece(mv.from, None);
            assert!(
                !scratch.in_check(b.side_to_move),
                "{fen}: {mv:?} leaves the mover in check"
            );
        }
    }
}

#[test]
fn every_legal_move_changes_the_board() {
    let b = Board::start();
    for mv in legal_moves(&b) {
        let mut applied = b.clone();
        assert!(applied.apply_move(mv));
        assert_ne!(applied.board, b.board, "{mv:?} did not move anything");
    }
}

#[test]
fn buffer_reuse_matches_fresh_allocation() {
    let b = Board::start();
    let mut buf = vec![Move::new(0, 0); 3]; // stale contents must be cleared
    legal_moves_into(&b, &mut buf);
    assert_eq!(buf, legal_moves(&b));
}

#[test]
fn no_moves_when_checkmated() {
    // Mated corner king: rook gives check along the a-file, the white
    // king covers the escape squares.
    let b = Board::from_fen("k4/2K2/5/5/R4 b");
    assert!(legal_moves(&b).is_empty());
    assert!(b.in_check(Color::Black));
}
