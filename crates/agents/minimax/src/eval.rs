//! Material-based position evaluation

use minichess_core::{Board, Color, Outcome, PieceKind, NUM_SQUARES};

/// Score assigned to a decided game, well above any material sum.
pub const WIN_SCORE: i32 = 10_000;

/// Evaluates the position from `color`'s perspective.
///
/// A decided outcome dominates everything else: won games score
/// `WIN_SCORE`, lost games `-WIN_SCORE`, draws 0. Otherwise the score is
/// the signed material sum.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    match board.outcome() {
        Some(Outcome::Winner(winner)) => {
            return if winner == color { WIN_SCORE } else { -WIN_SCORE };
        }
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    let mut score = 0i32;
    for sq in 0..NUM_SQUARES {
        if let Some(pc) = board.piece_at(sq) {
            let v = piece_value(pc.kind);
            score += if pc.color == color { v } else { -v };
        }
    }
    score
}

/// Material value of a piece. Kings weigh nothing: they never leave the
/// board, so any constant would cancel out of the sum.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 0,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
    }
}
