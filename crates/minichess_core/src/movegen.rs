use crate::{board::Board, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. Enumeration is row-major over source squares, then row-major over
/// destinations; agents that break ties by first-found rely on this order.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();

    let mut scratch = board.clone();
    for from in 0..NUM_SQUARES {
        for to in 0..NUM_SQUARES {
            if !board.is_valid_move(from, to) {
                continue;
            }
            // Play the move on the scratch copy and discard it if the
            // mover's own king ends up attacked.
            let moved = scratch.piece_at(from);
            let captured = scratch.piece_at(to);
            scratch.set_piece(to, moved);
            scratch.set_piece(from, None);
            let exposed = scratch.in_check(board.side_to_move);
            scratch.set_piece(from, moved);
            scratch.set_piece(to, captured);

            if !exposed {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
