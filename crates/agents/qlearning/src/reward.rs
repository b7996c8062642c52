//! Reward shaping for self-play training
//!
//! The raw win/loss signal is far too sparse for tabular learning on this
//! state space, so each ply gets a shaped reward: positional progress plus
//! penalties for shuffling and no-effect moves, with the terminal bonus
//! layered on top.

use std::collections::HashSet;

use minichess_core::{file_of, rank_of, sq, Board, Color, Move, Outcome, PieceKind, NUM_SQUARES};

/// Reward for an action that was not even geometrically valid.
pub const ILLEGAL_MOVE_PENALTY: f64 = -5.0;
/// Penalty for reaching a position already visited this episode.
pub const REPEAT_STATE_PENALTY: f64 = -1.0;
/// Penalty for a move that leaves the positional evaluation unchanged.
pub const NULL_MOVE_PENALTY: f64 = -1.0;
/// Terminal bonus magnitude: +/- on win/loss, nothing on a draw.
pub const WIN_BONUS: f64 = 100.0;

/// Positional deltas smaller than this count as "did nothing".
const NULL_MOVE_EPSILON: f64 = 0.01;

fn piece_weight(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::King => 0.0,
        PieceKind::Rook => 5.0,
        PieceKind::Bishop => 3.0,
    }
}

/// Positional evaluation from `perspective`'s side of the board.
///
/// Each piece contributes its weight scaled by a multiplier: +0.2 for
/// standing inside the central 3x3, and for kings +0.1 per adjacent
/// friendly piece. Own pieces count positive, the opponent's negative.
pub fn evaluate_position(board: &Board, perspective: Color) -> f64 {
    let mut score = 0.0;

    for s in 0..NUM_SQUARES {
        let pc = match board.piece_at(s) {
            Some(p) => p,
            None => continue,
        };
        let x = file_of(s);
        let y = rank_of(s);

        let mut multiplier = 1.0;
        if (1..=3).contains(&x) && (1..=3).contains(&y) {
            multiplier += 0.2;
        }
        if pc.kind == PieceKind::King {
            for (dx, dy) in [
                (0, 1),
                (1, 0),
                (0, -1),
                (-1, 0),
                (1, 1),
                (-1, 1),
                (1, -1),
                (-1, -1),
            ] {
                if let Some(n) = sq(x + dx, y + dy) {
                    if let Some(neighbor) = board.piece_at(n) {
                        if neighbor.color == pc.color {
                            multiplier += 0.1;
                        }
                    }
                }
            }
        }

        let value = piece_weight(pc.kind) * multiplier;
        score += if pc.color == perspective { value } else { -value };
    }

    score
}

/// Composite shaped reward for one agent ply, from `old` (before the
/// action) to `new` (after the rules engine applied it).
///
/// `seen_states` is the episode's visited-position set and is updated as
/// a side effect; callers reset it at the start of every episode.
pub fn shaped_reward(
    old: &Board,
    action: Move,
    new: &Board,
    agent_color: Color,
    seen_states: &mut HashSet<String>,
) -> f64 {
    if !old.is_valid_move(action.from, action.to) {
        return ILLEGAL_MOVE_PENALTY;
    }

    let delta = evaluate_position(new, agent_color) - evaluate_position(old, agent_color);
    let mut reward = delta;

    if !seen_states.insert(new.position_key()) {
        reward += REPEAT_STATE_PENALTY;
    }

    if delta.abs() < NULL_MOVE_EPSILON {
        reward += NULL_MOVE_PENALTY;
    }

    match new.outcome() {
        Some(Outcome::Winner(winner)) => {
            reward += if winner == agent_color {
                WIN_BONUS
            } else {
                -WIN_BONUS
            };
        }
        Some(Outcome::Draw) | None => {}
    }

    reward
}

#[cfg(test)]
#[path = "reward_tests.rs"]
mod reward_tests;
