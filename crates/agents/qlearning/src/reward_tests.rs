use super::*;
use std::collections::HashSet;

const EPS: f64 = 1e-9;

#[test]
fn start_position_is_balanced() {
    let b = Board::start();
    assert!(evaluate_position(&b, Color::White).abs() < EPS);
    assert!(evaluate_position(&b, Color::Black).abs() < EPS);
}

#[test]
fn evaluation_is_antisymmetric_in_perspective() {
    let b = Board::from_fen("r3k/5/1B3/5/R3K w");
    let white = evaluate_position(&b, Color::White);
    let black = evaluate_position(&b, Color::Black);
    assert!((white + black).abs() < EPS);
}

#[test]
fn center_squares_are_worth_more() {
    // Rook on b3 sits inside the central 3x3: 5 * 1.2
    let b = Board::from_fen("4k/5/1R3/5/4K w");
    assert!((evaluate_position(&b, Color::White) - 6.0).abs() < EPS);

    // Same rook on a1 is worth its plain weight
    let b = Board::from_fen("4k/5/5/5/R3K w");
    assert!((evaluate_position(&b, Color::White) - 5.0).abs() < EPS);
}

#[test]
fn geometrically_invalid_action_is_heavily_penalized() {
    let b = Board::start();
    let mut seen = HashSet::new();
    // Rook cannot jump to the far corner
    let r = shaped_reward(&b, Move::new(1, 24), &b, Color::White, &mut seen);
    assert_eq!(r, ILLEGAL_MOVE_PENALTY);
    // The illegal branch returns before touching the visited set
    assert!(seen.is_empty());
}

#[test]
fn null_moves_are_penalized() {
    // Ke1-e2 changes nothing positionally: king weight is zero and no
    // material moves.
    let old = Board::from_fen("r3k/5/5/5/R3K w");
    let mut new = old.clone();
    let action = Move::new(4, 9);
    assert!(new.apply_move(action));

    let mut seen = HashSet::new();
    let r = shaped_reward(&old, action, &new, Color::White, &mut seen);
    assert!((r - NULL_MOVE_PENALTY).abs() < EPS);
}

#[test]
fn revisiting_a_position_costs_extra() {
    let old = Board::from_fen("r3k/5/5/5/R3K w");
    let mut new = old.clone();
    let action = Move::new(4, 9);
    assert!(new.apply_move(action));

    let mut seen = HashSet::new();
    let first = shaped_reward(&old, action, &new, Color::White, &mut seen);
    let second = shaped_reward(&old, action, &new, Color::White, &mut seen);
    assert!((second - (first + REPEAT_STATE_PENALTY)).abs() < EPS);
}

#[test]
fn winning_move_earns_the_terminal_bonus() {
    let old = Board::from_fen("k4/2K2/5/5/4R w");
    let mut new = old.clone();
    let action = Move::new(4, 0); // back-rank mate
    assert!(new.apply_move(action));
    assert_eq!(new.outcome(), Some(Outcome::Winner(Color::White)));

    // No positional change (rook stays off-center), so the shaped reward
    // is the null-move penalty plus the win bonus.
    let mut seen = HashSet::new();
    let r = shaped_reward(&old, action, &new, Color::White, &mut seen);
    assert!((r - (WIN_BONUS + NULL_MOVE_PENALTY)).abs() < EPS);

    // The same transition seen from the losing side
    let mut seen = HashSet::new();
    let r = shaped_reward(&old, action, &new, Color::Black, &mut seen);
    assert!((r - (-WIN_BONUS + NULL_MOVE_PENALTY)).abs() < EPS);
}

#[test]
fn capturing_material_is_rewarded() {
    // Rxa5 wins the black rook: +5 from white's perspective.
    let old = Board::from_fen("r3k/5/5/5/R3K w");
    let mut new = old.clone();
    let action = Move::new(0, 20);
    assert!(new.apply_move(action));

    let mut seen = HashSet::new();
    let r = shaped_reward(&old, action, &new, Color::White, &mut seen);
    assert!((r - 5.0).abs() < EPS);
}
