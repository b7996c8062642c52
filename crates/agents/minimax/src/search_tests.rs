use super::*;
use crate::{MinimaxAgent, WIN_SCORE};
use minichess_core::{Board, Color, Move};

#[test]
fn depth_zero_returns_static_evaluation_and_no_move() {
    let b = Board::start();
    let mut nodes = 0;
    let (score, mv) = minimax(&b, 0, true, Color::White, &mut nodes);
    assert_eq!(score, evaluate(&b, Color::White));
    assert_eq!(mv, None);
    assert_eq!(nodes, 0);
}

#[test]
fn depth_one_grabs_the_hanging_rook() {
    // From the start position the only capture available to white is
    // Rxb5, worth +5 at the horizon.
    let b = Board::start();
    let mut nodes = 0;
    let (score, mv) = minimax(&b, 1, true, Color::White, &mut nodes);
    assert_eq!(mv, Some(Move::new(1, 21)));
    assert_eq!(score, 5);
    assert!(nodes > 0);
}

#[test]
fn finds_mate_in_one() {
    // Ra1 is the unique mating move (Re5 would leave a4 free).
    let b = Board::from_fen("k4/2K2/5/5/4R w");
    let mut nodes = 0;
    let (score, mv) = minimax(&b, 2, true, Color::White, &mut nodes);
    assert_eq!(mv, Some(Move::new(4, 0)));
    assert_eq!(score, WIN_SCORE);
}

#[test]
fn ties_break_by_enumeration_order() {
    // No captures or mates anywhere at depth 1: every move scores the
    // same, so the first enumerated move must win the tie.
    let b = Board::from_fen("r3k/5/5/5/1R2K w");
    let mut nodes = 0;
    let (score, mv) = minimax(&b, 1, true, Color::White, &mut nodes);
    assert_eq!(score, 0);
    assert_eq!(mv, Some(Move::new(1, 0)));
}

#[test]
fn minimizing_side_prefers_our_worst_outcome() {
    // Black to move with our color fixed as white: black's best reply
    // takes the hanging white rook, worth -5 to us.
    let b = Board::from_fen("1rkb1/5/5/5/1RKB1 b");
    let mut nodes = 0;
    let (score, mv) = minimax(&b, 1, false, Color::White, &mut nodes);
    assert_eq!(mv, Some(Move::new(21, 1)));
    assert_eq!(score, -5);
}

#[test]
fn agent_infers_color_and_selects_a_move() {
    let mut agent = MinimaxAgent::new(2);
    let b = Board::start();
    let mv = agent.select_move(&b);
    assert!(mv.is_some());
    assert!(agent.nodes() > 0);
    assert!(minichess_core::legal_moves(&b).contains(&mv.unwrap()));
}

#[test]
fn no_legal_moves_yields_none() {
    // Mated corner king: black has nothing to play.
    let b = Board::from_fen("k4/2K2/5/5/R4 b");
    let mut agent = MinimaxAgent::new(3);
    assert_eq!(agent.select_move(&b), None);
}
