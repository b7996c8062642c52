//! Random Move Agent
//!
//! A simple agent that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Testing infrastructure before training the Q-learning agent
//! - Baseline comparisons (any real agent should easily beat this)
//! - Stress testing move generation

use minichess_core::{legal_moves_into, Agent, Board, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An agent that plays random legal moves.
///
/// Provides no evaluation at all; it simply picks uniformly among the
/// legal moves, making it the simplest possible baseline.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn pick_move(&mut self, board: &Board) -> Option<Move> {
        let mut moves = Vec::with_capacity(32);
        legal_moves_into(board, &mut moves);
        moves.choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
