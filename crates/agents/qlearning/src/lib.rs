//! Q-Learning Agent
//!
//! Tabular off-policy control over canonical position keys. The table
//! maps `(state key, move)` to a value estimate, updated after every
//! agent ply with the one-step temporal-difference rule. Exploration is
//! epsilon-greedy; the training driver owns the decay schedule.

mod reward;
mod table;

use std::collections::HashSet;
use std::path::Path;

use minichess_core::{legal_moves, Agent, Board, Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

pub use reward::{
    evaluate_position, shaped_reward, ILLEGAL_MOVE_PENALTY, NULL_MOVE_PENALTY,
    REPEAT_STATE_PENALTY, WIN_BONUS,
};
pub use table::{QTable, TableError};

/// Tabular Q-learning agent.
///
/// Owns the value table (the only state that outlives a single game) and
/// the per-episode visited-position set used by reward shaping.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    /// Learning rate.
    pub alpha: f64,
    /// Discount factor.
    pub gamma: f64,
    /// Exploration rate; mutable so drivers can decay it between episodes.
    pub epsilon: f64,
    table: QTable,
    seen_states: HashSet<String>,
}

impl Default for QLearningAgent {
    fn default() -> Self {
        Self::new(0.1, 0.99, 0.3)
    }
}

impl QLearningAgent {
    pub fn new(alpha: f64, gamma: f64, epsilon: f64) -> Self {
        Self::with_table(alpha, gamma, epsilon, QTable::new())
    }

    /// Resume from a previously trained table.
    pub fn with_table(alpha: f64, gamma: f64, epsilon: f64, table: QTable) -> Self {
        Self {
            alpha,
            gamma,
            epsilon,
            table,
            seen_states: HashSet::new(),
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut QTable {
        &mut self.table
    }

    /// Forget the positions visited in the current episode.
    pub fn start_episode(&mut self) {
        self.seen_states.clear();
    }

    /// Epsilon-greedy action selection over the legal moves.
    ///
    /// Greedy ties are broken by a uniform random pick among the
    /// maximizers, not by enumeration order; with an untrained table this
    /// keeps early episodes from replaying one canned game.
    pub fn choose_action(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        let mut rng = rand::thread_rng();
        if rng.gen::<f64>() < self.epsilon {
            return moves.choose(&mut rng).copied();
        }

        let state = board.position_key();
        let max_q = self.table.max_over(&state, &moves);
        let best: Vec<Move> = moves
            .into_iter()
            .filter(|&mv| self.table.get(&state, mv) == max_q)
            .collect();
        best.choose(&mut rng).copied()
    }

    /// One-step tabular update:
    /// `Q[s,a] += alpha * (reward + gamma * max_a' Q[s',a'] - Q[s,a])`,
    /// where the future max ranges over `new`'s legal moves (0.0 if none).
    pub fn learn(&mut self, old: &Board, action: Move, reward: f64, new: &Board) {
        let old_state = old.position_key();
        let new_state = new.position_key();

        let future = self.table.max_over(&new_state, &legal_moves(new));
        let old_q = self.table.get(&old_state, action);
        let updated = old_q + self.alpha * (reward + self.gamma * future - old_q);
        self.table.set(&old_state, action, updated);
    }

    /// Shaped reward for the agent's last ply; records the resulting
    /// position in the episode's visited set.
    pub fn reward(&mut self, old: &Board, action: Move, new: &Board, agent_color: Color) -> f64 {
        shaped_reward(old, action, new, agent_color, &mut self.seen_states)
    }

    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        self.table.save(path)
    }

    /// Replace the current table with one loaded from disk.
    pub fn load_table(&mut self, path: &Path) -> Result<(), TableError> {
        self.table = QTable::load(path)?;
        Ok(())
    }
}

impl Agent for QLearningAgent {
    fn pick_move(&mut self, board: &Board) -> Option<Move> {
        self.choose_action(board)
    }

    fn name(&self) -> &str {
        "Q-Learner"
    }

    fn new_game(&mut self) {
        self.start_episode();
    }
}
