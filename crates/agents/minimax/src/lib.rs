//! Minimax Agent
//!
//! Fixed-depth adversarial search with material-based evaluation.
//! This is the baseline opponent for Q-learning training and matches.

mod eval;
mod search;

use minichess_core::{Agent, Board, Color, Move};

/// Agent that picks moves by exhaustive fixed-depth minimax.
///
/// The maximizing color is fixed at construction or inferred from the
/// first position it is asked about; the search maximizes when that color
/// is to move and minimizes otherwise.
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    depth: u8,
    color: Option<Color>,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            color: None,
            nodes: 0,
        }
    }

    pub fn with_color(depth: u8, color: Color) -> Self {
        Self {
            depth,
            color: Some(color),
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the position and return the chosen move, or `None` when no
    /// legal move exists.
    pub fn select_move(&mut self, board: &Board) -> Option<Move> {
        let color = *self.color.get_or_insert(board.side_to_move);
        self.nodes = 0;

        let maximizing = board.side_to_move == color;
        let (_, mv) = search::minimax(board, self.depth, maximizing, color, &mut self.nodes);
        mv
    }
}

impl Agent for MinimaxAgent {
    fn pick_move(&mut self, board: &Board) -> Option<Move> {
        self.select_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.color = None;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, WIN_SCORE};
pub use search::minimax;
