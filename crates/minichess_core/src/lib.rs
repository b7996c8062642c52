pub mod board;
pub mod movegen;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use board::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Agent trait — implemented by all decision agents (minimax, Q-learning, ...)
// =============================================================================

/// Trait that all move-selecting agents implement.
///
/// Drivers hold `Box<dyn Agent>` and never inspect the concrete agent type:
/// search-based and learning-based agents answer the same question through
/// the same method.
pub trait Agent {
    /// Pick a move for the current side to move, or `None` if no legal move
    /// exists. Must not mutate the board; agents copy before speculating.
    fn pick_move(&mut self, board: &Board) -> Option<Move>;

    /// The agent's display name.
    fn name(&self) -> &str;

    /// Reset internal per-game state (visited positions, counters, ...)
    /// before a new game or training episode.
    fn new_game(&mut self) {}
}
