//! Match runner for playing games between agents

use minichess_core::{Agent, Board, Color, Outcome};
use serde::{Deserialize, Serialize};

use crate::config::MatchSettings;

/// Result of a single game, from white's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games), from the first agent's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first agent's perspective (1 per win, 0.5 per draw).
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Runs matches between two agents.
pub struct MatchRunner {
    config: MatchSettings,
}

impl MatchRunner {
    pub fn new(config: MatchSettings) -> Self {
        Self { config }
    }

    /// Run a match between two agents.
    ///
    /// Returns the result from `agent1`'s perspective.
    pub fn run_match(&self, agent1: &mut dyn Agent, agent2: &mut dyn Agent) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let agent1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if agent1_white {
                self.play_game(agent1, agent2)
            } else {
                // Flip result since agent1 is black
                match self.play_game(agent2, agent1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if agent1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returning the result from white's perspective.
    ///
    /// Terminal detection belongs to the rules engine: the loop just asks
    /// agents for moves and reads `Board::outcome` afterwards. A ply cap
    /// and a bail-out on a stuck agent keep the loop bounded either way.
    fn play_game(&self, white: &mut dyn Agent, black: &mut dyn Agent) -> GameResult {
        let mut board = Board::start();
        white.new_game();
        black.new_game();

        for _ply in 0..self.config.max_plies {
            if board.is_game_over() {
                break;
            }

            let mv = match board.side_to_move {
                Color::White => white.pick_move(&board),
                Color::Black => black.pick_move(&board),
            };

            match mv {
                Some(mv) => {
                    if !board.apply_move(mv) {
                        // Agent offered an illegal move; score what stands.
                        break;
                    }
                }
                None => break,
            }
        }

        match board.outcome() {
            Some(Outcome::Winner(Color::White)) => GameResult::Win,
            Some(Outcome::Winner(Color::Black)) => GameResult::Loss,
            // Draw, ply cap reached, or a stuck agent
            _ => GameResult::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_agent::MinimaxAgent;
    use random_agent::RandomAgent;

    #[test]
    fn random_self_play_completes() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();

        let config = MatchSettings {
            games: 4,
            max_plies: 200,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut agent1, &mut agent2);
        assert_eq!(result.total_games(), 4);
    }

    #[test]
    fn minimax_beats_or_draws_quickly_against_itself() {
        let mut agent1 = MinimaxAgent::new(1);
        let mut agent2 = MinimaxAgent::new(1);

        let config = MatchSettings {
            games: 2,
            max_plies: 120,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut agent1, &mut agent2);
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn score_is_symmetric_for_even_results() {
        let result = MatchResult {
            wins: 3,
            losses: 3,
            draws: 4,
        };
        assert_eq!(result.total_games(), 10);
        assert!((result.score() - 0.5).abs() < 1e-9);
    }
}
