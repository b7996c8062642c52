//! Self-play trainer for the Q-learning agent
//!
//! Each episode plays one full game against a fresh minimax opponent,
//! updating the table after every agent ply. Epsilon decays
//! multiplicatively toward its floor between episodes; every `eval_every`
//! episodes the agent is measured greedily against minimax and a
//! checkpoint is written.

use std::path::PathBuf;

use minichess_core::{Board, Color};
use minimax_agent::MinimaxAgent;
use qlearning_agent::{QLearningAgent, TableError};
use rand::Rng;

use crate::config::{MatchSettings, TrainingConfig};
use crate::match_runner::MatchRunner;
use crate::metrics::{MetricsError, TrainingMetrics};

/// Errors that can occur during training.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("failed to create checkpoint directory {path}: {source}")]
    CheckpointDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to persist Q-table: {0}")]
    Table(#[from] TableError),

    #[error("failed to persist metrics: {0}")]
    Metrics(#[from] MetricsError),
}

/// Drives Q-learning self-play against a minimax opponent.
pub struct Trainer {
    config: TrainingConfig,
    agent: QLearningAgent,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        let agent = QLearningAgent::new(config.alpha, config.gamma, config.epsilon_start);
        Self { config, agent }
    }

    /// Resume training from an existing agent (e.g. a loaded checkpoint).
    pub fn with_agent(config: TrainingConfig, agent: QLearningAgent) -> Self {
        Self { config, agent }
    }

    pub fn agent(&self) -> &QLearningAgent {
        &self.agent
    }

    pub fn into_agent(self) -> QLearningAgent {
        self.agent
    }

    /// Run the configured number of episodes, returning the metrics series.
    pub fn train(&mut self) -> Result<TrainingMetrics, TrainingError> {
        let mut metrics = TrainingMetrics::new();

        for episode in 0..self.config.episodes {
            let agent_color = if rand::thread_rng().gen_bool(0.5) {
                Color::White
            } else {
                Color::Black
            };
            self.run_episode(agent_color);

            // Decay epsilon toward the floor
            self.agent.epsilon =
                (self.agent.epsilon * self.config.epsilon_decay).max(self.config.epsilon_min);

            if self.config.eval_every > 0 && episode % self.config.eval_every == 0 {
                let win_rate = self.evaluate();
                println!(
                    "Episode {}/{}: win rate {:.1}%, epsilon {:.3}",
                    episode,
                    self.config.episodes,
                    win_rate * 100.0,
                    self.agent.epsilon
                );
                metrics.push(episode, win_rate, self.agent.epsilon);
                self.checkpoint(episode, win_rate, &metrics)?;
            }
        }

        Ok(metrics)
    }

    /// One training game: the agent learns from every ply it plays, the
    /// minimax opponent answers for the other side. The rules engine ends
    /// the game; a `None` from either side only happens once it has.
    fn run_episode(&mut self, agent_color: Color) {
        let mut board = Board::start();
        self.agent.start_episode();
        let mut opponent = MinimaxAgent::new(self.config.opponent_depth);

        while !board.is_game_over() {
            if board.side_to_move == agent_color {
                let action = match self.agent.choose_action(&board) {
                    Some(a) => a,
                    None => break,
                };
                let old = board.clone();
                if !board.apply_move(action) {
                    break;
                }
                let reward = self.agent.reward(&old, action, &board, agent_color);
                self.agent.learn(&old, action, reward, &board);
            } else {
                match opponent.select_move(&board) {
                    Some(mv) => {
                        if !board.apply_move(mv) {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    /// Greedy win rate over `eval_games` against a fresh minimax opponent.
    fn evaluate(&mut self) -> f64 {
        let saved_epsilon = self.agent.epsilon;
        self.agent.epsilon = 0.0;

        let runner = MatchRunner::new(MatchSettings {
            games: self.config.eval_games,
            verbose: false,
            ..Default::default()
        });
        let mut opponent = MinimaxAgent::new(self.config.opponent_depth);
        let result = runner.run_match(&mut self.agent, &mut opponent);

        self.agent.epsilon = saved_epsilon;
        result.wins as f64 / result.total_games().max(1) as f64
    }

    fn checkpoint(
        &self,
        episode: u32,
        win_rate: f64,
        metrics: &TrainingMetrics,
    ) -> Result<(), TrainingError> {
        let dir = &self.config.checkpoint_dir;
        std::fs::create_dir_all(dir).map_err(|e| TrainingError::CheckpointDir {
            path: dir.clone(),
            source: e,
        })?;

        let table_path = dir.join(format!("checkpoint_ep{}_wr{:.2}.json", episode, win_rate));
        self.agent.save(&table_path)?;
        metrics.save(&dir.join("training_metrics.json"))?;
        Ok(())
    }
}
