//! Arena for the 5x5 variant
//!
//! This crate provides the driver layer around the core and the agents:
//! - Running matches between any two agents
//! - Training the Q-learning agent in self-play against minimax
//! - Persisting training metrics and Q-table checkpoints
//!
//! # Usage
//!
//! ```bash
//! # Train with the default schedule (or a TOML config)
//! cargo run -p arena -- train --config arena.toml
//!
//! # Pit a trained table against minimax
//! cargo run -p arena -- match qlearning:q_table.json minimax --games 100
//! ```

mod config;
mod match_runner;
mod metrics;
mod trainer;

pub use config::*;
pub use match_runner::*;
pub use metrics::*;
pub use trainer::*;
