//! Arena CLI
//!
//! Train the Q-learning agent and run matches between agents.

use std::env;
use std::path::Path;

use arena::{ArenaConfig, MatchRunner, MatchSettings, Trainer};
use minichess_core::Agent;
use minimax_agent::MinimaxAgent;
use qlearning_agent::{QLearningAgent, QTable};
use random_agent::RandomAgent;

fn print_usage() {
    println!("Minichess Arena");
    println!();
    println!("Usage:");
    println!("  arena train [--config FILE] [--episodes N]");
    println!("  arena match <agent1> <agent2> [--games N] [--depth D]");
    println!();
    println!("Agents:");
    println!("  minimax            - Fixed-depth minimax search");
    println!("  random             - Uniform random legal moves");
    println!("  qlearning[:FILE]   - Greedy play from a saved Q-table");
    println!();
    println!("Examples:");
    println!("  arena train --config arena.toml");
    println!("  arena match qlearning:saved_models/q_table.json minimax --games 100");
}

fn create_agent(spec: &str, depth: u8) -> Box<dyn Agent> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" => Box::new(MinimaxAgent::new(depth)),
        "random" => Box::new(RandomAgent::new()),
        "qlearning" | "q" => {
            // Greedy play: epsilon zero outside of training.
            let mut table = QTable::new();
            if parts.len() > 1 {
                match QTable::load(Path::new(parts[1])) {
                    Ok(loaded) => table = loaded,
                    Err(e) => {
                        eprintln!("Warning: failed to load Q-table {}: {}", parts[1], e);
                        eprintln!("Using an empty table");
                    }
                }
            }
            Box::new(QLearningAgent::with_table(0.1, 0.99, 0.0, table))
        }
        _ => {
            eprintln!("Unknown agent: {}, using minimax", spec);
            Box::new(MinimaxAgent::new(depth))
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two agent specifications");
        print_usage();
        return;
    }

    let agent1_spec = &args[0];
    let agent2_spec = &args[1];

    let mut settings = MatchSettings::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    settings.games = args[i + 1].parse().unwrap_or(settings.games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    settings.depth = args[i + 1].parse().unwrap_or(settings.depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", agent1_spec, agent2_spec);
    println!("Games: {}, Depth: {}", settings.games, settings.depth);
    println!();

    let mut agent1 = create_agent(agent1_spec, settings.depth);
    let mut agent2 = create_agent(agent2_spec, settings.depth);

    let runner = MatchRunner::new(settings);
    let result = runner.run_match(agent1.as_mut(), agent2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        agent1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
}

fn run_train(args: &[String]) {
    let mut config_path = String::from("arena.toml");
    let mut episodes_override: Option<u32> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--episodes" | "-e" => {
                if i + 1 < args.len() {
                    episodes_override = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = match ArenaConfig::load_or_default(Path::new(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    if let Some(episodes) = episodes_override {
        config.training.episodes = episodes;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return;
    }

    println!("=== Training ===");
    println!(
        "Episodes: {}, opponent depth: {}",
        config.training.episodes, config.training.opponent_depth
    );
    println!();

    let checkpoint_dir = config.training.checkpoint_dir.clone();
    let mut trainer = Trainer::new(config.training);
    let metrics = match trainer.train() {
        Ok(metrics) => metrics,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    metrics.print_report();

    if let Err(e) = std::fs::create_dir_all(&checkpoint_dir) {
        eprintln!("Warning: failed to create {}: {}", checkpoint_dir.display(), e);
        return;
    }
    let final_table = checkpoint_dir.join("q_table.json");
    match trainer.agent().save(&final_table) {
        Ok(()) => println!("Final Q-table written to {}", final_table.display()),
        Err(e) => eprintln!("Warning: failed to save final Q-table: {}", e),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "train" => run_train(&args[2..]),
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
