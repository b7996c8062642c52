//! Training metrics storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from persisting or restoring metrics.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("failed to read or write metrics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or parse metrics file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Training progress series, one sample per evaluation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub episodes: Vec<u32>,
    pub win_rates: Vec<f64>,
    pub epsilons: Vec<f64>,
}

impl TrainingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, episode: u32, win_rate: f64, epsilon: f64) {
        self.episodes.push(episode);
        self.win_rates.push(win_rate);
        self.epsilons.push(epsilon);
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Save metrics to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), MetricsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load metrics from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MetricsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Training progress ===\n\n");
        report.push_str(&format!(
            "{:>10} {:>10} {:>10}\n",
            "Episode", "Win rate", "Epsilon"
        ));
        report.push_str(&"-".repeat(32));
        report.push('\n');

        for i in 0..self.episodes.len() {
            report.push_str(&format!(
                "{:>10} {:>9.1}% {:>10.3}\n",
                self.episodes[i],
                self.win_rates[i] * 100.0,
                self.epsilons[i]
            ));
        }

        report
    }

    /// Print report to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
