//! State-action value table with JSON persistence

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use minichess_core::Move;
use serde::{Deserialize, Serialize};

/// Errors from persisting or restoring a Q-table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read or write table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or parse table file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One persisted state-action value.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableEntry {
    state: String,
    action: Move,
    value: f64,
}

/// Tabular state-action values.
///
/// Reads default to 0.0 for unseen entries and never insert; writes are
/// explicit. Keys are canonical position keys, so structurally equal
/// boards share values no matter how they were constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    values: HashMap<String, HashMap<Move, f64>>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `(state, action)`, 0.0 when absent.
    pub fn get(&self, state: &str, action: Move) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, state: &str, action: Move, value: f64) {
        self.values
            .entry(state.to_string())
            .or_default()
            .insert(action, value);
    }

    /// Highest value among `moves` in `state`; 0.0 for an empty move list.
    pub fn max_over(&self, state: &str, moves: &[Move]) -> f64 {
        moves
            .iter()
            .map(|&mv| self.get(state, mv))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Number of stored state-action entries.
    pub fn len(&self) -> usize {
        self.values.values().map(|actions| actions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write the table as a JSON entry list. Entries are sorted so that
    /// saving the same table twice produces identical files.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let mut entries: Vec<TableEntry> = self
            .values
            .iter()
            .flat_map(|(state, actions)| {
                actions.iter().map(move |(&action, &value)| TableEntry {
                    state: state.clone(),
                    action,
                    value,
                })
            })
            .collect();
        entries.sort_by(|a, b| (&a.state, a.action).cmp(&(&b.state, b.action)));

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Restore a table saved by [`QTable::save`]. Round-trips exactly:
    /// loading and immediately saving reproduces the same mapping.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = fs::read_to_string(path)?;
        let entries: Vec<TableEntry> = serde_json::from_str(&contents)?;

        let mut table = QTable::new();
        for entry in entries {
            table.set(&entry.state, entry.action, entry.value);
        }
        Ok(table)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
