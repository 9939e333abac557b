// Solver configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Seats in the car at the start of every puzzle
pub const CAR_CAPACITY: u8 = 4;

/// Default number of extracted states between two progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Search strategy used to solve a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BreadthFirst,
    #[default]
    Dijkstra,
}

/// Options shared by every solve.
///
/// Missing JSON fields fall back to the puzzle defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Free seats when the car starts
    pub capacity: u8,
    pub strategy: Strategy,
    /// Extractions between progress log lines, 0 disables them
    pub progress_interval: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            capacity: CAR_CAPACITY,
            strategy: Strategy::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SolverConfig {
    pub fn with_capacity(capacity: u8) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
