// Error types raised while loading boards and configuring solves

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before a search can start.
///
/// An unsolvable board is not an error; the solvers report it as a
/// [`Solution`](crate::models::Solution) without a total distance.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The board declares more pets than the status vector can hold.
    #[error("board declares {found} pets, at most {max} are supported")]
    PetCapacityExceeded {
        /// Number of distinct pets found.
        found: usize,
        /// Supported maximum.
        max: usize,
    },

    /// The raw board is structurally inconsistent.
    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// Reading a board or configuration file failed.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A board or configuration file is not valid JSON for its type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolverError {
    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        SolverError::MalformedBoard {
            reason: reason.into(),
        }
    }
}
