//! Error types for CirclePack.

use thiserror::Error;

/// Result type alias for CirclePack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during circle packing.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid geometry provided.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No trial container radius could be relaxed into a stable layout.
    ///
    /// This is an ordinary outcome of the binary-search strategy when the
    /// iteration budgets are too tight, not a crash; callers must check for
    /// it before reading positions. The greedy strategy never produces it.
    #[error("No feasible layout found within {trials} trial radii")]
    Infeasible {
        /// Number of trial radii attempted.
        trials: usize,
    },
}
