//! Scorer error types

use thiserror::Error;

/// Errors that make scoring meaningless for the whole run
#[derive(Error, Debug)]
pub enum ScoreError {
    /// No mission categories configured
    #[error("Topic lattice is empty; relevance cannot be scored")]
    EmptyTopicLattice,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
