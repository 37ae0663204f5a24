//! Classifier error types

use scout_domain::Archetype;
use thiserror::Error;

/// Errors that can occur while building the classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A configured archetype pattern is not a valid regular expression
    #[error("Invalid pattern for {archetype}: {pattern:?}: {reason}")]
    InvalidPattern {
        /// Archetype the pattern belongs to
        archetype: Archetype,
        /// The offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
