//! Pipeline error types

use scout_classifier::ClassifierError;
use scout_dedup::DedupError;
use scout_scorer::ScoreError;
use scout_shortlist::ShortlistError;
use thiserror::Error;

/// Errors that stop a whole run
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Deduplicator setup error
    #[error(transparent)]
    Dedup(#[from] DedupError),

    /// Classifier setup error
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// Scoring error
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// Shortlist setup error
    #[error(transparent)]
    Shortlist(#[from] ShortlistError),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
