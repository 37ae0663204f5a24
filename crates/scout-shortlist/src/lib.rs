//! Signal Scout Shortlist Selector
//!
//! Picks at most `daily_top_n` scored rows in three phases:
//!
//! 1. **Diversity**: best rows first, skipping repeat archetypes until the
//!    diversity target is met
//! 2. **Coverage**: the best unused row of each priority mission not yet
//!    represented
//! 3. **Fill**: remaining rows by score
//!
//! Rows are stably sorted by total descending before each phase, and no
//! canonical URL is selected twice.

#![warn(missing_docs)]

mod config;
mod selector;

pub use config::ShortlistConfig;
pub use selector::{SelectionPhase, ShortlistEntry, ShortlistSelector};

use thiserror::Error;

/// Errors that can occur while setting up the selector
#[derive(Error, Debug)]
pub enum ShortlistError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
