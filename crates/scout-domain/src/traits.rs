//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the ranking logic and the
//! collaborators it can run without. Implementations live in other crates.

use crate::{Archetype, CandidateItem};

/// Input to the fallback judge
///
/// Also the memoization key: two requests with the same triple are the same
/// question.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JudgeRequest {
    /// Item title
    pub title: String,

    /// Item summary
    pub summary: String,

    /// Item source name
    pub source: String,
}

impl JudgeRequest {
    /// Build the request for a candidate item
    pub fn from_item(item: &CandidateItem) -> Self {
        Self {
            title: item.title.clone(),
            summary: item.summary.clone(),
            source: item.source.clone(),
        }
    }
}

/// Answer from the fallback judge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Judgement {
    /// The judge picked an archetype
    Label {
        /// Chosen archetype
        archetype: Archetype,
        /// Confidence in [0, 1]
        confidence: f64,
    },

    /// The judge declined to answer
    Abstain,
}

/// Trait for the fallback archetype judge
///
/// Implemented by the infrastructure layer (scout-judge). A judge may always
/// abstain; the rule table is the baseline.
pub trait ArchetypeJudge {
    /// Error type for judge operations
    type Error;

    /// Classify one item into an archetype, or abstain
    fn judge(&self, request: &JudgeRequest) -> Result<Judgement, Self::Error>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (scout-judge)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for language detection
///
/// Implemented by the deduplication layer (scout-dedup)
pub trait LanguageDetector {
    /// Detect the language of `text` as an ISO 639-3 code (e.g. "eng")
    ///
    /// Returns `None` when the detector cannot decide. Callers treat that as
    /// a pass.
    fn detect(&self, text: &str) -> Option<String>;
}
