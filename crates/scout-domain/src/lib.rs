//! Signal Scout Domain Layer
//!
//! This crate contains the core data model for the Signal Scout ranking
//! pipeline. It defines the records that flow between stages and the trait
//! interfaces that the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Candidate Item**: a normalized editorial signal (title, summary, url, source, tier, date)
//! - **Archetype**: one of six narrative shapes a signal can take
//! - **Verdict**: the archetype chosen for an item and where it came from
//! - **Scored Row**: a candidate item with its mission, archetype and sub-scores
//!
//! ## Architecture
//!
//! - One external dependency (`chrono`) for timestamps
//! - Pure logic only: no I/O, no network
//! - Trait definitions for the judge, the LLM provider and the language detector

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archetype;
pub mod item;
pub mod row;
pub mod similarity;
pub mod traits;

// Re-exports for convenience
pub use archetype::{is_field_source, Archetype, FIELD_SOURCE_TOKENS};
pub use item::CandidateItem;
pub use row::{
    clamp_score, round2, Brand, DisplayFields, Focus, ScoredRow, SubScores, Verdict, VerdictSource,
    SCORE_MAX,
};
pub use similarity::token_set_ratio;
pub use traits::{ArchetypeJudge, JudgeRequest, Judgement, LanguageDetector, LlmProvider};
