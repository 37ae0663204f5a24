//! Signal Scout Scorer
//!
//! Turns a classified candidate item into a [`ScoredRow`].
//!
//! # Sub-scores
//!
//! Each sub-score is on a 0-5 scale:
//!
//! - **Relevance**: weighted count of topic-lattice terms in the best mission category
//! - **Credibility**: per-tier weight plus a bonus for data markers in the summary
//! - **Novelty**: inverse of the closest title similarity within the batch
//! - **Archetype fit**: the classifier's confidence
//! - **Recency**: one point lost every six days
//!
//! Archetype nudges are applied before the row is built, then the total is
//! a linear weighted sum rounded to two decimals.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use scout_domain::{Archetype, CandidateItem, Verdict};
//! use scout_scorer::{Scorer, ScorerConfig};
//!
//! let scorer = Scorer::new(ScorerConfig::default()).unwrap();
//! let item = CandidateItem::new(
//!     "Heat pump orders surge",
//!     "Installers report record demand.",
//!     "https://example.com/heat",
//!     "Trade Weekly",
//!     "trade",
//!     "2025-03-01",
//! );
//! let verdict = Verdict::from_rules(Archetype::ShapeOfThings, 3.5);
//! let no_prior: [&str; 0] = [];
//!
//! let row = scorer.score(&item, &verdict, &no_prior, Utc::now()).unwrap();
//! assert_eq!(row.mission, "ASF");
//! assert_eq!(row.scores.novelty, 5.0);
//! ```

#![warn(missing_docs)]

pub mod display;
pub mod subscores;

mod config;
mod error;
mod scorer;

pub use config::{
    default_source_weights, default_topic_lattice, ArchetypeNudges, ScoreWeights, ScorerConfig,
    TermGroup, TopicCategory,
};
pub use error::ScoreError;
pub use scorer::{ReferenceTitles, Scorer};
pub use subscores::RelevanceMatch;

pub use scout_domain::ScoredRow;
