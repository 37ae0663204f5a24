//! Signal Scout Pipeline
//!
//! Wires the deduplicator, classifier, scorer and shortlist selector into a
//! single batch run.
//!
//! # Architecture
//!
//! ```text
//! items -> Deduplicator -> per-source cap -> EnsembleClassifier -> Scorer -> ShortlistSelector
//! ```
//!
//! A run is a single-threaded transformation of one finite batch. The only
//! blocking call is the fallback judge, whose answers are memoized in a
//! shared [`scout_judge::JudgeCache`].
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use scout_domain::CandidateItem;
//! use scout_judge::AbstainingJudge;
//! use scout_pipeline::{Scout, ScoutConfig};
//!
//! let mut config = ScoutConfig::default();
//! config.dedup.language_filter = false;
//! let scout = Scout::new(config, AbstainingJudge).unwrap();
//!
//! let items = vec![
//!     CandidateItem::new("Heat pump orders surge", "", "https://a.example/1", "A", "trade", "2025-03-01"),
//!     CandidateItem::new("Semaglutide shortage warning", "", "https://b.example/2", "B", "policy", "2025-03-01"),
//! ];
//!
//! let report = scout.run(items, Utc::now()).unwrap();
//! assert_eq!(report.shortlist.len(), 2);
//! println!("{}", report.metrics.summary());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod scout;

pub use config::ScoutConfig;
pub use error::ScoutError;
pub use metrics::RunMetrics;
pub use scout::{RunReport, Scout};
