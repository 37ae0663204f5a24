//! Signal Scout Deduplicator
//!
//! Collapses near-duplicate candidate items and caps how many items any one
//! source may contribute.
//!
//! The Deduplicator provides:
//! - Exact URL detection on canonicalized URLs
//! - Near-duplicate title detection (token-set similarity)
//! - Near-duplicate content detection (64-bit SimHash fingerprint)
//! - An English-language filter
//! - A per-source cap, newest items first
//!
//! # Examples
//!
//! ```
//! use scout_dedup::{DedupConfig, Deduplicator};
//! use scout_domain::CandidateItem;
//!
//! let items = vec![
//!     CandidateItem::new("X drug shortage sparks backlash", "", "https://a.example/1", "A", "trade", "2025-03-01"),
//!     CandidateItem::new("X drug shortage sparks backlash again", "", "https://b.example/2", "B", "trade", "2025-03-01"),
//! ];
//!
//! let dedup = Deduplicator::new(DedupConfig::permissive());
//! let outcome = dedup.dedupe(items);
//! assert_eq!(outcome.kept.len(), 1);
//! assert_eq!(outcome.dropped.len(), 1);
//! ```

#![warn(missing_docs)]

mod canonical;
mod config;
mod dedup;
mod error;
mod fingerprint;
mod language;

pub use canonical::canonical_url;
pub use config::DedupConfig;
pub use dedup::{cap_per_source, DedupOutcome, DedupState, Deduplicator, DropReason, DroppedItem};
pub use error::DedupError;
pub use fingerprint::fingerprint;
pub use language::{AcceptAll, WhatlangDetector};
