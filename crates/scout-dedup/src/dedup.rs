//! Duplicate detection fold and per-source cap

use crate::{canonical_url, fingerprint, DedupConfig, WhatlangDetector};
use chrono::{DateTime, Utc};
use scout_domain::{token_set_ratio, CandidateItem, LanguageDetector};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info};

/// Reason an item was dropped during deduplication
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    /// Canonical URL already accepted
    DuplicateUrl,

    /// Title too similar to an accepted title
    SimilarTitle {
        /// Best token-set ratio against accepted titles (0-100)
        score: f64,
    },

    /// Content fingerprint too close to an accepted fingerprint
    SimilarContent {
        /// Numeric distance to the closest accepted fingerprint
        distance: u64,
    },

    /// Detected language is not the required one
    NotEnglish {
        /// Detected ISO 639-3 code
        detected: String,
    },
}

impl DropReason {
    /// Short machine-readable name of the reason
    pub fn kind(&self) -> &'static str {
        match self {
            DropReason::DuplicateUrl => "duplicate_url",
            DropReason::SimilarTitle { .. } => "similar_title",
            DropReason::SimilarContent { .. } => "similar_content",
            DropReason::NotEnglish { .. } => "not_english",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::DuplicateUrl => write!(f, "duplicate URL"),
            DropReason::SimilarTitle { score } => write!(f, "similar title ({score:.1})"),
            DropReason::SimilarContent { distance } => {
                write!(f, "similar content (distance {distance})")
            }
            DropReason::NotEnglish { detected } => write!(f, "not English (detected {detected})"),
        }
    }
}

/// An item removed by the deduplicator
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
    /// URL as supplied
    pub url: String,

    /// Title as supplied
    pub title: String,

    /// Why it was dropped
    pub reason: DropReason,
}

/// Result of a deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Accepted items in input order
    pub kept: Vec<CandidateItem>,

    /// Dropped items in input order
    pub dropped: Vec<DroppedItem>,
}

/// Accumulator threaded through the deduplication fold.
///
/// Holds only accepted items: canonical URLs, titles and fingerprints.
#[derive(Debug, Clone, Default)]
pub struct DedupState {
    urls: HashSet<String>,
    titles: Vec<String>,
    fingerprints: Vec<u64>,
}

impl DedupState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a canonical URL has been accepted
    pub fn contains_url(&self, canonical: &str) -> bool {
        self.urls.contains(canonical)
    }

    /// Number of accepted items
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether nothing has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Best title similarity against accepted titles, stopping early once
    /// `threshold` is exceeded
    fn best_title_score(&self, title: &str, threshold: f64) -> f64 {
        let mut best = 0.0_f64;
        for seen in &self.titles {
            let score = token_set_ratio(title, seen);
            if score > best {
                best = score;
                if best > threshold {
                    break;
                }
            }
        }
        best
    }

    fn closest_fingerprint(&self, value: u64) -> Option<u64> {
        self.fingerprints.iter().map(|seen| value.abs_diff(*seen)).min()
    }

    fn accept(&mut self, canonical: String, title: &str, fp: Option<u64>) {
        self.urls.insert(canonical);
        self.titles.push(title.to_string());
        if let Some(fp) = fp {
            self.fingerprints.push(fp);
        }
    }
}

/// Removes duplicate and non-English items from a batch
pub struct Deduplicator<L = WhatlangDetector> {
    config: DedupConfig,
    detector: L,
}

impl Deduplicator<WhatlangDetector> {
    /// Create a deduplicator with the `whatlang` language detector
    pub fn new(config: DedupConfig) -> Self {
        let detector = WhatlangDetector::new(config.require_reliable_detection);
        Self { config, detector }
    }
}

impl<L: LanguageDetector> Deduplicator<L> {
    /// Create a deduplicator with a custom language detector
    pub fn with_detector(config: DedupConfig, detector: L) -> Self {
        Self { config, detector }
    }

    /// Get the configuration
    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Deduplicate a batch, keeping the first of each group of duplicates
    pub fn dedupe(&self, items: Vec<CandidateItem>) -> DedupOutcome {
        let total = items.len();
        let (_, outcome) = items.into_iter().fold(
            (DedupState::new(), DedupOutcome::default()),
            |(mut state, mut outcome), item| {
                match self.step(&mut state, &item) {
                    Some(reason) => {
                        debug!(url = %item.url, reason = %reason, "Dropped item");
                        outcome.dropped.push(DroppedItem {
                            url: item.url,
                            title: item.title,
                            reason,
                        });
                    }
                    None => outcome.kept.push(item),
                }
                (state, outcome)
            },
        );

        info!(
            input = total,
            kept = outcome.kept.len(),
            dropped = outcome.dropped.len(),
            "Deduplication complete"
        );
        outcome
    }

    /// Deduplicate, then apply the configured per-source cap
    pub fn dedupe_and_cap(&self, items: Vec<CandidateItem>) -> DedupOutcome {
        let outcome = self.dedupe(items);
        DedupOutcome {
            kept: cap_per_source(outcome.kept, self.config.per_source_cap),
            dropped: outcome.dropped,
        }
    }

    /// Check one item against the state, recording it when accepted
    fn step(&self, state: &mut DedupState, item: &CandidateItem) -> Option<DropReason> {
        let canonical = canonical_url(&item.url);
        if state.contains_url(&canonical) {
            return Some(DropReason::DuplicateUrl);
        }

        let threshold = self.config.title_similarity_threshold;
        let score = state.best_title_score(&item.title, threshold);
        if score > threshold {
            return Some(DropReason::SimilarTitle { score });
        }

        let fp = fingerprint(&item.title, &item.summary);
        if let Some(value) = fp {
            if let Some(distance) = state.closest_fingerprint(value) {
                if distance < self.config.fingerprint_distance {
                    return Some(DropReason::SimilarContent { distance });
                }
            }
        }

        if self.config.language_filter {
            let text = format!("{} {}", item.title, item.summary);
            if let Some(detected) = self.detector.detect(&text) {
                if detected != self.config.required_language {
                    return Some(DropReason::NotEnglish { detected });
                }
            }
        }

        state.accept(canonical, &item.title, fp);
        None
    }
}

/// Keep at most `cap` items per source, newest first.
///
/// Items are stably sorted by publication date descending, with unparseable
/// dates treated as oldest.
pub fn cap_per_source(items: Vec<CandidateItem>, cap: usize) -> Vec<CandidateItem> {
    let mut dated: Vec<(Reverse<Option<DateTime<Utc>>>, CandidateItem)> = items
        .into_iter()
        .map(|item| (Reverse(item.published_at()), item))
        .collect();
    dated.sort_by(|a, b| a.0.cmp(&b.0));

    let mut per_source: HashMap<String, usize> = HashMap::new();
    let mut kept = Vec::with_capacity(dated.len());
    for (_, item) in dated {
        let count = per_source.entry(item.source.clone()).or_insert(0);
        if *count < cap {
            *count += 1;
            kept.push(item);
        }
    }
    kept
}
