//! Scored row module - the output record of the scoring stage

use crate::{Archetype, CandidateItem};
use std::fmt;

/// Upper bound of every sub-score
pub const SCORE_MAX: f64 = 5.0;

/// Clamp a value onto the [0, SCORE_MAX] scale
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, SCORE_MAX)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which path produced an archetype verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictSource {
    /// Rule confidence met the threshold
    Rules,

    /// The fallback judge overrode a low-confidence rule verdict
    Judge,

    /// The judge was consulted but abstained, failed or was below threshold
    Fallback,
}

impl VerdictSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictSource::Rules => "rules",
            VerdictSource::Judge => "judge",
            VerdictSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for VerdictSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetype verdict for one item
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Chosen archetype
    pub archetype: Archetype,

    /// Confidence on the 0-5 scale
    pub score: f64,

    /// Path that produced the verdict
    pub source: VerdictSource,

    /// Archetype the rule table chose
    pub rule_archetype: Archetype,

    /// Rule confidence on the 0-5 scale
    pub rule_score: f64,

    /// Judge answer when one was consulted (archetype, confidence in [0, 1])
    pub judge: Option<(Archetype, f64)>,
}

impl Verdict {
    /// A verdict taken straight from the rule table
    pub fn from_rules(archetype: Archetype, score: f64) -> Self {
        Self {
            archetype,
            score,
            source: VerdictSource::Rules,
            rule_archetype: archetype,
            rule_score: score,
            judge: None,
        }
    }
}

/// The five independent sub-scores, each in [0, 5]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubScores {
    /// Topic relevance to the assigned mission
    pub relevance: f64,

    /// Source credibility
    pub credibility: f64,

    /// Distance from other titles in the batch
    pub novelty: f64,

    /// Archetype confidence after nudges
    pub archetype_fit: f64,

    /// Freshness
    pub recency: f64,
}

impl SubScores {
    /// Iterate the five values in field order
    pub fn values(&self) -> [f64; 5] {
        [
            self.relevance,
            self.credibility,
            self.novelty,
            self.archetype_fit,
            self.recency,
        ]
    }
}

/// Whether a signal reads as social, technical or both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Social angle
    Social,
    /// Technology angle
    Tech,
    /// Both angles
    Both,
}

impl Focus {
    /// Get the focus name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Social => "social",
            Focus::Tech => "tech",
            Focus::Both => "both",
        }
    }
}

/// Which channel a signal suits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    /// Newsworthy for media output
    Media,
    /// Internal horizon-scanning output
    Ph,
    /// Both channels
    Both,
}

impl Brand {
    /// Get the brand name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Media => "media",
            Brand::Ph => "PH",
            Brand::Both => "both",
        }
    }
}

/// Fields derived for downstream renderers
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    /// First ten characters of the raw date
    pub display_date: String,

    /// First sentence of title and summary, at most 28 words
    pub signal: String,

    /// Title followed by the salient facts from the summary
    pub brief_summary: String,

    /// Equity consequence note
    pub equity_consequence: String,

    /// Social / tech focus
    pub focus: Focus,

    /// Channel fit
    pub brand: Brand,

    /// Sorted distinct lattice terms that matched
    pub mission_tags: Vec<String>,

    /// Sorted distinct "category / group" labels of the matched terms
    pub category_tags: Vec<String>,
}

/// A candidate item augmented with classification and scores
///
/// Built once per item by the scorer. Nudges are folded in before
/// construction, so a row never changes after it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    /// The item that was scored
    pub item: CandidateItem,

    /// Canonical form of the item's URL
    pub canonical_url: String,

    /// Assigned mission category
    pub mission: String,

    /// Assigned archetype
    pub archetype: Archetype,

    /// Path that produced the archetype
    pub verdict_source: VerdictSource,

    /// Sub-scores rounded to two decimals
    pub scores: SubScores,

    /// Weighted total rounded to two decimals
    pub total: f64,

    /// Derived display fields
    pub display: DisplayFields,
}
