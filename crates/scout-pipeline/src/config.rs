//! Run configuration
//!
//! A single TOML document covering every stage. Every section has defaults,
//! so a partial file loads.

use crate::ScoutError;
use scout_classifier::{ArchetypePatterns, EnsembleConfig};
use scout_dedup::DedupConfig;
use scout_scorer::{
    default_source_weights, default_topic_lattice, ArchetypeNudges, ScoreWeights, ScorerConfig,
    TopicCategory,
};
use scout_shortlist::ShortlistConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for a Signal Scout run
///
/// # Examples
///
/// ```
/// use scout_pipeline::ScoutConfig;
///
/// let config = ScoutConfig::from_toml(r#"
/// per_source_cap = 3
///
/// [shortlist]
/// daily_top_n = 5
///
/// [[topic_lattice]]
/// name = "AHL"
/// terms = ["obesity", "diet"]
/// "#).unwrap();
///
/// assert_eq!(config.per_source_cap, Some(3));
/// assert_eq!(config.dedup_config().per_source_cap, 3);
/// assert_eq!(config.shortlist.daily_top_n, 5);
/// assert_eq!(config.shortlist.ensure_archetype_diversity, 4);
/// assert_eq!(config.topic_lattice.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Maximum items kept per source; overrides `dedup.per_source_cap` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_source_cap: Option<usize>,

    /// Total-score weights
    pub weights: ScoreWeights,

    /// Tier to credibility weight
    pub source_weights: BTreeMap<String, f64>,

    /// Post-classification bonuses
    pub archetype_nudges: ArchetypeNudges,

    /// Rule and judge thresholds
    pub ensemble: EnsembleConfig,

    /// Duplicate detection settings
    pub dedup: DedupConfig,

    /// Shortlist settings
    pub shortlist: ShortlistConfig,

    /// Regex patterns per archetype
    pub archetype_patterns: ArchetypePatterns,

    /// Ordered mission categories
    pub topic_lattice: Vec<TopicCategory>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            per_source_cap: None,
            weights: ScoreWeights::default(),
            source_weights: default_source_weights(),
            archetype_nudges: ArchetypeNudges::default(),
            ensemble: EnsembleConfig::default(),
            dedup: DedupConfig::default(),
            shortlist: ShortlistConfig::default(),
            archetype_patterns: ArchetypePatterns::default(),
            topic_lattice: default_topic_lattice(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ScoutError> {
        toml::from_str(toml_str)
            .map_err(|e| ScoutError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ScoutError> {
        toml::to_string_pretty(self)
            .map_err(|e| ScoutError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScoutError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Deduplicator settings with the top-level source cap applied, if any
    pub fn dedup_config(&self) -> DedupConfig {
        DedupConfig {
            per_source_cap: self.per_source_cap.unwrap_or(self.dedup.per_source_cap),
            ..self.dedup.clone()
        }
    }

    /// Scorer settings assembled from the scoring sections
    pub fn scorer_config(&self) -> ScorerConfig {
        ScorerConfig {
            weights: self.weights.clone(),
            source_weights: self.source_weights.clone(),
            nudges: self.archetype_nudges.clone(),
            topic_lattice: self.topic_lattice.clone(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ScoutError> {
        if self.per_source_cap == Some(0) {
            return Err(ScoutError::Config(
                "per_source_cap must be greater than 0".to_string(),
            ));
        }
        if self.topic_lattice.is_empty() {
            return Err(ScoutError::Config(
                "topic_lattice must contain at least one category".to_string(),
            ));
        }

        self.dedup_config()
            .validate()
            .map_err(|e| ScoutError::Config(e.to_string()))?;
        self.ensemble
            .validate()
            .map_err(|e| ScoutError::Config(e.to_string()))?;
        self.shortlist
            .validate()
            .map_err(|e| ScoutError::Config(e.to_string()))?;
        self.scorer_config()
            .validate()
            .map_err(|e| ScoutError::Config(e.to_string()))?;
        Ok(())
    }
}
