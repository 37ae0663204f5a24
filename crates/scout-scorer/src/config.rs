//! Scorer configuration

use crate::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weights combining the five sub-scores into the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of mission relevance
    pub relevance: f64,
    /// Weight of source credibility
    pub credibility: f64,
    /// Weight of novelty within the batch
    pub novelty: f64,
    /// Weight of archetype fit
    pub archetype: f64,
    /// Weight of recency; zero leaves recency out of the total
    pub recency_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            relevance: 0.35,
            credibility: 0.25,
            novelty: 0.2,
            archetype: 0.2,
            recency_bonus: 0.0,
        }
    }
}

/// Fixed bonuses applied after classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeNudges {
    /// Added to novelty for outlier items
    pub outlier_novelty_bonus: f64,
    /// Added to credibility for canary items
    pub canary_cred_bonus: f64,
    /// Added to archetype fit for field items from a field source
    pub field_fit_bonus: f64,
}

impl Default for ArchetypeNudges {
    fn default() -> Self {
        Self {
            outlier_novelty_bonus: 0.5,
            canary_cred_bonus: 0.5,
            field_fit_bonus: 0.5,
        }
    }
}

/// One mission category of the topic lattice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCategory {
    /// Mission code, e.g. "ASF"
    pub name: String,

    /// Core terms, weighted 1.0 per match
    pub terms: Vec<String>,

    /// Extended terms, weighted 0.5 per match
    #[serde(default)]
    pub extended: Vec<String>,

    /// Labelled term groups used for row category tags
    #[serde(default)]
    pub groups: Vec<TermGroup>,
}

/// A labelled subset of a category's terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermGroup {
    /// Group label, e.g. "Heating"
    pub name: String,

    /// Terms that tag a row with this group when matched
    pub terms: Vec<String>,
}

impl TermGroup {
    /// Create a group from its label and terms
    pub fn new(name: impl Into<String>, terms: &[&str]) -> Self {
        Self {
            name: name.into(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Whether a normalized term belongs to this group
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.trim().eq_ignore_ascii_case(term))
    }
}

impl TopicCategory {
    /// Create a category from core terms only
    pub fn new(name: impl Into<String>, terms: &[&str]) -> Self {
        Self {
            name: name.into(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            extended: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Add extended terms
    pub fn with_extended(mut self, terms: &[&str]) -> Self {
        self.extended = terms.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Add a labelled term group
    pub fn with_group(mut self, group: TermGroup) -> Self {
        self.groups.push(group);
        self
    }
}

/// Built-in per-tier credibility weights
pub fn default_source_weights() -> BTreeMap<String, f64> {
    [
        ("peer_review", 1.0),
        ("policy", 0.9),
        ("gov", 0.9),
        ("think_tank", 0.7),
        ("trade", 0.6),
        ("media", 0.6),
        ("blog", 0.4),
    ]
    .into_iter()
    .map(|(tier, weight)| (tier.to_string(), weight))
    .collect()
}

/// Built-in topic lattice covering the three missions
pub fn default_topic_lattice() -> Vec<TopicCategory> {
    vec![
        TopicCategory::new(
            "ASF",
            &[
                "heat pump",
                "net zero",
                "retrofit",
                "insulation",
                "decarbon",
                "energy efficiency",
                "home energy",
                "low carbon",
            ],
        )
        .with_extended(&["solar", "grid", "emissions", "boiler", "housing"])
        .with_group(TermGroup::new("Heating", &["heat pump", "boiler", "low carbon"]))
        .with_group(TermGroup::new(
            "Buildings",
            &["retrofit", "insulation", "energy efficiency", "home energy", "housing"],
        ))
        .with_group(TermGroup::new(
            "Energy system",
            &["net zero", "decarbon", "solar", "grid", "emissions"],
        )),
        TopicCategory::new(
            "AHL",
            &[
                "obesity",
                "diet",
                "healthy food",
                "glp-1",
                "semaglutide",
                "upf",
                "physical activity",
                "sugar",
            ],
        )
        .with_extended(&["nutrition", "calorie", "snack", "weight", "health"])
        .with_group(TermGroup::new("Obesity", &["obesity", "weight", "glp-1", "semaglutide"]))
        .with_group(TermGroup::new(
            "Food environment",
            &["diet", "healthy food", "upf", "sugar", "nutrition", "calorie", "snack"],
        ))
        .with_group(TermGroup::new("Activity", &["physical activity"])),
        TopicCategory::new(
            "AFS",
            &[
                "early years",
                "childcare",
                "nursery",
                "school readiness",
                "parenting",
                "child development",
                "early education",
                "family hubs",
            ],
        )
        .with_extended(&["toddler", "preschool", "literacy", "parents", "school"])
        .with_group(TermGroup::new(
            "Early years",
            &["early years", "childcare", "nursery", "early education", "preschool", "toddler"],
        ))
        .with_group(TermGroup::new("School readiness", &["school readiness", "literacy", "school"]))
        .with_group(TermGroup::new(
            "Family support",
            &["parenting", "parents", "family hubs", "child development"],
        )),
    ]
}

/// Configuration for the scorer
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Total-score weights
    pub weights: ScoreWeights,

    /// Tier to credibility weight (0-1); unknown tiers weigh 0.5
    pub source_weights: BTreeMap<String, f64>,

    /// Post-classification bonuses
    pub nudges: ArchetypeNudges,

    /// Ordered mission categories
    pub topic_lattice: Vec<TopicCategory>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            source_weights: default_source_weights(),
            nudges: ArchetypeNudges::default(),
            topic_lattice: default_topic_lattice(),
        }
    }
}

impl ScorerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.topic_lattice.is_empty() {
            return Err(ScoreError::EmptyTopicLattice);
        }

        let w = &self.weights;
        for (name, value) in [
            ("relevance", w.relevance),
            ("credibility", w.credibility),
            ("novelty", w.novelty),
            ("archetype", w.archetype),
            ("recency_bonus", w.recency_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::Config(format!(
                    "weight {name} must be a non-negative number, got {value}"
                )));
            }
        }

        if let Some((tier, weight)) = self
            .source_weights
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(*weight))
        {
            return Err(ScoreError::Config(format!(
                "source weight for tier {tier} is outside [0, 1]: {weight}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.topic_lattice[0].name, "ASF");
        assert_eq!(config.weights.recency_bonus, 0.0);
    }

    #[test]
    fn test_empty_lattice_rejected() {
        let config = ScorerConfig {
            topic_lattice: Vec::new(),
            ..ScorerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScoreError::EmptyTopicLattice)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = ScorerConfig::default();
        config.weights.novelty = -0.1;
        assert!(matches!(config.validate(), Err(ScoreError::Config(_))));
    }

    #[test]
    fn test_source_weight_out_of_range() {
        let mut config = ScorerConfig::default();
        config.source_weights.insert("rumour".to_string(), 1.5);
        assert!(config.validate().is_err());
    }
}
