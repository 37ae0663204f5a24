//! Deduplicator configuration

use crate::DedupError;
use serde::{Deserialize, Serialize};

/// Configuration for duplicate detection and source capping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Drop a title whose best token-set ratio to an accepted title exceeds this (0-100)
    pub title_similarity_threshold: f64,

    /// Drop an item whose fingerprint is numerically closer than this to an accepted one
    pub fingerprint_distance: u64,

    /// Enable the English-language filter
    pub language_filter: bool,

    /// ISO 639-3 code an item must be detected as to pass the filter
    pub required_language: String,

    /// Require a reliable detection before dropping an item
    pub require_reliable_detection: bool,

    /// Maximum items kept per source after deduplication
    pub per_source_cap: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            title_similarity_threshold: 92.0,
            fingerprint_distance: 1 << 16,
            language_filter: true,
            required_language: "eng".to_string(),
            require_reliable_detection: true,
            per_source_cap: 10,
        }
    }
}

impl DedupConfig {
    /// Create a permissive configuration (no language filter, generous cap)
    pub fn permissive() -> Self {
        Self {
            language_filter: false,
            per_source_cap: 50,
            ..Self::default()
        }
    }

    /// Create a strict configuration (lower similarity bar, tight cap)
    ///
    /// Only reliable detections drop an item; short headlines are too
    /// ambiguous for a bare guess.
    pub fn strict() -> Self {
        Self {
            title_similarity_threshold: 85.0,
            fingerprint_distance: 1 << 20,
            per_source_cap: 5,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DedupError> {
        if !(0.0..=100.0).contains(&self.title_similarity_threshold) {
            return Err(DedupError::Config(format!(
                "title_similarity_threshold {} is outside [0, 100]",
                self.title_similarity_threshold
            )));
        }
        if self.per_source_cap == 0 {
            return Err(DedupError::Config(
                "per_source_cap must be greater than 0".to_string(),
            ));
        }
        if self.language_filter && self.required_language.trim().is_empty() {
            return Err(DedupError::Config(
                "required_language must be set when language_filter is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DedupConfig::default();
        assert_eq!(config.title_similarity_threshold, 92.0);
        assert_eq!(config.fingerprint_distance, 65_536);
        assert!(config.language_filter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = DedupConfig::permissive();
        assert!(!config.language_filter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = DedupConfig::strict();
        assert!(config.title_similarity_threshold < DedupConfig::default().title_similarity_threshold);
        assert_eq!(config.per_source_cap, 5);
        assert!(config.language_filter);
        assert!(config.require_reliable_detection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = DedupConfig::default();
        config.per_source_cap = 0;
        assert!(config.validate().is_err());

        let mut config = DedupConfig::default();
        config.title_similarity_threshold = 140.0;
        assert!(config.validate().is_err());

        let mut config = DedupConfig::default();
        config.required_language = " ".to_string();
        assert!(config.validate().is_err());
    }
}
