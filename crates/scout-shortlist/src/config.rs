//! Shortlist configuration

use crate::ShortlistError;
use serde::{Deserialize, Serialize};

/// Configuration for shortlist selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistConfig {
    /// Maximum shortlist size
    pub daily_top_n: usize,

    /// Distinct archetypes to gather before any archetype repeats
    pub ensure_archetype_diversity: usize,

    /// Run the mission coverage phase
    pub ensure_mission_coverage: bool,

    /// Missions the coverage phase tries to represent, in order
    pub mission_priority: Vec<String>,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            daily_top_n: 8,
            ensure_archetype_diversity: 4,
            ensure_mission_coverage: true,
            mission_priority: vec!["ASF".to_string(), "AHL".to_string(), "AFS".to_string()],
        }
    }
}

impl ShortlistConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ShortlistError> {
        if self.daily_top_n == 0 {
            return Err(ShortlistError::Config(
                "daily_top_n must be greater than 0".to_string(),
            ));
        }
        if self.mission_priority.iter().any(|m| m.trim().is_empty()) {
            return Err(ShortlistError::Config(
                "mission_priority entries must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
