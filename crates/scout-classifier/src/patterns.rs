//! Archetype pattern sets

use scout_domain::Archetype;
use serde::{Deserialize, Serialize};

/// Regex patterns per archetype label.
///
/// Missing lists in a config file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypePatterns {
    /// Structural shifts
    pub shape_of_things: Vec<String>,
    /// Findings against expectation
    pub counter_intuitive: Vec<String>,
    /// Early warnings
    pub canary: Vec<String>,
    /// Practitioner lessons
    pub insights_from_field: Vec<String>,
    /// Unusual actors
    pub outlier: Vec<String>,
    /// Frameworks and agendas
    pub big_idea: Vec<String>,
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl Default for ArchetypePatterns {
    fn default() -> Self {
        Self {
            shape_of_things: owned(&[
                r"(pilot|rollout|uptake|deployment|orders|capacity|standard|protocol)",
            ]),
            counter_intuitive: owned(&[
                r"(counter[- ]?intuitive|paradox|backfire|rebound)",
                r"(trial|RCT|meta-analys)",
            ]),
            canary: owned(&[
                r"(backlash|inactivism|blowback|recall|adverse|warning|shortage|misinfo)",
            ]),
            insights_from_field: owned(&[
                r"(case study|council|NHS|trust|clinician|teacher|lessons|implementation)",
            ]),
            outlier: owned(&[
                r"(artist|collective|hack|grassroots|lawsuit|strike|first[- ]of[- ]its[- ]kind|unprecedented)",
            ]),
            big_idea: owned(&[
                r"(manifesto|white paper|framework|grand challenge|roadmap|review|commission|think tank)",
            ]),
        }
    }
}

impl ArchetypePatterns {
    /// Patterns configured for one archetype
    pub fn for_archetype(&self, archetype: Archetype) -> &[String] {
        match archetype {
            Archetype::ShapeOfThings => &self.shape_of_things,
            Archetype::CounterIntuitive => &self.counter_intuitive,
            Archetype::Canary => &self.canary,
            Archetype::InsightsFromField => &self.insights_from_field,
            Archetype::Outlier => &self.outlier,
            Archetype::BigIdea => &self.big_idea,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archetype_has_defaults() {
        let patterns = ArchetypePatterns::default();
        for archetype in Archetype::ALL {
            assert!(!patterns.for_archetype(archetype).is_empty());
        }
    }

    #[test]
    fn test_for_archetype_maps_fields() {
        let patterns = ArchetypePatterns::default();
        assert_eq!(patterns.for_archetype(Archetype::CounterIntuitive).len(), 2);
        assert!(patterns.for_archetype(Archetype::Canary)[0].contains("backlash"));
    }
}
