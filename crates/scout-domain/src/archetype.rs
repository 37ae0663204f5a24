//! Archetype module - the narrative shapes a signal can take

use std::fmt;

/// Narrative archetype of a signal
///
/// The variant order here is the label order used in judge prompts. The
/// classifier's priority order is a separate, explicit rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    /// Broad structural shifts: rollouts, uptake, capacity
    ShapeOfThings,

    /// Findings that cut against expectation
    CounterIntuitive,

    /// Early warnings: backlash, shortages, recalls
    Canary,

    /// Lessons from practitioners and implementation
    InsightsFromField,

    /// Unusual actors or first-of-its-kind moves
    Outlier,

    /// Frameworks, manifestos, roadmaps
    BigIdea,
}

impl Archetype {
    /// Every archetype, in label order
    pub const ALL: [Archetype; 6] = [
        Archetype::ShapeOfThings,
        Archetype::CounterIntuitive,
        Archetype::Canary,
        Archetype::InsightsFromField,
        Archetype::Outlier,
        Archetype::BigIdea,
    ];

    /// Get the archetype label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::ShapeOfThings => "shape_of_things",
            Archetype::CounterIntuitive => "counter_intuitive",
            Archetype::Canary => "canary",
            Archetype::InsightsFromField => "insights_from_field",
            Archetype::Outlier => "outlier",
            Archetype::BigIdea => "big_idea",
        }
    }

    /// Parse an archetype from its label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "shape_of_things" => Some(Archetype::ShapeOfThings),
            "counter_intuitive" => Some(Archetype::CounterIntuitive),
            "canary" => Some(Archetype::Canary),
            "insights_from_field" => Some(Archetype::InsightsFromField),
            "outlier" => Some(Archetype::Outlier),
            "big_idea" => Some(Archetype::BigIdea),
            _ => None,
        }
    }
}

/// Source-name fragments that mark a practitioner or field source
pub const FIELD_SOURCE_TOKENS: [&str; 5] = ["hansard", "gtr", "council", "nhs", "trust"];

/// Whether a source name contains one of the field-source tokens
pub fn is_field_source(source: &str) -> bool {
    let source = source.to_lowercase();
    FIELD_SOURCE_TOKENS.iter().any(|token| source.contains(token))
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid archetype: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::parse(archetype.as_str()), Some(archetype));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Archetype::parse(" Canary "), Some(Archetype::Canary));
        assert_eq!("BIG_IDEA".parse::<Archetype>(), Ok(Archetype::BigIdea));
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert_eq!(Archetype::parse("abstain"), None);
        assert!("wildcard".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_field_source() {
        assert!(is_field_source("Hansard (Commons)"));
        assert!(is_field_source("Leeds City Council"));
        assert!(is_field_source("NHS England"));
        assert!(!is_field_source("Trade Weekly"));
    }
}
