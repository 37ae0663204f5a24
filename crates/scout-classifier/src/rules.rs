//! Ranked archetype rule table

use crate::{ArchetypePatterns, ClassifierError};
use regex::{Regex, RegexBuilder};
use scout_domain::{Archetype, SCORE_MAX, FIELD_SOURCE_TOKENS};

/// Order in which archetype rules are evaluated; the first match wins
pub const RULE_PRIORITY: [Archetype; 6] = [
    Archetype::Canary,
    Archetype::CounterIntuitive,
    Archetype::InsightsFromField,
    Archetype::Outlier,
    Archetype::BigIdea,
    Archetype::ShapeOfThings,
];

/// Confidence given when no rule matches
pub const FALLBACK_CONFIDENCE: f64 = 2.5;

/// Archetype and confidence chosen by the rule table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch {
    /// Chosen archetype
    pub archetype: Archetype,

    /// Confidence on the 0-5 scale
    pub confidence: f64,
}

impl RuleMatch {
    /// Confidence rescaled to [0, 1]
    pub fn fit(&self) -> f64 {
        self.confidence / SCORE_MAX
    }
}

/// One row of the rule table
#[derive(Debug, Clone)]
pub struct ArchetypeRule {
    archetype: Archetype,
    patterns: Vec<Regex>,
    keywords: Vec<String>,
    source_tokens: Vec<String>,
    base_confidence: f64,
}

impl ArchetypeRule {
    /// Compile a rule from its patterns; matching is case-insensitive
    pub fn new(
        archetype: Archetype,
        patterns: &[String],
        base_confidence: f64,
    ) -> Result<Self, ClassifierError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ClassifierError::InvalidPattern {
                        archetype,
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            archetype,
            patterns,
            keywords: Vec::new(),
            source_tokens: Vec::new(),
            base_confidence,
        })
    }

    /// Also match when the text contains any of these keywords
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    /// Also match when the source name contains any of these tokens
    pub fn with_source_tokens(mut self, tokens: &[&str]) -> Self {
        self.source_tokens = tokens.iter().map(|t| t.to_lowercase()).collect();
        self
    }

    /// Archetype this rule assigns
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Confidence this rule assigns
    pub fn base_confidence(&self) -> f64 {
        self.base_confidence
    }

    /// Whether the rule fires; both arguments must already be lowercased
    pub fn matches(&self, text: &str, source: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
            || self.keywords.iter().any(|k| text.contains(k.as_str()))
            || self.source_tokens.iter().any(|t| source.contains(t.as_str()))
    }
}

/// Ordered archetype rules with a default verdict
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ArchetypeRule>,
    fallback: RuleMatch,
}

impl RuleTable {
    /// Build a table from explicit rules, evaluated in the given order
    pub fn new(rules: Vec<ArchetypeRule>, fallback: RuleMatch) -> Self {
        Self { rules, fallback }
    }

    /// Build the standard table from a pattern set
    pub fn from_patterns(patterns: &ArchetypePatterns) -> Result<Self, ClassifierError> {
        let mut rules = Vec::with_capacity(RULE_PRIORITY.len());
        for archetype in RULE_PRIORITY {
            let rule = ArchetypeRule::new(
                archetype,
                patterns.for_archetype(archetype),
                base_confidence(archetype),
            )?;
            let rule = match archetype {
                Archetype::InsightsFromField => rule.with_source_tokens(&FIELD_SOURCE_TOKENS),
                Archetype::Outlier => rule.with_keywords(&[
                    "artist",
                    "collective",
                    "hack",
                    "lawsuit",
                    "strike",
                    "grassroots",
                ]),
                Archetype::BigIdea => rule.with_keywords(&[
                    "framework",
                    "roadmap",
                    "manifesto",
                    "agenda",
                    "grand challenge",
                ]),
                Archetype::ShapeOfThings => rule.with_keywords(&[
                    "deployment",
                    "uptake",
                    "orders",
                    "capacity",
                    "interoperability",
                ]),
                Archetype::Canary | Archetype::CounterIntuitive => rule,
            };
            rules.push(rule);
        }

        Ok(Self::new(
            rules,
            RuleMatch {
                archetype: Archetype::ShapeOfThings,
                confidence: FALLBACK_CONFIDENCE,
            },
        ))
    }

    /// Build the standard table from the built-in patterns
    pub fn with_default_patterns() -> Result<Self, ClassifierError> {
        Self::from_patterns(&ArchetypePatterns::default())
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ArchetypeRule] {
        &self.rules
    }

    /// Classify an item by the first rule that fires
    pub fn classify(&self, title: &str, summary: &str, source: &str) -> RuleMatch {
        let text = format!("{title}. {summary}").to_lowercase();
        let source = source.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&text, &source))
            .map(|rule| RuleMatch {
                archetype: rule.archetype,
                confidence: rule.base_confidence,
            })
            .unwrap_or(self.fallback)
    }
}

fn base_confidence(archetype: Archetype) -> f64 {
    match archetype {
        Archetype::Canary => 4.5,
        Archetype::CounterIntuitive | Archetype::InsightsFromField | Archetype::Outlier => 4.0,
        Archetype::BigIdea | Archetype::ShapeOfThings => 3.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::with_default_patterns().unwrap()
    }

    fn classify(title: &str, summary: &str, source: &str) -> (Archetype, f64) {
        let m = table().classify(title, summary, source);
        (m.archetype, m.confidence)
    }

    #[test]
    fn test_canary_beats_outlier() {
        assert_eq!(
            classify("Artists collective faces backlash", "", "Arts Desk"),
            (Archetype::Canary, 4.5)
        );
    }

    #[test]
    fn test_counter_intuitive_from_trial() {
        assert_eq!(
            classify("Four-day week trial results", "Output held steady.", "Trade Weekly"),
            (Archetype::CounterIntuitive, 4.0)
        );
    }

    #[test]
    fn test_field_source_token() {
        assert_eq!(
            classify("Debate on bus franchising", "", "Hansard"),
            (Archetype::InsightsFromField, 4.0)
        );
    }

    #[test]
    fn test_outlier_keyword() {
        assert_eq!(
            classify("Grassroots musicians organise", "", "Local Paper"),
            (Archetype::Outlier, 4.0)
        );
    }

    #[test]
    fn test_big_idea_keyword() {
        assert_eq!(
            classify("A new agenda for cities", "", "Local Paper"),
            (Archetype::BigIdea, 3.5)
        );
    }

    #[test]
    fn test_shape_of_things_pattern() {
        assert_eq!(
            classify("Heat pump pilot expands", "", "Local Paper"),
            (Archetype::ShapeOfThings, 3.5)
        );
    }

    #[test]
    fn test_default_verdict() {
        assert_eq!(
            classify("Weather was nice", "People went outside.", "Local Paper"),
            (Archetype::ShapeOfThings, FALLBACK_CONFIDENCE)
        );
    }

    #[test]
    fn test_case_insensitive_patterns() {
        // The counter-intuitive study pattern is written as "RCT"
        assert_eq!(
            classify("New rct on sugar", "", "Journal").0,
            Archetype::CounterIntuitive
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut patterns = ArchetypePatterns::default();
        patterns.outlier = vec!["(unclosed".to_string()];
        let err = RuleTable::from_patterns(&patterns).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::InvalidPattern { archetype: Archetype::Outlier, .. }
        ));
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Archetype> = table().rules().iter().map(|r| r.archetype()).collect();
        assert_eq!(order, RULE_PRIORITY.to_vec());
    }

    #[test]
    fn test_fit() {
        let m = RuleMatch {
            archetype: Archetype::Canary,
            confidence: 4.5,
        };
        assert!((m.fit() - 0.9).abs() < 1e-9);
    }
}
