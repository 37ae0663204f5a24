//! Signal Scout Archetype Classifier
//!
//! Assigns each candidate item one of six narrative archetypes.
//!
//! # Architecture
//!
//! ```text
//! item -> RuleTable -> (fit >= rules_threshold) -> Verdict(rules)
//!                   \-> JudgeCache -> ArchetypeJudge -> Verdict(judge | fallback)
//! ```
//!
//! The [`RuleTable`] is a ranked list of [`ArchetypeRule`]s evaluated in a
//! fixed order; the first match wins. When the winning rule's confidence is
//! below the rules threshold, the [`EnsembleClassifier`] asks a pluggable
//! judge and keeps the rule verdict unless the judge is confident enough.
//!
//! # Examples
//!
//! ```
//! use scout_classifier::{EnsembleClassifier, EnsembleConfig, RuleTable};
//! use scout_domain::{Archetype, VerdictSource};
//! use scout_judge::AbstainingJudge;
//!
//! let rules = RuleTable::with_default_patterns().unwrap();
//! let classifier = EnsembleClassifier::new(rules, AbstainingJudge, EnsembleConfig::default());
//!
//! let verdict = classifier.classify_parts("Artists collective faces backlash", "", "Arts Desk");
//! assert_eq!(verdict.archetype, Archetype::Canary);
//! assert_eq!(verdict.source, VerdictSource::Rules);
//! ```

#![warn(missing_docs)]

mod ensemble;
mod error;
mod patterns;
mod rules;

pub use ensemble::{EnsembleClassifier, EnsembleConfig};
pub use error::ClassifierError;
pub use patterns::ArchetypePatterns;
pub use rules::{ArchetypeRule, RuleMatch, RuleTable, FALLBACK_CONFIDENCE, RULE_PRIORITY};
