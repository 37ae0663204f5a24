//! Rule-plus-judge ensemble

use crate::{ClassifierError, RuleMatch, RuleTable};
use scout_domain::{
    round2, ArchetypeJudge, CandidateItem, JudgeRequest, Judgement, Verdict, VerdictSource,
    SCORE_MAX,
};
use scout_judge::JudgeCache;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Thresholds for trusting the rules and the judge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Minimum rule fit (0-1) to skip the judge
    pub rules_threshold: f64,

    /// Minimum judge confidence (0-1) to accept its label
    pub judge_threshold: f64,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            rules_threshold: 0.7,
            judge_threshold: 0.6,
        }
    }
}

impl EnsembleConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        for (name, value) in [
            ("rules_threshold", self.rules_threshold),
            ("judge_threshold", self.judge_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ClassifierError::Config(format!(
                    "{name} {value} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Archetype classifier that asks a judge when the rules are unsure
pub struct EnsembleClassifier<J> {
    rules: RuleTable,
    judge: J,
    cache: Arc<JudgeCache>,
    config: EnsembleConfig,
}

impl<J> EnsembleClassifier<J>
where
    J: ArchetypeJudge,
    J::Error: Display,
{
    /// Create a classifier with a fresh judge cache
    pub fn new(rules: RuleTable, judge: J, config: EnsembleConfig) -> Self {
        Self::with_cache(rules, judge, config, Arc::new(JudgeCache::default()))
    }

    /// Create a classifier sharing an existing judge cache
    pub fn with_cache(
        rules: RuleTable,
        judge: J,
        config: EnsembleConfig,
        cache: Arc<JudgeCache>,
    ) -> Self {
        Self {
            rules,
            judge,
            cache,
            config,
        }
    }

    /// Get the rule table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Get the judge
    pub fn judge(&self) -> &J {
        &self.judge
    }

    /// Get the judge cache
    pub fn cache(&self) -> &Arc<JudgeCache> {
        &self.cache
    }

    /// Get the configuration
    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    /// Classify a candidate item
    pub fn classify(&self, item: &CandidateItem) -> Verdict {
        self.classify_parts(&item.title, &item.summary, &item.source)
    }

    /// Classify from the raw title, summary and source
    pub fn classify_parts(&self, title: &str, summary: &str, source: &str) -> Verdict {
        let rule = self.rules.classify(title, summary, source);
        let rule_fit = rule.fit();

        if rule_fit >= self.config.rules_threshold {
            return verdict(rule, round2(rule_fit * SCORE_MAX), VerdictSource::Rules, None);
        }

        let request = JudgeRequest {
            title: title.to_string(),
            summary: summary.to_string(),
            source: source.to_string(),
        };
        let judgement = self.cache.get_or_insert_with(&request, || {
            match self.judge.judge(&request) {
                Ok(judgement) => judgement,
                Err(e) => {
                    warn!(title = %title, error = %e, "Judge failed, abstaining");
                    Judgement::Abstain
                }
            }
        });

        match judgement {
            Judgement::Label {
                archetype,
                confidence,
            } if confidence >= self.config.judge_threshold => {
                debug!(title = %title, archetype = %archetype, confidence, "Judge label accepted");
                Verdict {
                    archetype,
                    score: round2(confidence * SCORE_MAX),
                    source: VerdictSource::Judge,
                    rule_archetype: rule.archetype,
                    rule_score: rule.confidence,
                    judge: Some((archetype, confidence)),
                }
            }
            Judgement::Label {
                archetype,
                confidence,
            } => verdict(
                rule,
                round2(rule_fit * SCORE_MAX),
                VerdictSource::Fallback,
                Some((archetype, confidence)),
            ),
            Judgement::Abstain => verdict(
                rule,
                round2(rule_fit * SCORE_MAX),
                VerdictSource::Fallback,
                None,
            ),
        }
    }
}

fn verdict(
    rule: RuleMatch,
    score: f64,
    source: VerdictSource,
    judge: Option<(scout_domain::Archetype, f64)>,
) -> Verdict {
    Verdict {
        archetype: rule.archetype,
        score,
        source,
        rule_archetype: rule.archetype,
        rule_score: rule.confidence,
        judge,
    }
}
