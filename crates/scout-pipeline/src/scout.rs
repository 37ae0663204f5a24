//! Pipeline orchestration

use crate::{RunMetrics, ScoutConfig, ScoutError};
use chrono::{DateTime, Utc};
use scout_classifier::{EnsembleClassifier, RuleTable};
use scout_dedup::{cap_per_source, DedupOutcome, Deduplicator, DroppedItem, WhatlangDetector};
use scout_domain::{ArchetypeJudge, CandidateItem, LanguageDetector, ScoredRow, Verdict};
use scout_judge::{AbstainingJudge, JudgeCache};
use scout_scorer::{ReferenceTitles, Scorer};
use scout_shortlist::{ShortlistEntry, ShortlistSelector};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Everything a run produced
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// The selected shortlist, in selection order
    pub shortlist: Vec<ShortlistEntry>,

    /// Every row that was scored, in input order
    pub scored: Vec<ScoredRow>,

    /// Items removed by the deduplicator
    pub dropped: Vec<DroppedItem>,

    /// Run counters
    pub metrics: RunMetrics,
}

/// The full dedup, classify, score and shortlist pipeline
pub struct Scout<J = AbstainingJudge, L = WhatlangDetector> {
    config: ScoutConfig,
    deduplicator: Deduplicator<L>,
    classifier: EnsembleClassifier<J>,
    scorer: Scorer,
    selector: ShortlistSelector,
}

impl<J> Scout<J>
where
    J: ArchetypeJudge,
    J::Error: Display,
{
    /// Build every stage from the configuration
    pub fn new(config: ScoutConfig, judge: J) -> Result<Self, ScoutError> {
        Self::with_cache(config, judge, Arc::new(JudgeCache::default()))
    }

    /// Build every stage, sharing an existing judge cache
    pub fn with_cache(
        config: ScoutConfig,
        judge: J,
        cache: Arc<JudgeCache>,
    ) -> Result<Self, ScoutError> {
        let detector = WhatlangDetector::new(config.dedup.require_reliable_detection);
        Scout::with_detector(config, judge, cache, detector)
    }
}

impl<J, L> Scout<J, L>
where
    J: ArchetypeJudge,
    J::Error: Display,
    L: LanguageDetector,
{
    /// Build every stage around a custom language detector
    pub fn with_detector(
        config: ScoutConfig,
        judge: J,
        cache: Arc<JudgeCache>,
        detector: L,
    ) -> Result<Self, ScoutError> {
        config.validate()?;

        let rules = RuleTable::from_patterns(&config.archetype_patterns)?;
        let classifier =
            EnsembleClassifier::with_cache(rules, judge, config.ensemble.clone(), cache);
        let scorer = Scorer::new(config.scorer_config())?;
        let selector = ShortlistSelector::new(config.shortlist.clone())?;
        let deduplicator = Deduplicator::with_detector(config.dedup_config(), detector);

        Ok(Self {
            config,
            deduplicator,
            classifier,
            scorer,
            selector,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Get the judge cache
    pub fn cache(&self) -> &Arc<JudgeCache> {
        self.classifier.cache()
    }

    /// Classify a single item
    pub fn classify(&self, item: &CandidateItem) -> Verdict {
        self.classifier.classify(item)
    }

    /// Deduplicate and cap a batch without scoring it
    pub fn dedupe(&self, items: Vec<CandidateItem>) -> DedupOutcome {
        self.deduplicator.dedupe_and_cap(items)
    }

    /// Run the whole pipeline over one batch
    pub fn run(
        &self,
        items: Vec<CandidateItem>,
        now: DateTime<Utc>,
    ) -> Result<RunReport, ScoutError> {
        let started = Instant::now();
        let hits_before = self.cache().hits();
        let mut metrics = RunMetrics::new();
        metrics.input = items.len();

        if items.is_empty() {
            info!("No items to process");
            return Ok(RunReport {
                metrics,
                ..RunReport::default()
            });
        }

        let reference = ReferenceTitles::from_items(&items);

        let outcome = self.deduplicator.dedupe(items);
        for dropped in &outcome.dropped {
            metrics.record_drop(&dropped.reason);
        }

        let deduped = outcome.kept.len();
        let kept = cap_per_source(outcome.kept, self.deduplicator.config().per_source_cap);
        metrics.capped = deduped - kept.len();

        let mut classified = Vec::with_capacity(kept.len());
        for item in kept {
            let verdict = self.classifier.classify(&item);
            metrics.record_verdict(verdict.source);
            classified.push((item, verdict));
        }

        let scored = self.scorer.score_batch(&classified, &reference, now)?;
        let shortlist = self.selector.select(&scored);
        for entry in &shortlist {
            metrics.record_selection(entry.phase);
        }

        metrics.cache_hits = self.cache().hits().saturating_sub(hits_before);
        metrics.elapsed = started.elapsed();

        info!(
            input = metrics.input,
            dropped = metrics.total_dropped(),
            capped = metrics.capped,
            scored = scored.len(),
            shortlisted = shortlist.len(),
            "Run complete"
        );

        Ok(RunReport {
            shortlist,
            scored,
            dropped: outcome.dropped,
            metrics,
        })
    }
}
