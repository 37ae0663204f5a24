//! Metrics collected during a run

use scout_dedup::DropReason;
use scout_domain::VerdictSource;
use scout_shortlist::SelectionPhase;
use std::collections::HashMap;
use std::time::Duration;

const DROP_KINDS: [&str; 4] = [
    "duplicate_url",
    "similar_title",
    "similar_content",
    "not_english",
];
const VERDICT_SOURCES: [VerdictSource; 3] = [
    VerdictSource::Rules,
    VerdictSource::Judge,
    VerdictSource::Fallback,
];
const PHASES: [SelectionPhase; 3] = [
    SelectionPhase::Diversity,
    SelectionPhase::Coverage,
    SelectionPhase::Fill,
];

/// Counts from one run of the pipeline
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Items received
    pub input: usize,

    /// Items dropped by the deduplicator, per reason
    pub dropped: HashMap<&'static str, usize>,

    /// Items removed by the per-source cap
    pub capped: usize,

    /// Verdicts per source
    pub verdicts: HashMap<VerdictSource, usize>,

    /// Shortlist entries per phase
    pub selected: HashMap<SelectionPhase, usize>,

    /// Judge cache hits during the run
    pub cache_hits: u64,

    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an item dropped by the deduplicator
    pub fn record_drop(&mut self, reason: &DropReason) {
        *self.dropped.entry(reason.kind()).or_insert(0) += 1;
    }

    /// Record a classification verdict
    pub fn record_verdict(&mut self, source: VerdictSource) {
        *self.verdicts.entry(source).or_insert(0) += 1;
    }

    /// Record a shortlist entry
    pub fn record_selection(&mut self, phase: SelectionPhase) {
        *self.selected.entry(phase).or_insert(0) += 1;
    }

    /// Total items dropped by the deduplicator
    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    /// Total items classified and scored
    pub fn total_scored(&self) -> usize {
        self.verdicts.values().sum()
    }

    /// Total shortlist entries
    pub fn total_selected(&self) -> usize {
        self.selected.values().sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Run Metrics Summary".to_string(),
            "===================".to_string(),
            format!("Input items: {}", self.input),
            format!("Dropped as duplicates: {}", self.total_dropped()),
        ];

        for kind in DROP_KINDS {
            if let Some(count) = self.dropped.get(kind) {
                lines.push(format!("  {}: {}", kind, count));
            }
        }

        lines.push(format!("Removed by source cap: {}", self.capped));
        lines.push(format!("Scored: {}", self.total_scored()));
        for source in VERDICT_SOURCES {
            if let Some(count) = self.verdicts.get(&source) {
                lines.push(format!("  {}: {}", source, count));
            }
        }

        lines.push(format!("Shortlisted: {}", self.total_selected()));
        for phase in PHASES {
            if let Some(count) = self.selected.get(&phase) {
                lines.push(format!("  {}: {}", phase, count));
            }
        }

        lines.push(format!("Judge cache hits: {}", self.cache_hits));
        lines.push(format!("Elapsed: {}ms", self.elapsed.as_millis()));
        lines.join("\n")
    }
}
