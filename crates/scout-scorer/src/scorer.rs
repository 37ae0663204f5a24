//! Row construction: sub-scores, nudges, total and display fields

use crate::display::{brief_summary, display_date, equity_lens, focus_brand, sentence_signal};
use crate::subscores::{credibility, novelty, recency, relevance};
use crate::{ScoreError, ScorerConfig};
use chrono::{DateTime, Utc};
use scout_dedup::canonical_url;
use scout_domain::{
    clamp_score, is_field_source, round2, Archetype, CandidateItem, DisplayFields, ScoredRow,
    SubScores, Verdict,
};
use tracing::debug;

/// Titles an item's novelty is measured against.
///
/// Holds every title of the input batch keyed by canonical URL, so an item
/// is compared with everything else in the batch but never with itself.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTitles {
    entries: Vec<(String, String)>,
}

impl ReferenceTitles {
    /// Collect the titles of a batch
    pub fn from_items(items: &[CandidateItem]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| (canonical_url(&item.url), item.title.clone()))
                .collect(),
        }
    }

    /// Titles whose canonical URL differs from `canonical`
    pub fn excluding(&self, canonical: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(url, _)| url != canonical)
            .map(|(_, title)| title.as_str())
            .collect()
    }

    /// Number of titles held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no titles are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes scored rows from classified items
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    /// Create a scorer, rejecting an unusable configuration
    pub fn new(config: ScorerConfig) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score one classified item
    pub fn score<S: AsRef<str>>(
        &self,
        item: &CandidateItem,
        verdict: &Verdict,
        reference_titles: &[S],
        now: DateTime<Utc>,
    ) -> Result<ScoredRow, ScoreError> {
        let text = item.text();
        let mission = relevance(&text, &self.config.topic_lattice)?;
        let nudges = &self.config.nudges;

        let mut cred = credibility(&item.tier, &item.summary, &self.config.source_weights);
        let mut nov = novelty(&item.title, reference_titles);
        let mut fit = clamp_score(verdict.score);
        let rec = recency(item.published_at(), now);

        match verdict.archetype {
            Archetype::Outlier => nov = clamp_score(nov + nudges.outlier_novelty_bonus),
            Archetype::Canary => cred = clamp_score(cred + nudges.canary_cred_bonus),
            Archetype::InsightsFromField if is_field_source(&item.source) => {
                fit = clamp_score(fit + nudges.field_fit_bonus)
            }
            _ => {}
        }

        let w = &self.config.weights;
        let total = round2(
            w.relevance * mission.relevance
                + w.credibility * cred
                + w.novelty * nov
                + w.archetype * fit
                + w.recency_bonus * rec,
        );

        let scores = SubScores {
            relevance: round2(mission.relevance),
            credibility: round2(cred),
            novelty: round2(nov),
            archetype_fit: round2(fit),
            recency: round2(rec),
        };

        let (focus, brand) = focus_brand(&item.title, &item.summary);
        let display = DisplayFields {
            display_date: display_date(&item.date),
            signal: sentence_signal(&item.title, &item.summary),
            brief_summary: brief_summary(&item.title, &item.summary),
            equity_consequence: equity_lens(&item.summary).to_string(),
            focus,
            brand,
            mission_tags: mission.matched_terms,
            category_tags: mission.category_tags,
        };

        debug!(
            url = %item.url,
            mission = %mission.mission,
            archetype = %verdict.archetype,
            total,
            "Scored item"
        );

        Ok(ScoredRow {
            item: item.clone(),
            canonical_url: canonical_url(&item.url),
            mission: mission.mission,
            archetype: verdict.archetype,
            verdict_source: verdict.source,
            scores,
            total,
            display,
        })
    }

    /// Score a batch, measuring each item's novelty against every other
    /// title in `reference`
    pub fn score_batch(
        &self,
        classified: &[(CandidateItem, Verdict)],
        reference: &ReferenceTitles,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredRow>, ScoreError> {
        classified
            .iter()
            .map(|(item, verdict)| {
                let others = reference.excluding(&canonical_url(&item.url));
                self.score(item, verdict, others.as_slice(), now)
            })
            .collect()
    }
}
