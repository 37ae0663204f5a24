//! The five independent sub-scores

use crate::{ScoreError, TopicCategory};
use chrono::{DateTime, Utc};
use scout_domain::{clamp_score, token_set_ratio, SCORE_MAX};
use std::collections::{BTreeMap, BTreeSet};

/// Terms in a summary that suggest empirical data
pub const DATA_MARKERS: [&str; 8] = [
    "randomized",
    "randomised",
    "cohort",
    "dataset",
    "preprint",
    "doi:",
    "method",
    "confidence interval",
];

/// Credibility weight for tiers missing from the table
pub const UNKNOWN_TIER_WEIGHT: f64 = 0.5;

/// Credibility bonus for summaries with a data marker
pub const DATA_BONUS: f64 = 0.5;

/// Age in days assumed for unparseable dates
pub const UNKNOWN_AGE_DAYS: i64 = 999;

const RELEVANCE_FULL_MATCHES: f64 = 3.0;
const EXTENDED_TERM_WEIGHT: f64 = 0.5;
const RECENCY_DAYS_PER_POINT: f64 = 6.0;

/// Outcome of matching text against the topic lattice
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceMatch {
    /// Winning mission category
    pub mission: String,

    /// Relevance on the 0-5 scale
    pub relevance: f64,

    /// Sorted distinct terms matched in any category
    pub matched_terms: Vec<String>,

    /// Sorted distinct "category / group" labels whose group holds a matched term
    pub category_tags: Vec<String>,
}

/// Score text against every lattice category; the first category reaching
/// the best weighted count wins
pub fn relevance(text: &str, lattice: &[TopicCategory]) -> Result<RelevanceMatch, ScoreError> {
    let lowered = text.to_lowercase();
    let mut matched = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut best: Option<(&str, f64)> = None;

    for category in lattice {
        let mut seen = BTreeSet::new();
        let mut score = 0.0;
        let weighted = category
            .terms
            .iter()
            .map(|t| (t, 1.0))
            .chain(category.extended.iter().map(|t| (t, EXTENDED_TERM_WEIGHT)));

        for (term, weight) in weighted {
            let term = term.trim().to_lowercase();
            if term.is_empty() || seen.contains(&term) || !lowered.contains(&term) {
                continue;
            }
            score += weight;
            for group in category.groups.iter().filter(|g| g.contains(&term)) {
                tags.insert(format!("{} / {}", category.name, group.name));
            }
            matched.insert(term.clone());
            seen.insert(term);
        }

        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((&category.name, score)),
        }
    }

    let (mission, score) = best.ok_or(ScoreError::EmptyTopicLattice)?;
    Ok(RelevanceMatch {
        mission: mission.to_string(),
        relevance: clamp_score(score / RELEVANCE_FULL_MATCHES * SCORE_MAX),
        matched_terms: matched.into_iter().collect(),
        category_tags: tags.into_iter().collect(),
    })
}

/// Whether a summary mentions any data marker
pub fn has_data_markers(summary: &str) -> bool {
    let lowered = summary.to_lowercase();
    DATA_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Credibility from the tier weight plus the data-marker bonus
pub fn credibility(tier: &str, summary: &str, source_weights: &BTreeMap<String, f64>) -> f64 {
    let base = source_weights
        .get(tier)
        .copied()
        .unwrap_or(UNKNOWN_TIER_WEIGHT);
    let bonus = if has_data_markers(summary) { DATA_BONUS } else { 0.0 };
    clamp_score(SCORE_MAX * base + bonus)
}

/// Novelty against the batch's reference titles
pub fn novelty<S: AsRef<str>>(title: &str, reference_titles: &[S]) -> f64 {
    if reference_titles.is_empty() {
        return SCORE_MAX;
    }
    let best = reference_titles
        .iter()
        .map(|other| token_set_ratio(title, other.as_ref()))
        .fold(0.0_f64, f64::max);
    clamp_score(SCORE_MAX - best / 100.0 * SCORE_MAX)
}

/// Whole days between publication and `now`, at least 1
pub fn age_in_days(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match published {
        Some(ts) => (now - ts).num_days().max(1),
        None => UNKNOWN_AGE_DAYS,
    }
}

/// Recency, losing one point every six days
pub fn recency(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let days = age_in_days(published, now) as f64;
    (SCORE_MAX - (days / RECENCY_DAYS_PER_POINT).min(SCORE_MAX)).max(0.0)
}
