//! Property tests for score bounds

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use scout_domain::{Archetype, CandidateItem, Verdict, VerdictSource};
use scout_scorer::{Scorer, ScorerConfig};

const WORDS: &[&str] = &[
    "heat pump", "obesity", "childcare", "randomised", "cohort", "sugar", "retrofit", "nursery",
    "council", "trial", "shortage", "doi:", "net zero", "diet", "sleep", "tax",
];
const TIERS: &[&str] = &["policy", "trade", "peer_review", "blog", "unknown"];
const SOURCES: &[&str] = &["Hansard", "Trade Weekly", "NHS Trust", "Local Paper"];

fn text(indices: &[usize]) -> String {
    indices.iter().map(|i| WORDS[*i]).collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn sub_scores_stay_in_range(
        title in prop::collection::vec(0..WORDS.len(), 0..8),
        summary in prop::collection::vec(0..WORDS.len(), 0..12),
        refs in prop::collection::vec(prop::collection::vec(0..WORDS.len(), 1..6), 0..5),
        tier in 0..TIERS.len(),
        source in 0..SOURCES.len(),
        archetype in 0..Archetype::ALL.len(),
        fit in -1.0f64..7.0,
        age_days in -10i64..400,
    ) {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
        let date = (now - Duration::days(age_days)).to_rfc3339();
        let item = CandidateItem::new(
            text(&title),
            text(&summary),
            "https://example.com/x",
            SOURCES[source],
            TIERS[tier],
            date,
        );
        let verdict = Verdict {
            archetype: Archetype::ALL[archetype],
            score: fit,
            source: VerdictSource::Fallback,
            rule_archetype: Archetype::ALL[archetype],
            rule_score: fit,
            judge: None,
        };
        let references: Vec<String> = refs.iter().map(|r| text(r)).collect();

        let scorer = Scorer::new(ScorerConfig::default()).unwrap();
        let row = scorer.score(&item, &verdict, &references, now).unwrap();

        for value in row.scores.values() {
            prop_assert!((0.0..=5.0).contains(&value), "sub-score out of range: {}", value);
        }
        prop_assert!(row.total >= 0.0);
    }
}
