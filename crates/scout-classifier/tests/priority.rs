//! Rule priority properties

use proptest::prelude::*;
use scout_classifier::{EnsembleClassifier, EnsembleConfig, RuleTable};
use scout_domain::{Archetype, VerdictSource};
use scout_judge::MockJudge;

const CANARY_TERMS: &[&str] = &["backlash", "recall", "shortage", "blowback", "warning"];
const OUTLIER_TERMS: &[&str] = &["artist", "collective", "lawsuit", "grassroots", "unprecedented"];
const FILLER: &[&str] = &["city", "weekly", "report", "people", "local", "group", "new"];

proptest! {
    #[test]
    fn canary_always_beats_outlier(
        canary in 0..CANARY_TERMS.len(),
        outlier in 0..OUTLIER_TERMS.len(),
        filler in prop::collection::vec(0..FILLER.len(), 0..6),
        canary_in_summary in any::<bool>(),
    ) {
        let rules = RuleTable::with_default_patterns().unwrap();
        let mut words: Vec<&str> = filler.iter().map(|i| FILLER[*i]).collect();
        words.push(OUTLIER_TERMS[outlier]);
        let title = words.join(" ");
        let (title, summary) = if canary_in_summary {
            (title, CANARY_TERMS[canary].to_string())
        } else {
            (format!("{title} {}", CANARY_TERMS[canary]), String::new())
        };

        let m = rules.classify(&title, &summary, "Culture Desk");
        prop_assert_eq!(m.archetype, Archetype::Canary);
        prop_assert_eq!(m.confidence, 4.5);
    }
}

#[test]
fn ensemble_never_consults_judge_for_canary() {
    let judge = MockJudge::default();
    let classifier = EnsembleClassifier::new(
        RuleTable::with_default_patterns().unwrap(),
        judge.clone(),
        EnsembleConfig::default(),
    );

    let verdict = classifier.classify_parts(
        "Artists collective sues over unprecedented backlash",
        "A grassroots lawsuit follows the recall.",
        "Culture Desk",
    );
    assert_eq!(verdict.archetype, Archetype::Canary);
    assert_eq!(verdict.source, VerdictSource::Rules);
    assert_eq!(judge.call_count(), 0);
}
