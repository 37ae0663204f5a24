//! Token-set similarity ratio
//!
//! An order-insensitive word-overlap measure on a 0-100 scale. Both strings
//! are lowercased, non-alphanumeric characters become spaces, and the
//! resulting word sets are compared:
//!
//! 1. If the sets share words and one set is contained in the other, the
//!    ratio is 100.
//! 2. Otherwise the ratio is the best Indel similarity among
//!    `(diff_a, diff_b)`, `(common, common + diff_a)` and
//!    `(common, common + diff_b)`, where each part is the sorted words joined
//!    by single spaces.

use rapidfuzz::distance::indel;
use std::collections::BTreeSet;

/// Compute the token-set similarity ratio of two strings (0-100)
///
/// # Examples
///
/// ```
/// use scout_domain::token_set_ratio;
///
/// // Word order does not matter
/// assert_eq!(token_set_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"), 100.0);
///
/// // A title contained in another scores 100
/// assert_eq!(token_set_ratio("drug shortage", "drug shortage again"), 100.0);
///
/// // No shared words, nothing similar
/// assert!(token_set_ratio("heat pumps", "school meals") < 50.0);
/// ```
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).map(String::as_str).collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    if !common.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let common_joined = common.join(" ");
    let diff_ab_joined = diff_ab.join(" ");
    let diff_ba_joined = diff_ba.join(" ");

    let common_ab = join_nonempty(&common_joined, &diff_ab_joined);
    let common_ba = join_nonempty(&common_joined, &diff_ba_joined);

    // The diff comparison is normalized against the full "common + diff"
    // lengths, not the diff lengths alone
    let dist = indel::distance(diff_ab_joined.chars(), diff_ba_joined.chars());
    let total_len = common_ab.chars().count() + common_ba.chars().count();
    let result = 100.0 * (1.0 - dist as f64 / total_len as f64);

    if common_joined.is_empty() {
        return result;
    }

    let common_ab_ratio =
        100.0 * indel::normalized_similarity(common_joined.chars(), common_ab.chars());
    let common_ba_ratio =
        100.0 * indel::normalized_similarity(common_joined.chars(), common_ba.chars());

    result.max(common_ab_ratio).max(common_ba_ratio)
}

/// Lowercase, replace non-alphanumerics with spaces and collect the words
fn tokenize(s: &str) -> BTreeSet<String> {
    let cleaned: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    cleaned.split_whitespace().map(str::to_string).collect()
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}
