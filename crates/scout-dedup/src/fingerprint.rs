//! 64-bit SimHash content fingerprint

use sha2::{Digest, Sha256};
use std::collections::HashMap;

const SHINGLE_WIDTH: usize = 4;
const BITS: usize = 64;

/// Fingerprint of an item's title and summary.
///
/// The text is lowercased and stripped of non-word characters, split into
/// overlapping character 4-grams, and each distinct shingle votes on the 64
/// output bits with a weight equal to its count. Returns `None` when the text
/// has no word characters.
pub fn fingerprint(title: &str, summary: &str) -> Option<u64> {
    let cleaned: Vec<char> = format!("{title} {summary}")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let mut counts: HashMap<String, i64> = HashMap::new();
    if cleaned.len() < SHINGLE_WIDTH {
        counts.insert(cleaned.iter().collect(), 1);
    } else {
        for window in cleaned.windows(SHINGLE_WIDTH) {
            *counts.entry(window.iter().collect()).or_insert(0) += 1;
        }
    }

    let mut votes = [0i64; BITS];
    for (shingle, weight) in &counts {
        let hash = shingle_hash(shingle);
        for (bit, vote) in votes.iter_mut().enumerate() {
            if (hash >> bit) & 1 == 1 {
                *vote += weight;
            } else {
                *vote -= weight;
            }
        }
    }

    let value = votes
        .iter()
        .enumerate()
        .filter(|(_, vote)| **vote > 0)
        .fold(0u64, |acc, (bit, _)| acc | (1u64 << bit));

    Some(value)
}

fn shingle_hash(shingle: &str) -> u64 {
    let digest = Sha256::digest(shingle.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = fingerprint("Heat pump orders surge", "Installers report record demand.");
        let b = fingerprint("Heat pump orders surge", "Installers report record demand.");
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let a = fingerprint("Heat pump orders surge!", "Installers report record demand.");
        let b = fingerprint("heat pump orders SURGE", "installers report record demand");
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_word_characters() {
        assert_eq!(fingerprint("", ""), None);
        assert_eq!(fingerprint("!!! ---", "..."), None);
    }

    #[test]
    fn test_short_text_single_shingle() {
        assert!(fingerprint("ab", "").is_some());
    }

    #[test]
    fn test_different_texts_differ() {
        let a = fingerprint("Council pilots four-day week", "Staff wellbeing improved.");
        let b = fingerprint("Semaglutide shortage hits pharmacies", "Patients face delays.");
        assert_ne!(a, b);
    }
}
