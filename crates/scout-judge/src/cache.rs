//! Bounded memo of judge answers
//!
//! Keyed by the exact (title, summary, source) triple. Oldest entries are
//! evicted first once the cache is full.

use parking_lot::Mutex;
use scout_domain::traits::{JudgeRequest, Judgement};
use std::collections::{HashMap, VecDeque};

/// Bounded, shareable cache of judge answers
///
/// # Examples
///
/// ```
/// use scout_domain::traits::{JudgeRequest, Judgement};
/// use scout_judge::JudgeCache;
///
/// let cache = JudgeCache::new(2);
/// let request = JudgeRequest { title: "t".into(), summary: "s".into(), source: "x".into() };
///
/// let first = cache.get_or_insert_with(&request, || Judgement::Abstain);
/// let second = cache.get_or_insert_with(&request, || unreachable!());
/// assert_eq!(first, second);
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug)]
pub struct JudgeCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<JudgeRequest, Judgement>,
    order: VecDeque<JudgeRequest>,
    hits: u64,
    misses: u64,
}

impl JudgeCache {
    /// Default number of memoized answers
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create a cache holding at most `capacity` answers
    ///
    /// A capacity of zero disables memoization.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Maximum number of answers held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a memoized answer
    pub fn get(&self, request: &JudgeRequest) -> Option<Judgement> {
        let mut inner = self.inner.lock();
        let found = inner.entries.get(request).copied();
        match found {
            Some(_) => inner.hits += 1,
            None => inner.misses += 1,
        }
        found
    }

    /// Memoize an answer, evicting the oldest entry when full
    pub fn insert(&self, request: JudgeRequest, judgement: Judgement) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock();
        if inner.entries.contains_key(&request) {
            inner.entries.insert(request, judgement);
            return;
        }

        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(request.clone());
        inner.entries.insert(request, judgement);
    }

    /// Return the memoized answer or compute and memoize it
    ///
    /// The lock is not held while `compute` runs.
    pub fn get_or_insert_with<F>(&self, request: &JudgeRequest, compute: F) -> Judgement
    where
        F: FnOnce() -> Judgement,
    {
        if let Some(judgement) = self.get(request) {
            return judgement;
        }

        let judgement = compute();
        self.insert(request.clone(), judgement);
        judgement
    }

    /// Number of memoized answers
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.inner.lock().hits
    }

    /// Lookups that missed
    pub fn misses(&self) -> u64 {
        self.inner.lock().misses
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        *inner = CacheInner::default();
    }
}

impl Default for JudgeCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::Archetype;

    fn request(title: &str) -> JudgeRequest {
        JudgeRequest {
            title: title.to_string(),
            summary: String::new(),
            source: String::new(),
        }
    }

    #[test]
    fn test_get_or_insert_memoizes() {
        let cache = JudgeCache::default();
        let mut calls = 0;

        for _ in 0..3 {
            cache.get_or_insert_with(&request("a"), || {
                calls += 1;
                Judgement::Abstain
            });
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_key_is_the_full_triple() {
        let cache = JudgeCache::default();
        let a = request("a");
        let b = JudgeRequest { source: "other".to_string(), ..request("a") };

        cache.insert(a.clone(), Judgement::Abstain);
        assert!(cache.get(&a).is_some());
        assert!(cache.get(&b).is_none());
    }

    #[test]
    fn test_eviction_is_oldest_first() {
        let cache = JudgeCache::new(2);
        cache.insert(request("a"), Judgement::Abstain);
        cache.insert(request("b"), Judgement::Abstain);
        cache.insert(request("c"), Judgement::Abstain);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&request("a")).is_none());
        assert!(cache.get(&request("b")).is_some());
        assert!(cache.get(&request("c")).is_some());
    }

    #[test]
    fn test_reinsert_updates_without_growing() {
        let cache = JudgeCache::new(2);
        let label = Judgement::Label { archetype: Archetype::Canary, confidence: 0.9 };
        cache.insert(request("a"), Judgement::Abstain);
        cache.insert(request("a"), label);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&request("a")), Some(label));
    }

    #[test]
    fn test_zero_capacity_disables_memoization() {
        let cache = JudgeCache::new(0);
        cache.insert(request("a"), Judgement::Abstain);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = JudgeCache::default();
        cache.insert(request("a"), Judgement::Abstain);
        cache.get(&request("a"));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_cache_is_shareable_across_threads() {
        let cache = std::sync::Arc::new(JudgeCache::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    cache.get_or_insert_with(&request(&format!("t{}", i % 2)), || Judgement::Abstain)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 2);
    }
}
