//! Dictionary loading metrics.
//!
//! Counts cache hits, bundle load failures and default-locale fallbacks so
//! the health endpoint can show whether a bundle is silently degrading.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by a `DictionaryLoader`.
#[derive(Debug, Default)]
pub struct DictionaryMetrics {
    /// Dictionary served from the per-locale cache
    cache_hits: AtomicUsize,

    /// Dictionary had to be read from its bundle source
    cache_misses: AtomicUsize,

    /// Candidate locale was absent or unsupported and got coerced
    invalid_locales: AtomicUsize,

    /// Bundle could not be read or parsed
    load_failures: AtomicUsize,

    /// Request was answered with the default locale's dictionary instead
    fallbacks: AtomicUsize,
}

impl DictionaryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_locale(&self) {
        self.invalid_locales.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn invalid_locales(&self) -> usize {
        self.invalid_locales.load(Ordering::Relaxed)
    }

    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_cache_queries = hits + misses;
        let cache_hit_rate = if total_cache_queries > 0 {
            (hits as f64 / total_cache_queries as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            invalid_locales: self.invalid_locales(),
            load_failures: self.load_failures(),
            fallbacks: self.fallbacks(),
        }
    }
}

/// Snapshot of the dictionary counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub invalid_locales: usize,
    pub load_failures: usize,
    pub fallbacks: usize,
}
