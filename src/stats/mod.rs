//! Usage statistics
//!
//! Tracks how many batches and user agents this instance has generated.
//! Counters live in memory only and reset on restart.

use crate::generator::Variant;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// In-memory usage counters
pub struct Stats {
    /// Total generate/download requests served
    total_batches: AtomicU64,
    /// Total user agents produced
    total_user_agents: AtomicU64,
    /// User agents produced per variant
    variant_counts: RwLock<HashMap<&'static str, u64>>,
}

impl Stats {
    /// Create a new stats instance with all counters at zero
    pub fn new() -> Self {
        Self {
            total_batches: AtomicU64::new(0),
            total_user_agents: AtomicU64::new(0),
            variant_counts: RwLock::new(HashMap::new()),
        }
    }

    /// Record one served batch
    pub fn record_batch(&self, variant: Variant, count: usize) {
        self.total_batches.fetch_add(1, Ordering::Relaxed);
        self.total_user_agents
            .fetch_add(count as u64, Ordering::Relaxed);

        let mut counts = self.variant_counts.write().unwrap();
        *counts.entry(variant.as_str()).or_insert(0) += count as u64;
    }

    /// Total batches served
    pub fn total_batches(&self) -> u64 {
        self.total_batches.load(Ordering::Relaxed)
    }

    /// Total user agents produced
    pub fn total_user_agents(&self) -> u64 {
        self.total_user_agents.load(Ordering::Relaxed)
    }

    /// User agents produced for one variant
    pub fn variant_count(&self, variant: Variant) -> u64 {
        let counts = self.variant_counts.read().unwrap();
        *counts.get(variant.as_str()).unwrap_or(&0)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let stats = Stats::new();

        stats.record_batch(Variant::Dalvik, 5);
        stats.record_batch(Variant::Facebook, 3);

        assert_eq!(stats.total_batches(), 2);
        assert_eq!(stats.total_user_agents(), 8);
        assert_eq!(stats.variant_count(Variant::Dalvik), 5);
        assert_eq!(stats.variant_count(Variant::Facebook), 3);
    }

    #[test]
    fn test_unrecorded_variant_is_zero() {
        let stats = Stats::new();
        assert_eq!(stats.variant_count(Variant::Dalvik), 0);
    }
}
