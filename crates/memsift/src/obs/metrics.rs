use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

//
// Process-wide counters. Relaxed ordering is enough: these are advisory
// tallies, never synchronization.
//

static SHAPE_CACHE_HITS: AtomicU64 = AtomicU64::new(0);
static SHAPE_CACHE_MISSES: AtomicU64 = AtomicU64::new(0);
static PREDICATES_COMPILED: AtomicU64 = AtomicU64::new(0);
static ORDERS_COMPILED: AtomicU64 = AtomicU64::new(0);

///
/// MetricsSnapshot
///
/// Point-in-time copy of the runtime counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub shape_cache_hits: u64,
    pub shape_cache_misses: u64,
    pub predicates_compiled: u64,
    pub orders_compiled: u64,
}

/// Read all counters at once.
#[must_use]
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        shape_cache_hits: SHAPE_CACHE_HITS.load(Ordering::Relaxed),
        shape_cache_misses: SHAPE_CACHE_MISSES.load(Ordering::Relaxed),
        predicates_compiled: PREDICATES_COMPILED.load(Ordering::Relaxed),
        orders_compiled: ORDERS_COMPILED.load(Ordering::Relaxed),
    }
}

/// Zero all counters.
pub fn reset() {
    SHAPE_CACHE_HITS.store(0, Ordering::Relaxed);
    SHAPE_CACHE_MISSES.store(0, Ordering::Relaxed);
    PREDICATES_COMPILED.store(0, Ordering::Relaxed);
    ORDERS_COMPILED.store(0, Ordering::Relaxed);
}

pub(crate) fn shape_cache_hit() {
    SHAPE_CACHE_HITS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn shape_cache_miss() {
    SHAPE_CACHE_MISSES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn predicate_compiled() {
    PREDICATES_COMPILED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn order_compiled() {
    ORDERS_COMPILED.fetch_add(1, Ordering::Relaxed);
}

///
/// TESTS
///
