// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Simple profiling counters for understanding hot paths.
//!
//! Counters are process-wide and shared by every set, so readings taken
//! while other threads use sets will include their work too.

use std::sync::atomic::{AtomicU64, Ordering};

pub static SEARCH_STEPS: AtomicU64 = AtomicU64::new(0);
pub static PROMOTIONS: AtomicU64 = AtomicU64::new(0);
pub static DEMOTIONS: AtomicU64 = AtomicU64::new(0);
pub static REBALANCES: AtomicU64 = AtomicU64::new(0);
pub static SLOT_REUSES: AtomicU64 = AtomicU64::new(0);

/// One forward hop during a search descent.
#[inline]
pub fn search_step() {
    SEARCH_STEPS.fetch_add(1, Ordering::Relaxed);
}

/// The active level was raised by an insert.
#[inline]
pub fn promotion() {
    PROMOTIONS.fetch_add(1, Ordering::Relaxed);
}

/// The active level was lowered by a removal.
#[inline]
pub fn demotion() {
    DEMOTIONS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn rebalance() {
    REBALANCES.fetch_add(1, Ordering::Relaxed);
}

/// A freed arena slot was handed out again.
#[inline]
pub fn slot_reuse() {
    SLOT_REUSES.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    SEARCH_STEPS.store(0, Ordering::Relaxed);
    PROMOTIONS.store(0, Ordering::Relaxed);
    DEMOTIONS.store(0, Ordering::Relaxed);
    REBALANCES.store(0, Ordering::Relaxed);
    SLOT_REUSES.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let steps = SEARCH_STEPS.load(Ordering::Relaxed);
    let promotions = PROMOTIONS.load(Ordering::Relaxed);
    let demotions = DEMOTIONS.load(Ordering::Relaxed);
    let rebalances = REBALANCES.load(Ordering::Relaxed);
    let reuses = SLOT_REUSES.load(Ordering::Relaxed);

    format!(
        "Search steps: {}, Levels: +{}/-{}, Rebalances: {}, Slot reuses: {}",
        steps, promotions, demotions, rebalances, reuses
    )
}
