// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tests for the public set API: scenarios, boundaries and error reporting.

use std::any::Any;

use skipset::Config;
use skipset::SetError;
use skipset::SkipSet;

// =============================================================================
// Helper functions
// =============================================================================

fn contents<T: Copy>(set: &SkipSet<T>) -> Vec<T> {
    return set.iter().copied().collect();
}

// =============================================================================
// Scenario tests
// =============================================================================

#[test]
fn insert_remove_reinsert() {
    let mut set = SkipSet::new();
    for value in [5, 3, 8, 1] {
        assert!(set.insert(value));
    }
    assert_eq!(contents(&set), vec![1, 3, 5, 8]);
    assert_eq!(set.first(), Ok(&1));
    assert_eq!(set.last(), Ok(&8));
    assert_eq!(set.len(), 4);

    assert!(set.remove(&3));
    assert_eq!(contents(&set), vec![1, 5, 8]);
    assert_eq!(set.len(), 3);
    assert!(!set.contains(&3));

    assert!(set.insert(3));
    assert_eq!(contents(&set), vec![1, 3, 5, 8]);
    assert_eq!(set.len(), 4);

    let empty: SkipSet<i32> = SkipSet::new();
    assert_eq!(empty.first(), Err(SetError::EmptyCollection));
}

#[test]
fn strings_and_borrowed_lookups() {
    let mut set = SkipSet::new();
    for word in ["delta", "alpha", "charlie", "bravo"] {
        set.insert(word.to_string());
    }
    assert!(set.contains("alpha"));
    assert!(!set.contains("echo"));
    assert_eq!(set.first().map(String::as_str), Ok("alpha"));
    assert_eq!(set.last().map(String::as_str), Ok("delta"));

    assert!(set.remove("charlie"));
    let words: Vec<&str> = set.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["alpha", "bravo", "delta"]);
}

#[test]
fn descending_and_ascending_inserts_agree() {
    let up: SkipSet<u32> = (0..2000).collect();
    let down: SkipSet<u32> = (0..2000).rev().collect();
    assert_eq!(up, down);
    assert_eq!(contents(&up), (0..2000).collect::<Vec<_>>());
}

#[test]
fn drain_from_both_ends() {
    let mut set: SkipSet<i32> = (0..100).collect();
    let mut low = Vec::new();
    let mut high = Vec::new();
    while !set.is_empty() {
        low.extend(set.pop_first());
        high.extend(set.pop_last());
    }
    assert_eq!(low, (0..50).collect::<Vec<_>>());
    assert_eq!(high, (50..100).rev().collect::<Vec<_>>());
    assert_eq!(set.level(), 1);
}

// =============================================================================
// Error reporting
// =============================================================================

#[test]
fn absent_values_are_invalid() {
    let mut set: SkipSet<String> = SkipSet::new();
    let err = set.try_insert(None).unwrap_err();
    assert_eq!(err, SetError::InvalidArgument);
    assert_eq!(err.to_string(), "absent values cannot be inserted");
    assert!(set.is_empty());
}

#[test]
fn empty_boundaries_fail() {
    let mut set: SkipSet<i32> = SkipSet::new();
    assert_eq!(set.first(), Err(SetError::EmptyCollection));
    assert_eq!(set.last(), Err(SetError::EmptyCollection));

    set.insert(1);
    set.remove(&1);
    assert_eq!(set.first(), Err(SetError::EmptyCollection));
    assert_eq!(set.last(), Err(SetError::EmptyCollection));
}

#[test]
fn range_views_fail_loudly() {
    let set: SkipSet<i32> = (0..10).collect();
    for result in [set.head_set(&5), set.tail_set(&5), set.sub_set(&2, &7)] {
        match result {
            Err(SetError::Unsupported(_)) => {}
            other => panic!("expected Unsupported, got {:?}", other),
        }
    }
}

#[test]
fn heterogeneous_lookups_are_lenient() {
    let mut set: SkipSet<i64> = (0..10).collect();
    let queries: Vec<Box<dyn Any>> = vec![
        Box::new(3i64),
        Box::new(3i32),
        Box::new("3"),
        Box::new(()),
    ];
    let found: Vec<bool> = queries.iter().map(|query| set.contains_any(&**query)).collect();
    assert_eq!(found, vec![true, false, false, false]);

    assert!(!set.remove_any(&3u8));
    assert!(set.remove_any(&3i64));
    assert_eq!(set.len(), 9);
}

// =============================================================================
// Maintenance
// =============================================================================

#[test]
fn rebalance_after_skewed_removals() {
    let mut set = SkipSet::with_seed(99);
    for value in 0..2000 {
        set.insert(value);
    }
    // Leave a sparse tail behind.
    for value in 0..1900 {
        set.remove(&value);
    }
    let before = contents(&set);
    set.rebalance();
    assert_eq!(contents(&set), before);
    assert_eq!(set.len(), 100);
    assert_eq!(set.height_histogram().iter().sum::<usize>(), 100);
}

#[test]
fn seeded_sets_share_layout() {
    let a: SkipSet<i32> = {
        let mut set = SkipSet::with_seed(7);
        set.extend(0..500);
        set
    };
    let b: SkipSet<i32> = {
        let mut set = SkipSet::with_seed(7);
        set.extend(0..500);
        set
    };
    assert_eq!(a.height_histogram(), b.height_histogram());
    assert_eq!(a.level(), b.level());
}

#[test]
fn clear_keeps_config() {
    let mut set = SkipSet::with_config(Config { max_level: 4, seed: Some(1) });
    set.extend(0..1000);
    assert!(set.level() <= 4);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.max_level(), 4);
    set.extend(0..1000);
    assert!(set.level() <= 4);
}
