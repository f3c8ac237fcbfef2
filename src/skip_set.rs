// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sorted set on a classic skip list.
//!
//! Every element lives in its own node. A node has a tower of forward links,
//! one per level it participates in, plus a backward link to its level-0
//! predecessor. Towers are sized to the node's own height; only the head
//! sentinel carries `max_level` slots.
//!
//! ```text
//! Level 2: HEAD ----------------> 5 ---------------------> NULL
//! Level 1: HEAD ------> 3 ------> 5 ----------> 9 -------> NULL
//! Level 0: HEAD -> 1 -> 3 -> 4 -> 5 -> 7 -> 8 -> 9 -> 12 -> NULL
//!                NULL <- 1 <- 3 <- ...          (backward links)
//! ```
//!
//! Nodes are stored in an arena and addressed by `u32` indices. Backward
//! links are plain indices, so nothing in the structure owns anything but
//! the arena itself. Removed slots go on a free list and are reused.
//!
//! # Operations
//!
//! - `insert(value)`: O(log n) expected, `false` if already present
//! - `contains(value)`: O(log n) expected
//! - `remove(value)` / `take(value)`: O(log n) expected
//! - `first()`: O(1), `last()`: O(log n) expected
//! - `pop_first()`: O(1), `pop_last()`: O(log n) expected
//! - `rebalance()`: O(n log n) expected, only when asked for

use std::any::Any;
use std::borrow::Borrow;
use std::cmp::Ordering;

use smallvec::SmallVec;
use smallvec::smallvec;

use crate::error::SetError;
use crate::iter::Iter;
use crate::level::Config;
use crate::level::LevelGenerator;
use crate::level::MAX_LEVEL;
use crate::profiling;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// The head sentinel always sits in the first arena slot.
pub(crate) const HEAD: Idx = 0;

/// Forward links. Most towers are one or two levels tall.
type Tower = SmallVec<[Idx; 4]>;

/// Splice points gathered during a descent, one per level.
type Path = [Idx; MAX_LEVEL];

pub(crate) struct Node<T> {
    /// `None` for the head and for free slots.
    pub(crate) value: Option<T>,
    pub(crate) next: Tower,
    /// Level-0 predecessor, or `NULL` for the first node.
    pub(crate) prev: Idx,
}

impl<T> Node<T> {
    fn new(value: T, height: usize) -> Self {
        return Node {
            value: Some(value),
            next: smallvec![NULL; height],
            prev: NULL,
        };
    }

    fn new_head(max_level: usize) -> Self {
        return Node {
            value: None,
            next: smallvec![NULL; max_level],
            prev: NULL,
        };
    }

    pub(crate) fn height(&self) -> usize {
        return self.next.len();
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        return Node {
            value: self.value.clone(),
            next: self.next.clone(),
            prev: self.prev,
        };
    }
}

/// A sorted set of unique elements with expected O(log n) operations.
///
/// Elements are ordered by their `Ord` implementation, always `T::cmp`.
/// There is no way to plug in another comparator and no `comparator()`
/// accessor. For another order, wrap the element type: `SkipSet<Reverse<T>>`
/// (see [`std::cmp::Reverse`]) iterates in descending order.
#[derive(Clone)]
pub struct SkipSet<T> {
    /// Arena of nodes, head first.
    nodes: Vec<Node<T>>,
    /// Free slots left behind by removals.
    free_list: Vec<Idx>,
    /// Number of head levels in use, in `1..=max_level`.
    level: usize,
    /// Number of elements.
    len: usize,
    levels: LevelGenerator,
}

impl<T> SkipSet<T> {
    /// Create an empty set with the default config.
    pub fn new() -> SkipSet<T> {
        return SkipSet::with_config(Config::default());
    }

    /// Create an empty set whose tower heights come from a fixed seed.
    pub fn with_seed(seed: u64) -> SkipSet<T> {
        return SkipSet::with_config(Config::seeded(seed));
    }

    pub fn with_config(config: Config) -> SkipSet<T> {
        let levels = LevelGenerator::new(&config);
        return SkipSet {
            nodes: vec![Node::new_head(levels.max_level())],
            free_list: Vec::new(),
            level: 1,
            len: 0,
            levels,
        };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of levels currently in use.
    pub fn level(&self) -> usize {
        return self.level;
    }

    /// Tallest tower this set will ever build.
    pub fn max_level(&self) -> usize {
        return self.levels.max_level();
    }

    /// Drop every element and start over with a fresh head.
    pub fn clear(&mut self) {
        let max_level = self.max_level();
        self.nodes.clear();
        self.nodes.push(Node::new_head(max_level));
        self.free_list.clear();
        self.level = 1;
        self.len = 0;
    }

    /// The smallest element.
    pub fn first(&self) -> Result<&T, SetError> {
        let idx = self.node(HEAD).next[0];
        if idx == NULL {
            return Err(SetError::EmptyCollection);
        }
        return self.node(idx).value.as_ref().ok_or(SetError::EmptyCollection);
    }

    /// The largest element, found by descending the towers.
    pub fn last(&self) -> Result<&T, SetError> {
        let idx = self.last_idx();
        if idx == HEAD {
            return Err(SetError::EmptyCollection);
        }
        return self.node(idx).value.as_ref().ok_or(SetError::EmptyCollection);
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter::new(self);
    }

    /// Count of nodes per tower height; `histogram[h - 1]` is the number of
    /// nodes of height `h`.
    pub fn height_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.max_level()];
        let mut idx = self.node(HEAD).next[0];
        while idx != NULL {
            let node = self.node(idx);
            histogram[node.height() - 1] += 1;
            idx = node.next[0];
        }
        return histogram;
    }

    // --- Node access helpers ---

    pub(crate) fn node(&self, idx: Idx) -> &Node<T> {
        return &self.nodes[idx as usize];
    }

    pub(crate) fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        return &mut self.nodes[idx as usize];
    }

    fn alloc_node(&mut self, value: T, height: usize) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            profiling::slot_reuse();
            let node = self.node_mut(idx);
            node.value = Some(value);
            node.next.clear();
            node.next.resize(height, NULL);
            node.prev = NULL;
            return idx;
        }

        assert!(self.nodes.len() < NULL as usize, "skip set arena is full");
        let idx = self.nodes.len() as Idx;
        self.nodes.push(Node::new(value, height));
        return idx;
    }

    /// Release an unlinked node, handing back its value.
    fn free_node(&mut self, idx: Idx) -> Option<T> {
        let node = self.node_mut(idx);
        let value = node.value.take();
        node.next.clear();
        node.prev = NULL;
        self.free_list.push(idx);
        return value;
    }

    /// Index of the last node, or `HEAD` if the set is empty.
    pub(crate) fn last_idx(&self) -> Idx {
        let mut idx = HEAD;
        for level in (0..self.level).rev() {
            loop {
                let next = self.node(idx).next[level];
                if next == NULL {
                    break;
                }
                idx = next;
            }
        }
        return idx;
    }

    /// Predecessors of the last node at every active level.
    fn path_to_last(&self, last: Idx) -> Path {
        let mut path = [HEAD; MAX_LEVEL];
        let mut idx = HEAD;
        for level in (0..self.level).rev() {
            loop {
                let next = self.node(idx).next[level];
                if next == NULL || next == last {
                    break;
                }
                idx = next;
            }
            path[level] = idx;
        }
        return path;
    }

    /// Unlink `target` given its predecessor at every active level.
    fn unlink(&mut self, target: Idx, path: &Path) -> Option<T> {
        for level in 0..self.level {
            let pred = path[level];
            // Above the target's tower the predecessor never points at it.
            if self.node(pred).next[level] != target {
                break;
            }
            let next = self.node(target).next[level];
            self.node_mut(pred).next[level] = next;
        }

        let succ = self.node(target).next[0];
        let prev = self.node(target).prev;
        if succ != NULL {
            self.node_mut(succ).prev = prev;
        }

        while self.level > 1 && self.node(HEAD).next[self.level - 1] == NULL {
            self.level -= 1;
            profiling::demotion();
        }

        self.len -= 1;
        return self.free_node(target);
    }
}

impl<T: Ord> SkipSet<T> {
    /// Walk down from the top active level, advancing while the next value
    /// is strictly less than `value`. Calls `visit(level, idx)` with the
    /// rightmost node before `value` at each level, and returns the level-0
    /// one (possibly `HEAD`).
    fn descend<Q, F>(&self, value: &Q, mut visit: F) -> Idx
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnMut(usize, Idx),
    {
        let mut idx = HEAD;
        for level in (0..self.level).rev() {
            loop {
                let next = self.node(idx).next[level];
                if next == NULL {
                    break;
                }
                match &self.node(next).value {
                    Some(v) if Ord::cmp(value, v.borrow()) == Ordering::Greater => {
                        profiling::search_step();
                        idx = next;
                    }
                    _ => break,
                }
            }
            visit(level, idx);
        }
        return idx;
    }

    /// Does the node at `idx` hold a value equal to `value`?
    fn holds<Q>(&self, idx: Idx, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if idx == NULL {
            return false;
        }
        return match &self.node(idx).value {
            Some(v) => Ord::cmp(value, v.borrow()) == Ordering::Equal,
            None => false,
        };
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let pred = self.descend(value, |_, _| {});
        return self.holds(self.node(pred).next[0], value);
    }

    /// Insert a value. Returns `false`, leaving the set untouched, if an
    /// equal value is already present.
    ///
    /// # Panics
    ///
    /// Node slots are addressed by `u32`. Panics if the set would need more
    /// than `u32::MAX - 1` live slots; slots freed by removals are reused
    /// before the arena grows.
    pub fn insert(&mut self, value: T) -> bool {
        let mut path = [HEAD; MAX_LEVEL];
        let pred = self.descend(&value, |level, idx| path[level] = idx);
        if self.holds(self.node(pred).next[0], &value) {
            return false;
        }

        let height = self.levels.random_level();
        if height > self.level {
            // path is already HEAD on the newly active levels
            self.level = height;
            profiling::promotion();
        }

        let new_idx = self.alloc_node(value, height);
        for level in 0..height {
            let pred = path[level];
            let next = self.node(pred).next[level];
            self.node_mut(new_idx).next[level] = next;
            self.node_mut(pred).next[level] = new_idx;
        }

        let succ = self.node(new_idx).next[0];
        if succ != NULL {
            self.node_mut(succ).prev = new_idx;
        }
        self.node_mut(new_idx).prev = if pred == HEAD { NULL } else { pred };

        self.len += 1;
        self.check_splice(&path);
        return true;
    }

    /// Insert a value that may be absent, for callers holding optional input.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<bool, SetError> {
        let value = value.ok_or(SetError::InvalidArgument)?;
        return Ok(self.insert(value));
    }

    /// Remove a value. Returns `false` if it was not present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        return self.take(value).is_some();
    }

    /// Remove a value and hand it back.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = [HEAD; MAX_LEVEL];
        let pred = self.descend(value, |level, idx| path[level] = idx);
        let target = self.node(pred).next[0];
        if !self.holds(target, value) {
            return None;
        }

        let removed = self.unlink(target, &path);
        self.check_splice(&path);
        return removed;
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let target = self.node(HEAD).next[0];
        if target == NULL {
            return None;
        }

        // The first node hangs directly off the head at every level it has.
        let path = [HEAD; MAX_LEVEL];
        let removed = self.unlink(target, &path);
        self.check_splice(&path);
        return removed;
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let target = self.last_idx();
        if target == HEAD {
            return None;
        }

        let path = self.path_to_last(target);
        let removed = self.unlink(target, &path);
        self.check_splice(&path);
        return removed;
    }

    /// Membership test for values of unknown type. Anything that is not a
    /// `T` is simply not in the set.
    pub fn contains_any(&self, value: &dyn Any) -> bool
    where
        T: 'static,
    {
        return match value.downcast_ref::<T>() {
            Some(value) => self.contains(value),
            None => false,
        };
    }

    /// Removal for values of unknown type. Anything that is not a `T` is
    /// reported as not found.
    pub fn remove_any(&mut self, value: &dyn Any) -> bool
    where
        T: 'static,
    {
        return match value.downcast_ref::<T>() {
            Some(value) => self.remove(value),
            None => false,
        };
    }

    /// Rebuild every tower from scratch with fresh random heights.
    ///
    /// Contents and order are unchanged. Costs O(n log n), and never runs
    /// on its own.
    pub fn rebalance(&mut self) {
        let mut values = Vec::with_capacity(self.len);
        let mut idx = self.node(HEAD).next[0];
        while idx != NULL {
            let node = self.node_mut(idx);
            idx = node.next[0];
            values.extend(node.value.take());
        }

        self.clear();
        for value in values {
            self.insert(value);
        }
        profiling::rebalance();
        self.check_invariants();
    }

    // --- Invariant checking ---

    /// Both nodes hold values and the first sorts strictly before the second.
    #[cfg(debug_assertions)]
    fn in_order(&self, a: Idx, b: Idx) -> bool {
        return match (&self.node(a).value, &self.node(b).value) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        };
    }

    /// Check the links around a splice point after an insert or removal.
    /// Only touches the nodes on `path` and their neighbours, so it stays
    /// O(level) per mutation.
    #[cfg(debug_assertions)]
    fn check_splice(&self, path: &Path) {
        assert!(
            (1..=self.max_level()).contains(&self.level),
            "INVARIANT VIOLATED: level={} outside 1..={}",
            self.level,
            self.max_level()
        );
        if self.level > 1 {
            assert_ne!(
                self.node(HEAD).next[self.level - 1],
                NULL,
                "INVARIANT VIOLATED: top level {} is empty",
                self.level
            );
        }

        for level in 0..self.level {
            let pred = path[level];
            let next = self.node(pred).next[level];
            if next == NULL {
                continue;
            }
            assert!(self.node(next).height() > level, "INVARIANT VIOLATED: node {} too short", next);
            if pred != HEAD {
                assert!(self.in_order(pred, next), "INVARIANT VIOLATED: order at level {}", level);
            }
            let after = self.node(next).next[level];
            if after != NULL {
                assert!(self.in_order(next, after), "INVARIANT VIOLATED: order at level {}", level);
            }
        }

        let pred = path[0];
        let next = self.node(pred).next[0];
        if next != NULL {
            let expected = if pred == HEAD { NULL } else { pred };
            assert_eq!(self.node(next).prev, expected, "INVARIANT VIOLATED: backward link of node {}", next);
            let after = self.node(next).next[0];
            if after != NULL {
                assert_eq!(self.node(after).prev, next, "INVARIANT VIOLATED: backward link of node {}", after);
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_splice(&self, _path: &Path) {}

    /// Walk the whole structure and check every invariant. O(n * level), so
    /// it runs after a rebalance and from tests, not after every mutation.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let head = self.node(HEAD);
        assert!(head.value.is_none(), "INVARIANT VIOLATED: head holds a value");
        assert_eq!(head.height(), self.max_level(), "INVARIANT VIOLATED: head height");
        assert!(
            (1..=self.max_level()).contains(&self.level),
            "INVARIANT VIOLATED: level={} outside 1..={}",
            self.level,
            self.max_level()
        );

        // Level 0: sorted, acyclic, backward links consistent, count matches.
        let mut per_height = [0usize; MAX_LEVEL + 1];
        let mut count = 0usize;
        let mut prev = NULL;
        let mut idx = head.next[0];
        while idx != NULL {
            assert!(count < self.len, "INVARIANT VIOLATED: more than len={} nodes at level 0", self.len);
            let node = self.node(idx);
            assert!(node.value.is_some(), "INVARIANT VIOLATED: linked node {} is empty", idx);
            assert!(
                (1..=self.level).contains(&node.height()),
                "INVARIANT VIOLATED: node {} height={} with level={}",
                idx,
                node.height(),
                self.level
            );
            assert_eq!(node.prev, prev, "INVARIANT VIOLATED: backward link of node {}", idx);
            if prev != NULL {
                assert!(self.in_order(prev, idx), "INVARIANT VIOLATED: order at node {}", idx);
            }
            per_height[node.height()] += 1;
            count += 1;
            prev = idx;
            idx = node.next[0];
        }
        assert_eq!(count, self.len, "INVARIANT VIOLATED: reachable={} != len={}", count, self.len);

        // Upper levels: sorted subsequences holding exactly the tall nodes.
        let mut taller = self.len;
        for level in 0..self.max_level() {
            taller -= per_height[level];
            let mut count = 0usize;
            let mut prev = NULL;
            let mut idx = head.next[level];
            while idx != NULL {
                assert!(count < self.len, "INVARIANT VIOLATED: cycle at level {}", level);
                let node = self.node(idx);
                assert!(node.height() > level, "INVARIANT VIOLATED: node {} too short", idx);
                if prev != NULL {
                    assert!(self.in_order(prev, idx), "INVARIANT VIOLATED: order at level {}", level);
                }
                prev = idx;
                count += 1;
                idx = node.next[level];
            }
            assert_eq!(count, taller, "INVARIANT VIOLATED: level {} holds {} of {} nodes", level, count, taller);
            if level >= self.level {
                assert_eq!(count, 0, "INVARIANT VIOLATED: level {} used above level={}", level, self.level);
            }
        }
        if self.level > 1 {
            assert_ne!(
                head.next[self.level - 1],
                NULL,
                "INVARIANT VIOLATED: top level {} is empty",
                self.level
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}
