// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Bulk operations and standard trait impls layered on the engine.
//!
//! Range views (`head_set`, `tail_set`, `sub_set`) are deliberately not
//! implemented and always return [`SetError::Unsupported`].

use std::fmt;

use crate::error::SetError;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::skip_set::SkipSet;

impl<T: Ord> SkipSet<T> {
    /// Insert every value. Returns `true` if any of them was new.
    pub fn extend_from<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut modified = false;
        for value in values {
            modified |= self.insert(value);
        }
        return modified;
    }

    /// Is every value present?
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        return values.into_iter().all(|value| self.contains(value));
    }

    /// Remove every value. Returns `true` if any of them was present.
    pub fn remove_all<'a, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut modified = false;
        for value in values {
            modified |= self.remove(value);
        }
        return modified;
    }

    /// Keep only the values the predicate accepts. Returns `true` if
    /// anything was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len();
        let mut kept = Vec::with_capacity(before);
        while let Some(value) = self.pop_first() {
            if keep(&value) {
                kept.push(value);
            }
        }
        self.extend_from(kept);
        return self.len() != before;
    }

    /// Every value, cloned into a sorted `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.iter().cloned().collect();
    }

    pub fn head_set(&self, _to: &T) -> Result<SkipSet<T>, SetError> {
        return Err(SetError::Unsupported("head_set"));
    }

    pub fn tail_set(&self, _from: &T) -> Result<SkipSet<T>, SetError> {
        return Err(SetError::Unsupported("tail_set"));
    }

    pub fn sub_set(&self, _from: &T, _to: &T) -> Result<SkipSet<T>, SetError> {
        return Err(SetError::Unsupported("sub_set"));
    }
}

impl<T> Default for SkipSet<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Ord> FromIterator<T> for SkipSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SkipSet::new();
        set.extend_from(iter);
        return set;
    }
}

impl<T: Ord> Extend<T> for SkipSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from(iter);
    }
}

impl<T> IntoIterator for SkipSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        return IntoIter::new(self);
    }
}

impl<'a, T> IntoIterator for &'a SkipSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: fmt::Debug> fmt::Debug for SkipSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

/// Two sets are equal when they hold equal elements; tower layout is
/// ignored.
impl<T: PartialEq> PartialEq for SkipSet<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len() == other.len() && self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for SkipSet<T> {}
