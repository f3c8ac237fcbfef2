// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordered iteration along level 0.
//!
//! Iterators walk the forward links from the front and the backward links
//! from the back, meeting in the middle. They borrow (or own) the set, so
//! the set cannot change under them. Elements cannot be removed through an
//! iterator.

use std::iter::FusedIterator;

use crate::skip_set::HEAD;
use crate::skip_set::Idx;
use crate::skip_set::NULL;
use crate::skip_set::SkipSet;

/// Borrowing iterator, ascending order. Created by [`SkipSet::iter`].
pub struct Iter<'a, T> {
    set: &'a SkipSet<T>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(set: &'a SkipSet<T>) -> Self {
        let back = match set.last_idx() {
            HEAD => NULL,
            idx => idx,
        };
        return Iter {
            set,
            front: set.node(HEAD).next[0],
            back,
            remaining: set.len(),
        };
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        return Iter {
            set: self.set,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        };
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.front == NULL {
            return None;
        }

        let node = self.set.node(self.front);
        self.front = node.next[0];
        self.remaining -= 1;
        return node.value.as_ref();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.back == NULL {
            return None;
        }

        let node = self.set.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        return node.value.as_ref();
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator, ascending order. Created by `SkipSet::into_iter`.
pub struct IntoIter<T> {
    set: SkipSet<T>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(set: SkipSet<T>) -> Self {
        let front = set.node(HEAD).next[0];
        let back = match set.last_idx() {
            HEAD => NULL,
            idx => idx,
        };
        let remaining = set.len();
        return IntoIter {
            set,
            front,
            back,
            remaining,
        };
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 || self.front == NULL {
            return None;
        }

        // Links are left alone; the set is only ever dropped from here on.
        let node = self.set.node_mut(self.front);
        self.front = node.next[0];
        self.remaining -= 1;
        return node.value.take();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 || self.back == NULL {
            return None;
        }

        let node = self.set.node_mut(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        return node.value.take();
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
