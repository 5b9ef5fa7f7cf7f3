use crate::compare::{Compare, Less};
use crate::error::QueueError;
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::Index;
use std::slice;
use std::vec;

/// A priority queue kept as a sorted contiguous sequence.
///
/// Elements are ordered by `comparator` at all times: no element is ranked
/// before its predecessor, so the element at position 0 is the top. A new
/// element is placed before any elements it ties with.
pub struct OrderedQueue<T, C = Less> {
    /// The ordering rule, public so callers can rank elements themselves.
    pub comparator: C,
    elements: Vec<T>,
}

impl<T, C: Default> OrderedQueue<T, C> {
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> OrderedQueue<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        let elements = vec![];
        Self {
            comparator,
            elements,
        }
    }

    pub fn with_capacity_and_comparator(
        capacity: usize,
        comparator: C,
    ) -> Self {
        let elements = Vec::with_capacity(capacity);
        Self {
            comparator,
            elements,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// The highest-priority element, if any.
    pub fn top(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Checked positional access.
    pub fn at(&self, index: usize) -> Result<&T, QueueError> {
        match self.elements.get(index) {
            Some(element) => Ok(element),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Positional access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.elements.len(), "out of range");
        self.elements.get_unchecked(index)
    }

    /// Front-to-back iteration in priority order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes the top element.
    ///
    /// The name is historical: this takes from the front of the sequence,
    /// the highest priority, not the back of storage.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        trace!("pop top of {}", self.elements.len());
        Some(self.elements.remove(0))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    /// Removes the element at `index`, leaving the queue untouched if
    /// `index` is out of range.
    pub fn erase(&mut self, index: usize) -> Result<T, QueueError> {
        if index >= self.elements.len() {
            return Err(self.out_of_range(index));
        }
        trace!("erase {} of {}", index, self.elements.len());
        Ok(self.elements.remove(index))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.elements.retain(keep);
    }

    /// Exchanges contents and comparators with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn out_of_range(&self, index: usize) -> QueueError {
        let len = self.elements.len();
        debug!("rejected index {} for length {}", index, len);
        QueueError::OutOfRange { index, len }
    }
}

impl<T, C: Clone> OrderedQueue<T, C> {
    /// Moves the contents out, leaving `self` empty with the same ordering.
    pub fn take(&mut self) -> Self {
        let comparator = self.comparator.clone();
        mem::replace(self, Self::with_comparator(comparator))
    }
}

impl<T, C: Compare<T>> OrderedQueue<T, C> {
    /// Inserts `value` at the first position whose element is not ranked
    /// before it, ahead of any elements it ties with.
    pub fn emplace(&mut self, value: T) {
        let comparator = &self.comparator;
        let index = self
            .elements
            .partition_point(|element| comparator.less(element, &value));
        trace!("insert at {} of {}", index, self.elements.len());
        self.elements.insert(index, value);
    }

    pub fn emplace_with<F: FnOnce() -> T>(&mut self, make: F) {
        self.emplace(make());
    }

    /// Inserts each value in turn, exactly as repeated
    /// [`emplace`](Self::emplace) would.
    pub fn emplace_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.elements.reserve(values.size_hint().0);
        for value in values {
            self.emplace(value);
        }
    }

    /// Gives mutable access to the elements, then restores the order.
    ///
    /// The re-sort is a stable binary insertion sort: elements that still
    /// tie keep their relative positions, and a comparator that is not a
    /// strict weak ordering scrambles the order but cannot panic. Cost is
    /// O(n log n) comparisons and up to O(n^2) moves.
    pub fn update<F: FnOnce(&mut [T])>(&mut self, modify: F) {
        modify(&mut self.elements);
        let comparator = &self.comparator;
        for end in 1..self.elements.len() {
            let (sorted, rest) = self.elements.split_at(end);
            let index = sorted
                .partition_point(|element| !comparator.less(&rest[0], element));
            self.elements[index..=end].rotate_right(1);
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| !self.comparator.less(&pair[1], &pair[0]))
    }
}

impl<T, C: Default> Default for OrderedQueue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone> Clone for OrderedQueue<T, C> {
    fn clone(&self) -> Self {
        let comparator = self.comparator.clone();
        let elements = self.elements.clone();
        Self {
            comparator,
            elements,
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.comparator.clone_from(&other.comparator);
        self.elements.clone_from(&other.elements);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

impl<T: PartialEq, C, D> PartialEq<OrderedQueue<T, D>> for OrderedQueue<T, C> {
    fn eq(&self, other: &OrderedQueue<T, D>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for OrderedQueue<T, C> {}

impl<T, C> Index<usize> for OrderedQueue<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.emplace_all(values);
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for OrderedQueue<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, values: I) {
        self.emplace_all(values.into_iter().copied());
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut queue = Self::new();
        queue.emplace_all(values);
        queue
    }
}

impl<T, C> IntoIterator for OrderedQueue<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
