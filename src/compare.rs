//! Ordering strategies for [`OrderedQueue`](crate::OrderedQueue).
//!
//! A comparator is a strict weak ordering over two elements: `less(a, b)`
//! holds when `a` must come before `b`. The queue stores one comparator value
//! and consults it for every insertion.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A strict weak ordering over `T`.
///
/// Implementations must be irreflexive (`less(a, a)` is false) and
/// transitive, and incomparability must be transitive too. Anything weaker
/// leaves the queue order unspecified, but no queue operation panics or
/// becomes unsafe because of it.
pub trait Compare<T: ?Sized> {
    /// Returns true when `left` is ranked strictly before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Three-way comparison derived from [`less`](Compare::less).
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order by `Ord`: the smallest element is the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }
}

/// Descending order by `Ord`: the largest element is the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    fn less(&self, left: &T, right: &T) -> bool {
        left > right
    }
}

/// Ascending order of a key extracted from each element.
pub struct ByKey<F, K> {
    key: F,
    _phantom: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new<T>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        let _phantom = PhantomData;
        Self { key, _phantom }
    }
}

impl<T, F, K> Compare<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn less(&self, left: &T, right: &T) -> bool {
        (self.key)(left) < (self.key)(right)
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        let key = self.key.clone();
        let _phantom = PhantomData;
        Self { key, _phantom }
    }
}

impl<F: Copy, K> Copy for ByKey<F, K> {}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ByKey")
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}
