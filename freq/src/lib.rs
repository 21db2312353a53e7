use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

/// Occurrence counts of the values inside a window.
#[derive(Debug, Clone)]
pub struct FreqTable<T> {
    counts: FxHashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> FreqTable<T> {
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Count all values of `window` from scratch.
    pub fn from_window(window: &[T]) -> Self {
        let mut table = Self::new();
        for &x in window {
            table.add(x);
        }
        table
    }

    /// Record one more occurrence of `x`. Returns the new count.
    pub fn add(&mut self, x: T) -> usize {
        let c = self.counts.entry(x).or_insert(0);
        *c += 1;
        *c
    }

    /// Drop one occurrence of `x`. Returns the new count.
    /// Panics if `x` is not in the window.
    pub fn remove(&mut self, x: T) -> usize {
        match self.counts.get_mut(&x) {
            Some(c) if *c > 1 => {
                *c -= 1;
                *c
            }
            Some(_) => {
                self.counts.remove(&x);
                0
            }
            None => panic!("removed a value that was never added"),
        }
    }

    pub fn count(&self, x: T) -> usize {
        self.counts.get(&x).copied().unwrap_or(0)
    }

    /// Number of distinct values in the window.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.counts.iter().map(|(&x, &c)| (x, c))
    }
}

impl<T: Copy + Eq + Hash> Default for FreqTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// For each occurrence count, the set of distinct values currently at that
/// count, plus a running maximum over the non-empty buckets.
///
/// Kept in sync with a [`FreqTable`] by feeding every count change through
/// [`promote`](Self::promote)/[`demote`](Self::demote).
#[derive(Debug, Clone)]
pub struct CountBuckets<T> {
    /// `buckets[c]` holds the values occurring exactly `c` times.
    /// Bucket 0 stays empty.
    buckets: Vec<FxHashSet<T>>,
    /// Largest `c` with a non-empty bucket, or 0 when all are empty.
    max: usize,
}

impl<T: Copy + Eq + Hash + Ord> CountBuckets<T> {
    /// `cap` is the largest count that can ever occur, i.e. the window length.
    pub fn new(cap: usize) -> Self {
        Self {
            buckets: vec![FxHashSet::default(); cap + 1],
            max: 0,
        }
    }

    /// `x` went from count `new - 1` to `new`.
    pub fn promote(&mut self, x: T, new: usize) {
        if new > 1 {
            self.buckets[new - 1].remove(&x);
        }
        self.buckets[new].insert(x);
        self.max = self.max.max(new);
    }

    /// `x` went from count `new + 1` to `new`.
    pub fn demote(&mut self, x: T, new: usize) {
        self.buckets[new + 1].remove(&x);
        if new > 0 {
            self.buckets[new].insert(x);
        }
        // The maximum bucket may just have emptied.
        while self.max > 0 && self.buckets[self.max].is_empty() {
            self.max -= 1;
        }
    }

    /// Largest occurrence count in the window, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.max
    }

    /// Smallest value among those occurring [`max_count`](Self::max_count)
    /// times. Linear in the size of that bucket.
    pub fn min_at_max(&self) -> Option<T> {
        self.buckets[self.max].iter().min().copied()
    }
}
