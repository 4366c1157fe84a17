//! # Ordered mapping
//!
//! A sparse map from index to value, kept as two parallel index-sorted arrays. This is the
//! storage engine behind the ordered sparse vector; it was written by hand because the append
//! and merge patterns of sparse vector construction need to be fast on exactly this layout.
use std::cmp;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;

use num_traits::Zero;

/// Number of entries the backing arrays can hold before the first reallocation.
const DEFAULT_CAPACITY: usize = 11;
/// Reallocation factor applied when the backing arrays are full.
const GROWTH_FACTOR: f64 = 1.2;

/// Sorted parallel index/value arrays representing a sparse one-dimensional map.
///
/// Indices are strictly ascending and duplicate-free. The default value (zero) is never stored:
/// writing it is equivalent to deleting the index. Lookups are a binary search over the live
/// indices, appends in increasing index order are amortized constant time, and arbitrary inserts
/// and removals shift the tail of both arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMapping<V = f64> {
    indices: Vec<usize>,
    values: Vec<V>,
}

impl<V: Zero + Copy + PartialEq> OrderedMapping<V> {
    /// Create an empty mapping with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty mapping sized for an expected number of entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Length of the backing arrays, at least `len`.
    pub fn capacity(&self) -> usize {
        self.indices.capacity()
    }

    /// Index of the live entry at `offset`.
    pub fn index_at(&self, offset: usize) -> usize {
        self.indices[offset]
    }

    /// Value of the live entry at `offset`.
    pub fn value_at(&self, offset: usize) -> V {
        self.values[offset]
    }

    /// Overwrite the value of the live entry at `offset`.
    ///
    /// Bypasses the search and the no-default policy; the caller is responsible for not writing
    /// the default value through this method.
    pub fn set_value_at(&mut self, offset: usize, value: V) {
        self.values[offset] = value;
    }

    /// Locate `index` among the live entries.
    ///
    /// `Ok` carries the offset of the entry, `Err` the offset at which it would be inserted.
    fn find(&self, index: usize) -> Result<usize, usize> {
        self.indices.binary_search(&index)
    }

    /// The stored value, or the default for an absent index. `O(log n)`.
    pub fn get(&self, index: usize) -> V {
        match self.find(index) {
            Ok(offset) => self.values[offset],
            Err(_) => V::zero(),
        }
    }

    /// Store `value` at `index`, dropping the entry instead when `value` is the default.
    ///
    /// Appending beyond the current maximum index is amortized `O(1)`; callers frequently
    /// populate indices in increasing order, which avoids the general insert path entirely.
    /// The general path is a binary search followed by an in-place update, a shift-left
    /// removal, or a shift-right insertion.
    pub fn set(&mut self, index: usize, value: V) {
        let append = self.indices.last().map_or(true, |&largest| index > largest);
        if append {
            if !value.is_zero() {
                self.grow_for_insert();
                self.indices.push(index);
                self.values.push(value);
            }
        } else {
            match self.find(index) {
                Ok(offset) => self.update_or_remove(offset, value),
                Err(offset) => self.insert_if_not_default(offset, index, value),
            }
        }
    }

    /// Add `delta` to the value at `index` with a single search.
    ///
    /// Equivalent to `set(index, get(index) + delta)` without the double lookup. An increment
    /// that lands the value on the default removes the entry.
    pub fn increment(&mut self, index: usize, delta: V) {
        match self.find(index) {
            Ok(offset) => {
                let updated = self.values[offset] + delta;
                self.update_or_remove(offset, updated);
            },
            Err(offset) => self.insert_if_not_default(offset, index, delta),
        }
    }

    /// Merge the entries of `updates` into this mapping in linear time.
    ///
    /// Walks both sorted index sequences with two cursors into freshly allocated arrays,
    /// applying `combine` to co-located indices and combining against the default for indices
    /// present on one side only, the unconsumed tails included. Results equal to the default
    /// are dropped, so the no-default policy holds for any `combine`.
    pub fn merge<F: Fn(V, V) -> V>(&mut self, updates: &Self, combine: F) {
        let required = self.len() + updates.len();
        let capacity = cmp::max((GROWTH_FACTOR * required as f64) as usize, required + 1);
        let mut merged_indices = Vec::with_capacity(capacity);
        let mut merged_values = Vec::with_capacity(capacity);

        {
            let mut push = |index: usize, value: V| {
                if !value.is_zero() {
                    merged_indices.push(index);
                    merged_values.push(value);
                }
            };

            let (mut i, mut j) = (0, 0);
            while i < self.len() && j < updates.len() {
                match self.indices[i].cmp(&updates.indices[j]) {
                    Ordering::Less => {
                        push(self.indices[i], combine(self.values[i], V::zero()));
                        i += 1;
                    },
                    Ordering::Greater => {
                        push(updates.indices[j], combine(V::zero(), updates.values[j]));
                        j += 1;
                    },
                    Ordering::Equal => {
                        push(self.indices[i], combine(self.values[i], updates.values[j]));
                        i += 1;
                        j += 1;
                    },
                }
            }
            while i < self.len() {
                push(self.indices[i], combine(self.values[i], V::zero()));
                i += 1;
            }
            while j < updates.len() {
                push(updates.indices[j], combine(V::zero(), updates.values[j]));
                j += 1;
            }
        }

        self.indices = merged_indices;
        self.values = merged_values;
    }

    /// Iterate over the live `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, V)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    fn update_or_remove(&mut self, offset: usize, value: V) {
        if value.is_zero() {
            // The no-default policy forbids storing zeros; shift the tail left instead.
            self.indices.remove(offset);
            self.values.remove(offset);
        } else {
            self.values[offset] = value;
        }
    }

    fn insert_if_not_default(&mut self, offset: usize, index: usize, value: V) {
        if !value.is_zero() {
            self.grow_for_insert();
            self.indices.insert(offset, index);
            self.values.insert(offset, value);
        }
    }

    /// Reallocate the backing arrays when they are full.
    ///
    /// The new capacity is `max(1.2 * len, len + 1)`; the arrays are never shrunk.
    fn grow_for_insert(&mut self) {
        if self.indices.len() == self.indices.capacity() {
            let target = cmp::max((GROWTH_FACTOR * self.len() as f64) as usize, self.len() + 1);
            let additional = target - self.indices.len();
            self.indices.reserve_exact(additional);
            self.values.reserve_exact(additional);
        }
    }
}

impl<V: Zero + Copy + PartialEq> Default for OrderedMapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Display> Display for OrderedMapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, value) in self.indices.iter().zip(self.values.iter()) {
            write!(f, "({},{})", index, value)?;
        }
        Ok(())
    }
}
