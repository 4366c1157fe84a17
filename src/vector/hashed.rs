//! # Hash-backed sparse vector
//!
//! The same external contract as the ordered sparse vector, without the ordering invariant.
//! Used where insertion order and range merges are not needed and writes should not shift a
//! tail of entries.
use std::fmt;

use rustc_hash::FxHashMap;

use crate::error;
use crate::vector::{Entry, Vector};

/// A sparse vector over an unordered index-to-value map.
///
/// `set` stores the raw value, explicit zeros included, so `len` reports the number of stored
/// entries rather than the number of non-zeros. Non-zero iteration filters the stored zeros
/// out and yields entries in an implementation defined order.
#[derive(Debug, Clone, PartialEq)]
pub struct Hashed {
    dimension: usize,
    entries: FxHashMap<usize, f64>,
}

impl Hashed {
    /// Create a vector of logical length `dimension` with no stored entries.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: FxHashMap::default(),
        }
    }

    /// Create an empty vector sized for an expected number of stored entries.
    #[must_use]
    pub fn with_expected_entries(dimension: usize, expected: usize) -> Self {
        Self {
            dimension,
            entries: FxHashMap::with_capacity_and_hasher(expected, Default::default()),
        }
    }

    /// Copy any vector into this representation by inserting its non-zero entries.
    #[must_use]
    pub fn from_vector(source: &dyn Vector) -> Self {
        let mut result = Self::with_expected_entries(source.dimension(), source.len());
        for entry in source.iter_nonzero() {
            result.entries.insert(entry.index, entry.value);
        }
        result
    }

    /// Elementwise sum with another vector.
    ///
    /// Copies this vector and updates it with the other operand's non-zero entries.
    #[must_use]
    pub fn add<V: Vector + ?Sized>(&self, other: &V) -> Self {
        error::check_dimensions(self.dimension, other.dimension());

        let mut result = self.clone();
        for entry in other.iter_nonzero() {
            result.entries.insert(entry.index, self.get(entry.index) + entry.value);
        }
        result
    }

    /// Add a scalar to the stored entries.
    ///
    /// Unlike the ordered representation, absent entries are not reached; this matches the
    /// historical behavior of this back-end.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value + scalar)
    }

    /// Elementwise difference with another vector.
    #[must_use]
    pub fn subtract<V: Vector + ?Sized>(&self, other: &V) -> Self {
        error::check_dimensions(self.dimension, other.dimension());

        let mut result = self.clone();
        for entry in other.iter_nonzero() {
            result.entries.insert(entry.index, self.get(entry.index) - entry.value);
        }
        result
    }

    /// Subtract a scalar from the stored entries.
    #[must_use]
    pub fn subtract_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value - scalar)
    }

    /// Subtract the stored entries from a scalar.
    #[must_use]
    pub fn subtract_from_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| scalar - value)
    }

    /// Elementwise product with another vector.
    ///
    /// The operand storing fewer entries drives the loop; the other is probed by random
    /// access.
    #[must_use]
    pub fn multiply<V: Vector + ?Sized>(&self, other: &V) -> Self {
        error::check_dimensions(self.dimension, other.dimension());

        let mut result = Self::new(self.dimension);
        if other.len() < self.len() {
            for entry in other.iter_nonzero() {
                result.entries.insert(entry.index, self.get(entry.index) * entry.value);
            }
        } else {
            for entry in self.iter_nonzero() {
                result.entries.insert(entry.index, other.get(entry.index) * entry.value);
            }
        }
        result
    }

    /// Multiply the stored entries by a scalar.
    #[must_use]
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value * scalar)
    }

    /// Divide the stored entries by the other vector's values at the same indices.
    ///
    /// A zero denominator at an absent index is never evaluated; under a stored entry it
    /// propagates as an infinity.
    #[must_use]
    pub fn divide<V: Vector + ?Sized>(&self, other: &V) -> Self {
        error::check_dimensions(self.dimension, other.dimension());

        let mut result = Self::new(self.dimension);
        for entry in self.iter_nonzero() {
            result.entries.insert(entry.index, entry.value / other.get(entry.index));
        }
        result
    }

    /// Divide the stored entries by a scalar.
    #[must_use]
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value / scalar)
    }

    /// Divide the other vector's stored values by this vector's values at the same indices.
    #[must_use]
    pub fn divide_from<V: Vector + ?Sized>(&self, other: &V) -> Self {
        error::check_dimensions(self.dimension, other.dimension());

        let mut result = Self::new(self.dimension);
        for entry in other.iter_nonzero() {
            result.entries.insert(entry.index, entry.value / self.get(entry.index));
        }
        result
    }

    /// Divide a scalar by the stored entries.
    #[must_use]
    pub fn divide_from_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| scalar / value)
    }

    /// Raise the stored entries to a power.
    ///
    /// An exponent of exactly `2.0` is computed as a direct multiply.
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Self {
        self.map_stored(|value| {
            if exponent == 2_f64 {
                value * value
            } else {
                value.powf(exponent)
            }
        })
    }

    /// Square root of the stored entries.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.map_stored(f64::sqrt)
    }

    /// Natural logarithm of the stored entries.
    #[must_use]
    pub fn log(&self) -> Self {
        self.map_stored(f64::ln)
    }

    /// Exponential of the stored entries.
    #[must_use]
    pub fn exp(&self) -> Self {
        self.map_stored(f64::exp)
    }

    /// Absolute value of the stored entries.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map_stored(f64::abs)
    }

    /// The subvector of the half-open index range `[start, end)`, reindexed to start at `0`.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        error::check_slice(&(start..end), self.dimension);

        let mut result = Self::new(end - start);
        for entry in self.iter_nonzero() {
            if entry.index >= start && entry.index < end {
                result.entries.insert(entry.index - start, entry.value);
            }
        }
        result
    }

    /// The subvector of `length` elements starting at `start`, reindexed to start at `0`.
    #[must_use]
    pub fn slice_by_length(&self, start: usize, length: usize) -> Self {
        self.slice(start, start + length)
    }

    /// Apply a function to the stored entries of a copy.
    fn map_stored(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut result = Self::with_expected_entries(self.dimension, self.entries.len());
        for entry in self.iter_nonzero() {
            result.entries.insert(entry.index, f(entry.value));
        }
        result
    }
}

impl Vector for Hashed {
    fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored entries, explicitly stored zeros included.
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> f64 {
        error::check_index(index, self.dimension);

        self.entries.get(&index).copied().unwrap_or(0_f64)
    }

    fn set(&mut self, index: usize, value: f64) {
        error::check_index(index, self.dimension);

        self.entries.insert(index, value);
    }

    fn iter_nonzero(&self) -> Box<dyn Iterator<Item = Entry> + '_> {
        Box::new(
            self.entries.iter()
                .filter(|&(_, &value)| value != 0_f64)
                .map(|(&index, &value)| Entry::new(index, value)),
        )
    }

    fn is_sparse(&self) -> bool {
        true
    }
}

impl From<&[f64]> for Hashed {
    /// Stores every entry of the array, zeros included; this back-end keeps raw values.
    fn from(values: &[f64]) -> Self {
        let mut result = Self::with_expected_entries(values.len(), values.len());
        for (index, &value) in values.iter().enumerate() {
            result.entries.insert(index, value);
        }
        result
    }
}

impl From<Vec<f64>> for Hashed {
    fn from(values: Vec<f64>) -> Self {
        Self::from(values.as_slice())
    }
}

impl fmt::Display for Hashed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.entries.len() < 20 {
            write!(f, "{{")?;
            for (nth, (index, value)) in self.entries.iter().enumerate() {
                if nth > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", index, value)?;
            }
            write!(f, "}}")
        } else {
            write!(f, "{}x1", self.dimension)
        }
    }
}
