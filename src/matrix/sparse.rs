//! # Sparse matrix
//!
//! Maps row indices to sparse vectors representing the rows, so any access is at most two
//! hash lookups: first by row, then by column. Rows without non-zero values are not stored
//! at all.
use std::fmt;
use std::ops::Range;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error;
use crate::matrix::Matrix;
use crate::vector::{HashSparseVector, Vector};

/// Uses a map from row index to row vector as underlying data structure.
///
/// `set` ignores zero values, so rows come into existence on their first non-zero write.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseRow {
    rows: FxHashMap<usize, HashSparseVector>,
    nr_rows: usize,
    nr_columns: usize,
}

impl SparseRow {
    /// Create a matrix of the given dimensions with no stored rows.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: FxHashMap::default(),
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix from rows of values, storing the non-zero ones.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let mut result = Self::zeros(nr_rows, nr_columns);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                result.set(i, j, value);
            }
        }
        result
    }

    /// Copy any matrix into this representation, storing its non-zero values.
    #[must_use]
    pub fn from_matrix<M: Matrix + ?Sized>(source: &M) -> Self {
        let mut result = Self::zeros(source.nr_rows(), source.nr_columns());
        for row in source.row_indices() {
            for column in 0..source.nr_columns() {
                result.set(row, column, source.get(row, column));
            }
        }
        result
    }

    /// Row `row` as a hash-backed sparse vector.
    ///
    /// An absent row reads as an empty vector; the matrix is not changed by the lookup.
    #[must_use]
    pub fn row_vector(&self, row: usize) -> HashSparseVector {
        error::check_index(row, self.nr_rows);

        self.rows.get(&row).cloned().unwrap_or_else(|| HashSparseVector::new(self.nr_columns))
    }

    /// Column `column` as a hash-backed sparse vector over the stored rows.
    #[must_use]
    pub fn column_vector(&self, column: usize) -> HashSparseVector {
        error::check_index(column, self.nr_columns);

        let mut result = HashSparseVector::new(self.nr_rows);
        for (&row, values) in &self.rows {
            result.set(row, values.get(column));
        }
        result
    }

    /// Overwrite row `row` with the non-zero entries of a vector.
    pub fn set_row_vector<V: Vector>(&mut self, row: usize, values: &V) {
        error::check_index(row, self.nr_rows);
        error::check_dimensions(self.nr_columns, values.dimension());

        self.rows.insert(row, HashSparseVector::from_vector(values));
    }

    /// Overwrite column `column` with the non-zero entries of a vector.
    pub fn set_column_vector<V: Vector + ?Sized>(&mut self, column: usize, values: &V) {
        error::check_index(column, self.nr_columns);
        error::check_dimensions(self.nr_rows, values.dimension());

        for entry in values.iter_nonzero() {
            self.set(entry.index, column, entry.value);
        }
    }

    /// Remove a stored row entirely.
    pub fn remove_row(&mut self, row: usize) {
        error::check_index(row, self.nr_rows);

        self.rows.remove(&row);
    }

    /// Multiply every stored value by a scalar.
    #[must_use]
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value * scalar)
    }

    /// Matrix product `self × other`.
    ///
    /// Iterates only the non-zero entries of each stored row and skips zero contributions of
    /// the right operand, making the cost proportional to the number of non-zero pairs rather
    /// than `rows × columns × inner`.
    #[must_use]
    pub fn multiply<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        error::check_dimensions(self.nr_columns, other.nr_rows());

        let mut result = Self::zeros(self.nr_rows, other.nr_columns());
        for (&row, values) in &self.rows {
            for column in 0..other.nr_columns() {
                let mut sum = 0_f64;
                for entry in values.iter_nonzero() {
                    let value = other.get(entry.index, column);
                    if value != 0_f64 {
                        sum += entry.value * value;
                    }
                }
                result.set(row, column, sum);
            }
        }
        result
    }

    /// Elementwise product with another matrix of the same shape.
    #[must_use]
    pub fn multiply_element_wise<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.check_same_shape(other);

        let mut result = Self::zeros(self.nr_rows, self.nr_columns);
        for (&row, values) in &self.rows {
            for entry in values.iter_nonzero() {
                result.set(row, entry.index, entry.value * other.get(row, entry.index));
            }
        }
        result
    }

    /// The product `self × v` of this matrix with a column vector.
    #[must_use]
    pub fn multiply_vector_row<V: Vector + ?Sized>(&self, v: &V) -> HashSparseVector {
        error::check_dimensions(self.nr_columns, v.dimension());

        let mut result = HashSparseVector::new(self.nr_rows);
        for (&row, values) in &self.rows {
            let sum = values.iter_nonzero()
                .map(|entry| entry.value * v.get(entry.index))
                .sum();
            result.set(row, sum);
        }
        result
    }

    /// The product `self^T × v`, combining the stored rows weighted by `v`.
    ///
    /// When `v` is sparse, only its non-zero entries select rows.
    #[must_use]
    pub fn multiply_vector_column<V: Vector + ?Sized>(&self, v: &V) -> HashSparseVector {
        error::check_dimensions(self.nr_rows, v.dimension());

        let mut result = HashSparseVector::new(self.nr_columns);
        if v.is_sparse() {
            for weight in v.iter_nonzero() {
                if let Some(values) = self.rows.get(&weight.index) {
                    for entry in values.iter_nonzero() {
                        result.set(entry.index, result.get(entry.index) + entry.value * weight.value);
                    }
                }
            }
        } else {
            for (&row, values) in &self.rows {
                for entry in values.iter_nonzero() {
                    result.set(entry.index, result.get(entry.index) + entry.value * v.get(row));
                }
            }
        }
        result
    }

    /// The transpose of this matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.nr_columns, self.nr_rows);
        for (&row, values) in &self.rows {
            for entry in values.iter_nonzero() {
                result.set(entry.index, row, entry.value);
            }
        }
        result
    }

    /// Elementwise sum with another matrix of the same shape.
    ///
    /// Covers the union of both operands' stored entries.
    #[must_use]
    pub fn add<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.check_same_shape(other);

        self.combine_union(other, |left, right| left + right)
    }

    /// Elementwise difference with another matrix of the same shape.
    #[must_use]
    pub fn subtract<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.check_same_shape(other);

        self.combine_union(other, |left, right| left - right)
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

    /// Subtract `v.get(row)` from every stored entry of each row.
    #[must_use]
    pub fn subtract_vector<V: Vector + ?Sized>(&self, v: &V) -> Self {
        error::check_dimensions(self.nr_rows, v.dimension());

        let mut result = Self::zeros(self.nr_rows, self.nr_columns);
        for (&row, values) in &self.rows {
            result.set_row_vector(row, &values.subtract_scalar(v.get(row)));
        }
        result
    }

    /// Elementwise quotient with another matrix of the same shape.
    ///
    /// Both operands' stored entries are visited, so a zero over a stored denominator and a
    /// stored numerator over a zero both surface their IEEE-754 results.
    #[must_use]
    pub fn divide<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.check_same_shape(other);

        self.combine_union(other, |left, right| left / right)
    }

    /// Divide the stored entries by a scalar.
    #[must_use]
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.map_stored(|value| value / scalar)
    }

    /// Divide every stored entry of each row by `v.get(row)`.
    #[must_use]
    pub fn divide_vector<V: Vector + ?Sized>(&self, v: &V) -> Self {
        error::check_dimensions(self.nr_rows, v.dimension());

        let mut result = Self::zeros(self.nr_rows, self.nr_columns);
        for (&row, values) in &self.rows {
            result.set_row_vector(row, &values.divide_scalar(v.get(row)));
        }
        result
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

    /// The submatrix of the given row and column ranges, reindexed to start at `(0, 0)`.
    #[must_use]
    pub fn slice(&self, rows: Range<usize>, columns: Range<usize>) -> Self {
        error::check_slice(&rows, self.nr_rows);
        error::check_slice(&columns, self.nr_columns);

        let mut result = Self::zeros(rows.len(), columns.len());
        for (&row, values) in &self.rows {
            if !rows.contains(&row) {
                continue;
            }
            for entry in values.iter_nonzero() {
                if columns.contains(&entry.index) {
                    result.set(row - rows.start, entry.index - columns.start, entry.value);
                }
            }
        }
        result
    }

    /// The largest value in column `column`, the implicit zero of absent entries included.
    #[must_use]
    pub fn max(&self, column: usize) -> f64 {
        self.column_vector(column).max()
    }

    /// The smallest value in column `column`, the implicit zero of absent entries included.
    #[must_use]
    pub fn min(&self, column: usize) -> f64 {
        self.column_vector(column).min()
    }

    /// Apply a function to every stored non-zero entry of a fresh matrix.
    fn map_stored(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut result = Self::zeros(self.nr_rows, self.nr_columns);
        for (&row, values) in &self.rows {
            for entry in values.iter_nonzero() {
                result.set(row, entry.index, f(entry.value));
            }
        }
        result
    }

    /// Combine with another matrix over the union of both operands' stored entries.
    fn combine_union<M: Matrix + ?Sized>(&self, other: &M, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = Self::zeros(self.nr_rows, self.nr_columns);
        for (&row, values) in &self.rows {
            for entry in values.iter_nonzero() {
                result.set(row, entry.index, f(entry.value, other.get(row, entry.index)));
            }
        }
        for row in other.row_indices() {
            for column in 0..other.nr_columns() {
                let right = other.get(row, column);
                if right != 0_f64 && self.get(row, column) == 0_f64 {
                    result.set(row, column, f(0_f64, right));
                }
            }
        }
        result
    }

    fn check_same_shape<M: Matrix + ?Sized>(&self, other: &M) {
        error::check_dimensions(self.nr_rows, other.nr_rows());
        error::check_dimensions(self.nr_columns, other.nr_columns());
    }
}

impl Matrix for SparseRow {
    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        error::check_index(row, self.nr_rows);
        error::check_index(column, self.nr_columns);

        self.rows.get(&row).map_or(0_f64, |values| values.get(column))
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// Zero values are ignored: they neither create rows nor clear stored entries.
    fn set(&mut self, row: usize, column: usize, value: f64) {
        error::check_index(row, self.nr_rows);
        error::check_index(column, self.nr_columns);

        if value != 0_f64 {
            let nr_columns = self.nr_columns;
            self.rows
                .entry(row)
                .or_insert_with(|| HashSparseVector::new(nr_columns))
                .set(column, value);
        }
    }

    /// Number of stored non-zero values in this matrix.
    fn size(&self) -> usize {
        self.rows.values().map(|values| values.iter_nonzero().count()).sum()
    }

    fn is_sparse(&self) -> bool {
        true
    }

    /// Plain sum of the stored values.
    fn sum(&self) -> f64 {
        self.rows.values().map(Vector::sum).sum()
    }

    /// The stored row indices in ascending order.
    fn row_indices(&self) -> Vec<usize> {
        self.rows.keys().copied().sorted().collect()
    }
}

impl fmt::Display for SparseRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.nr_rows * self.nr_columns < 50 {
            for row in self.row_indices() {
                writeln!(f, "{}: {}", row, self.rows[&row])?;
            }
            Ok(())
        } else {
            write!(f, "{}x{}", self.nr_rows, self.nr_columns)
        }
    }
}
