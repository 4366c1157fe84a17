//! # Dense matrix
//!
//! Column-major flat storage, like in any other scientific language. A flat buffer avoids the
//! per-row allocation overhead of nested vectors and hands the native kernel its expected
//! layout without conversion.
use std::fmt;
use std::ops::{Add, Range, Sub};

use itertools::Itertools;

use crate::error;
use crate::matrix::Matrix;
use crate::matrix::kernel;
use crate::matrix::kernel::{Kernel, KERNEL_THRESHOLD};
use crate::vector::{DenseVector, Vector};

/// Uses a flat column-major `Vec` as underlying data structure. Dimensions are fixed at
/// creation; element (`row`, `column`) lives at offset `row + column * nr_rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    data: Vec<f64>,
    nr_rows: usize,
    nr_columns: usize,
}

impl Dense {
    /// Create a zero matrix of dimension `nr_rows` x `nr_columns`.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::constant(0_f64, nr_rows, nr_columns)
    }

    /// Create a matrix with every element equal to `value`.
    #[must_use]
    pub fn constant(value: f64, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![value; nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a square identity matrix of the given size.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut result = Self::zeros(size, size);
        for i in 0..size {
            result.data[Self::offset(i, i, size)] = 1_f64;
        }
        result
    }

    /// Create a matrix from rows of values. All rows must have equal lengths.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let mut result = Self::zeros(nr_rows, nr_columns);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                result.data[Self::offset(i, j, nr_rows)] = value;
            }
        }
        result
    }

    /// Wrap an existing column-major buffer of `nr_rows * nr_columns` values.
    #[must_use]
    pub fn from_column_major(data: Vec<f64>, nr_rows: usize, nr_columns: usize) -> Self {
        error::check_dimensions(nr_rows * nr_columns, data.len());

        Self {
            data,
            nr_rows,
            nr_columns,
        }
    }

    /// Copy any matrix into a dense representation.
    #[must_use]
    pub fn from_matrix<M: Matrix + ?Sized>(source: &M) -> Self {
        let mut result = Self::zeros(source.nr_rows(), source.nr_columns());
        for row in source.row_indices() {
            for column in 0..source.nr_columns() {
                result.data[Self::offset(row, column, result.nr_rows)] = source.get(row, column);
            }
        }
        result
    }

    /// The internal column-major buffer.
    #[must_use]
    pub fn column_major_data(&self) -> &[f64] {
        &self.data
    }

    /// The values of column `column`, a contiguous part of the buffer.
    #[must_use]
    pub fn column(&self, column: usize) -> &[f64] {
        error::check_index(column, self.nr_columns);

        let start = Self::offset(0, column, self.nr_rows);
        &self.data[start..start + self.nr_rows]
    }

    /// The values of row `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<f64> {
        error::check_index(row, self.nr_rows);

        (0..self.nr_columns)
            .map(|column| self.data[Self::offset(row, column, self.nr_rows)])
            .collect()
    }

    /// Column `column` as a dense vector.
    #[must_use]
    pub fn column_vector(&self, column: usize) -> DenseVector {
        DenseVector::from(self.column(column))
    }

    /// Row `row` as a dense vector.
    #[must_use]
    pub fn row_vector(&self, row: usize) -> DenseVector {
        DenseVector::from(self.row(row))
    }

    /// Overwrite row `row` with the given values.
    pub fn set_row(&mut self, row: usize, values: &[f64]) {
        error::check_index(row, self.nr_rows);
        error::check_dimensions(self.nr_columns, values.len());

        for (column, &value) in values.iter().enumerate() {
            self.data[Self::offset(row, column, self.nr_rows)] = value;
        }
    }

    /// Overwrite column `column` with the given values.
    pub fn set_column(&mut self, column: usize, values: &[f64]) {
        error::check_index(column, self.nr_columns);
        error::check_dimensions(self.nr_rows, values.len());

        let start = Self::offset(0, column, self.nr_rows);
        self.data[start..start + self.nr_rows].copy_from_slice(values);
    }

    /// Overwrite row `row` with the values of a vector.
    pub fn set_row_vector<V: Vector + ?Sized>(&mut self, row: usize, values: &V) {
        self.set_row(row, &values.to_array());
    }

    /// Overwrite column `column` with the values of a vector.
    pub fn set_column_vector<V: Vector + ?Sized>(&mut self, column: usize, values: &V) {
        self.set_column(column, &values.to_array());
    }

    /// Multiply every element by a scalar.
    #[must_use]
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        self.map(|value| value * scalar)
    }

    /// Matrix product `self × other`.
    ///
    /// Dispatches between the naive loop and the process-wide native kernel, see
    /// [`multiply_with_kernel`](Self::multiply_with_kernel).
    #[must_use]
    pub fn multiply<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.multiply_with_kernel(other, kernel::native())
    }

    /// Matrix product `self × other` with an explicitly provided kernel.
    ///
    /// The kernel is used when one is given, both dimensions of `self` exceed
    /// [`KERNEL_THRESHOLD`] and `other` is not sparse; `other` is then copied into the
    /// kernel's column-major buffer layout. In every other case the naive triple loop runs,
    /// with the inner-dimension loop outermost so that the column-major accesses of both
    /// operands stay sequential.
    #[must_use]
    pub fn multiply_with_kernel<M: Matrix + ?Sized>(&self, other: &M, kernel: Option<Kernel>) -> Self {
        error::check_dimensions(self.nr_columns, other.nr_rows());

        let m = self.nr_rows;
        let k = self.nr_columns;
        let n = other.nr_columns();

        match kernel {
            Some(kernel) if m > KERNEL_THRESHOLD && k > KERNEL_THRESHOLD && !other.is_sparse() => {
                let mut right = vec![0_f64; k * n];
                for column in 0..n {
                    for row in 0..k {
                        right[Self::offset(row, column, k)] = other.get(row, column);
                    }
                }

                let mut product = vec![0_f64; m * n];
                kernel.multiply(m, k, n, &self.data, &right, &mut product);
                Self {
                    data: product,
                    nr_rows: m,
                    nr_columns: n,
                }
            },
            _ => {
                let mut result = Self::zeros(m, n);
                for inner in 0..k {
                    for row in 0..m {
                        let left = self.data[Self::offset(row, inner, m)];
                        for column in 0..n {
                            result.data[Self::offset(row, column, m)] += left * other.get(inner, column);
                        }
                    }
                }
                result
            },
        }
    }

    /// Elementwise product with another matrix of the same shape.
    #[must_use]
    pub fn multiply_element_wise<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.zip_with(other, |left, right| left * right)
    }

    /// The product `self × v` of this matrix with a column vector.
    ///
    /// When `v` is sparse, its non-zero entries drive the per-row sums.
    #[must_use]
    pub fn multiply_vector_row<V: Vector + ?Sized>(&self, v: &V) -> DenseVector {
        error::check_dimensions(self.nr_columns, v.dimension());

        let mut result = DenseVector::new(self.nr_rows);
        for row in 0..self.nr_rows {
            let sum = if v.is_sparse() {
                v.iter_nonzero()
                    .map(|entry| self.data[Self::offset(row, entry.index, self.nr_rows)] * entry.value)
                    .sum()
            } else {
                (0..self.nr_columns)
                    .map(|column| self.data[Self::offset(row, column, self.nr_rows)] * v.get(column))
                    .sum()
            };
            result.set(row, sum);
        }
        result
    }

    /// The product `self^T × v`, combining the rows of this matrix weighted by `v`.
    #[must_use]
    pub fn multiply_vector_column<V: Vector + ?Sized>(&self, v: &V) -> DenseVector {
        error::check_dimensions(self.nr_rows, v.dimension());

        let mut result = DenseVector::new(self.nr_columns);
        for column in 0..self.nr_columns {
            let sum = (0..self.nr_rows)
                .map(|row| self.data[Self::offset(row, column, self.nr_rows)] * v.get(row))
                .sum();
            result.set(column, sum);
        }
        result
    }

    /// The transpose of this matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.nr_columns, self.nr_rows);
        for row in 0..self.nr_rows {
            for column in 0..self.nr_columns {
                result.data[Self::offset(column, row, self.nr_columns)] =
                    self.data[Self::offset(row, column, self.nr_rows)];
            }
        }
        result
    }

    /// Elementwise sum with another matrix of the same shape.
    #[must_use]
    pub fn add<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.zip_with(other, |left, right| left + right)
    }

    /// Elementwise difference with another matrix of the same shape.
    #[must_use]
    pub fn subtract<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.zip_with(other, |left, right| left - right)
    }

    /// Subtract a scalar from every element.
    #[must_use]
    pub fn subtract_scalar(&self, scalar: f64) -> Self {
        self.map(|value| value - scalar)
    }

    /// Subtract every element from a scalar.
    #[must_use]
    pub fn subtract_from_scalar(&self, scalar: f64) -> Self {
        self.map(|value| scalar - value)
    }

    /// Subtract a vector from every column.
    #[must_use]
    pub fn subtract_vector<V: Vector + ?Sized>(&self, v: &V) -> Self {
        error::check_dimensions(self.nr_rows, v.dimension());

        self.map_indexed(|row, _, value| value - v.get(row))
    }

    /// Elementwise quotient with another matrix of the same shape.
    ///
    /// Zero denominators are not checked; quotients propagate as IEEE-754 values.
    #[must_use]
    pub fn divide<M: Matrix + ?Sized>(&self, other: &M) -> Self {
        self.zip_with(other, |left, right| left / right)
    }

    /// Divide every element by a scalar.
    #[must_use]
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.map(|value| value / scalar)
    }

    /// Divide every column by a vector.
    #[must_use]
    pub fn divide_vector<V: Vector + ?Sized>(&self, v: &V) -> Self {
        error::check_dimensions(self.nr_rows, v.dimension());

        self.map_indexed(|row, _, value| value / v.get(row))
    }

    /// Raise every element to a power.
    ///
    /// An exponent of exactly `2.0` is computed as a direct multiply.
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Self {
        self.map(|value| {
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
        for (i, row) in rows.clone().enumerate() {
            for (j, column) in columns.clone().enumerate() {
                result.data[Self::offset(i, j, result.nr_rows)] =
                    self.data[Self::offset(row, column, self.nr_rows)];
            }
        }
        result
    }

    /// The largest value in column `column`.
    #[must_use]
    pub fn max(&self, column: usize) -> f64 {
        self.column(column).iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The smallest value in column `column`.
    #[must_use]
    pub fn min(&self, column: usize) -> f64 {
        self.column(column).iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Translates the 2D addressing to an offset in the flat column-major buffer.
    fn offset(row: usize, column: usize, nr_rows: usize) -> usize {
        row + column * nr_rows
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&value| f(value)).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }

    fn map_indexed(&self, f: impl Fn(usize, usize, f64) -> f64) -> Self {
        let mut result = self.clone();
        for column in 0..self.nr_columns {
            for row in 0..self.nr_rows {
                let at = Self::offset(row, column, self.nr_rows);
                result.data[at] = f(row, column, self.data[at]);
            }
        }
        result
    }

    fn zip_with<M: Matrix + ?Sized>(&self, other: &M, f: impl Fn(f64, f64) -> f64) -> Self {
        error::check_dimensions(self.nr_rows, other.nr_rows());
        error::check_dimensions(self.nr_columns, other.nr_columns());

        self.map_indexed(|row, column, value| f(value, other.get(row, column)))
    }
}

impl Matrix for Dense {
    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        error::check_index(row, self.nr_rows);
        error::check_index(column, self.nr_columns);

        self.data[Self::offset(row, column, self.nr_rows)]
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        error::check_index(row, self.nr_rows);
        error::check_index(column, self.nr_columns);

        self.data[Self::offset(row, column, self.nr_rows)] = value;
    }

    /// Number of elements in this matrix.
    fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    fn is_sparse(&self) -> bool {
        false
    }

    /// Sum of the absolute values of all elements.
    fn sum(&self) -> f64 {
        self.data.iter().map(|value| value.abs()).sum()
    }

    fn row_indices(&self) -> Vec<usize> {
        (0..self.nr_rows).collect()
    }
}

impl Add<&Dense> for &Dense {
    type Output = Dense;

    fn add(self, rhs: &Dense) -> Self::Output {
        error::check_dimensions(self.nr_rows, rhs.nr_rows);
        error::check_dimensions(self.nr_columns, rhs.nr_columns);

        Dense {
            data: self.data.iter().zip_eq(rhs.data.iter()).map(|(left, right)| left + right).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }
}

impl Sub<&Dense> for &Dense {
    type Output = Dense;

    fn sub(self, rhs: &Dense) -> Self::Output {
        error::check_dimensions(self.nr_rows, rhs.nr_rows);
        error::check_dimensions(self.nr_columns, rhs.nr_columns);

        Dense {
            data: self.data.iter().zip_eq(rhs.data.iter()).map(|(left, right)| left - right).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }
}

impl fmt::Display for Dense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.nr_rows * self.nr_columns < 100 {
            for row in 0..self.nr_rows {
                writeln!(f, "{:?}", self.row(row))?;
            }
            Ok(())
        } else {
            write!(f, "{}x{}", self.nr_rows, self.nr_columns)
        }
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::vector::SequentialSparseVector;

    fn test_matrix() -> Dense {
        Dense::from_rows(&[
            vec![1_f64, 2_f64, 0_f64],
            vec![0_f64, 5_f64, 6_f64],
        ])
    }

    #[test]
    fn from_rows() {
        let m = test_matrix();

        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_approx_eq!(m.get(0, 0), 1_f64);
        assert_approx_eq!(m.get(1, 2), 6_f64);
        // Element (r, c) lives at offset r + c * nr_rows.
        assert_eq!(m.column_major_data(), &[1_f64, 0_f64, 2_f64, 5_f64, 0_f64, 6_f64]);
    }

    #[test]
    fn zeros_and_identity() {
        let (rows, columns) = (29, 48);
        let zeros = Dense::zeros(rows, columns);
        assert_approx_eq!(zeros.get(0, 0), 0_f64);
        assert_approx_eq!(zeros.get(rows - 1, columns - 1), 0_f64);

        let size = 13;
        let identity = Dense::identity(size);
        assert_approx_eq!(identity.get(0, 0), 1_f64);
        assert_approx_eq!(identity.get(size - 1, size - 1), 1_f64);
        assert_approx_eq!(identity.get(0, 1), 0_f64);
        assert_approx_eq!(identity.get(size - 1, 0), 0_f64);
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        // Getting a zero value
        assert_approx_eq!(m.get(0, 2), 0_f64);

        // Getting a nonzero value
        assert_approx_eq!(m.get(0, 1), 2_f64);

        // Changing a value
        m.set(1, 1, 3_f64);
        assert_approx_eq!(m.get(1, 1), 3_f64);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        let m = test_matrix();

        m.get(2, 0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_set() {
        let mut m = test_matrix();

        m.set(2, 0, 4_f64);
    }

    #[test]
    fn row_column() {
        let m = test_matrix();

        assert_eq!(m.column(1), &[2_f64, 5_f64]);
        assert_eq!(m.row(1), vec![0_f64, 5_f64, 6_f64]);
        assert_eq!(m.row_vector(0).to_array(), vec![1_f64, 2_f64, 0_f64]);
        assert_eq!(m.column_vector(2).to_array(), vec![0_f64, 6_f64]);
    }

    #[test]
    fn set_row_and_column() {
        let mut m = test_matrix();

        m.set_row(0, &[7_f64, 8_f64, 9_f64]);
        assert_eq!(m.row(0), vec![7_f64, 8_f64, 9_f64]);

        m.set_column(2, &[1_f64, 2_f64]);
        assert_eq!(m.column(2), &[1_f64, 2_f64]);

        m.set_row_vector(1, &SequentialSparseVector::from(&[0_f64, 4_f64, 0_f64][..]));
        assert_eq!(m.row(1), vec![0_f64, 4_f64, 0_f64]);
    }

    #[test]
    fn naive_multiply() {
        let left = Dense::from_rows(&[
            vec![1_f64, 2_f64],
            vec![3_f64, 4_f64],
        ]);
        let right = Dense::from_rows(&[
            vec![5_f64, 6_f64],
            vec![7_f64, 8_f64],
        ]);

        let product = left.multiply_with_kernel(&right, None);
        assert_eq!(product.to_array(), vec![
            vec![19_f64, 22_f64],
            vec![43_f64, 50_f64],
        ]);
    }

    #[test]
    fn multiply_rectangular() {
        let left = Dense::from_rows(&[
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
        ]);
        let right = Dense::from_rows(&[
            vec![1_f64],
            vec![1_f64],
            vec![1_f64],
        ]);

        let product = left.multiply(&right);
        assert_eq!(product.nr_rows(), 2);
        assert_eq!(product.nr_columns(), 1);
        assert_approx_eq!(product.get(0, 0), 6_f64);
        assert_approx_eq!(product.get(1, 0), 15_f64);
    }

    #[cfg(feature = "native-kernel")]
    #[test]
    fn kernel_and_naive_paths_agree() {
        let kernel = crate::matrix::kernel::native();
        assert!(kernel.is_some());

        // Large enough to clear the threshold on both dimensions.
        let size = KERNEL_THRESHOLD + 1;
        let left = Dense::constant(6_f64, size, size);
        let right = Dense::constant(3_f64, size, size);

        let native = left.multiply_with_kernel(&right, kernel);
        let naive = left.multiply_with_kernel(&right, None);

        let expected = size as f64 * 18_f64;
        for row in [0, size / 2, size - 1] {
            for column in [0, size / 2, size - 1] {
                assert_approx_eq!(native.get(row, column), expected);
                assert_approx_eq!(naive.get(row, column), expected);
            }
        }
    }

    #[test]
    #[should_panic]
    fn multiply_dimension_mismatch() {
        let left = Dense::zeros(2, 3);
        let right = Dense::zeros(2, 2);

        left.multiply(&right);
    }

    #[test]
    fn multiply_vector_forms() {
        let m = test_matrix();

        // Sparse and dense vector operands take different code paths; results must agree.
        let sparse = SequentialSparseVector::from(&[0_f64, 2_f64, 1_f64][..]);
        let dense = DenseVector::from(&[0_f64, 2_f64, 1_f64][..]);
        assert_eq!(m.multiply_vector_row(&sparse).to_array(), vec![4_f64, 16_f64]);
        assert_eq!(m.multiply_vector_row(&dense).to_array(), vec![4_f64, 16_f64]);

        let weights = DenseVector::from(&[1_f64, 2_f64][..]);
        assert_eq!(m.multiply_vector_column(&weights).to_array(), vec![1_f64, 12_f64, 12_f64]);
    }

    #[test]
    fn transpose() {
        let m = test_matrix();
        let transposed = m.transpose();

        assert_eq!(transposed.nr_rows(), 3);
        assert_eq!(transposed.nr_columns(), 2);
        assert_eq!(transposed.to_array(), vec![
            vec![1_f64, 0_f64],
            vec![2_f64, 5_f64],
            vec![0_f64, 6_f64],
        ]);
    }

    #[test]
    fn elementwise_operations() {
        let m = test_matrix();

        assert_eq!(m.add(&m).to_array(), m.multiply_scalar(2_f64).to_array());
        assert_eq!((&m + &m).to_array(), m.add(&m).to_array());
        assert_eq!((&m - &m).sum(), 0_f64);
        assert_eq!(m.subtract(&m).sum(), 0_f64);
        assert_eq!(m.multiply_element_wise(&m).to_array(), m.pow(2_f64).to_array());
        assert_eq!(m.subtract_from_scalar(1_f64).get(0, 1), -1_f64);
        assert_eq!(m.divide_scalar(2_f64).get(1, 1), 2.5);
    }

    #[test]
    fn column_wise_vector_operations() {
        let m = test_matrix();
        let v = DenseVector::from(&[1_f64, 2_f64][..]);

        let shifted = m.subtract_vector(&v);
        assert_eq!(shifted.to_array(), vec![
            vec![0_f64, 1_f64, -1_f64],
            vec![-2_f64, 3_f64, 4_f64],
        ]);

        let scaled = m.divide_vector(&v);
        assert_eq!(scaled.row(1), vec![0_f64, 2.5, 3_f64]);
    }

    #[test]
    fn pow_special_cases_square() {
        let m = test_matrix();

        assert_eq!(m.pow(2_f64).get(1, 2), 36_f64);
        assert_approx_eq!(m.pow(0.5).get(1, 1), 5_f64.sqrt());
    }

    #[test]
    fn slice_reindexes() {
        let m = Dense::from_rows(&[
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
            vec![7_f64, 8_f64, 9_f64],
        ]);

        let inner = m.slice(1..3, 0..2);
        assert_eq!(inner.to_array(), vec![
            vec![4_f64, 5_f64],
            vec![7_f64, 8_f64],
        ]);
    }

    #[test]
    fn sum_is_absolute() {
        let m = Dense::from_rows(&[
            vec![1_f64, -2_f64],
            vec![-3_f64, 4_f64],
        ]);

        assert_eq!(m.sum(), 10_f64);
    }

    #[test]
    fn column_extremes() {
        let m = Dense::from_rows(&[
            vec![-1_f64, 2_f64],
            vec![-3_f64, 8_f64],
        ]);

        assert_eq!(m.max(0), -1_f64);
        assert_eq!(m.min(0), -3_f64);
        assert_eq!(m.max(1), 8_f64);
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = test_matrix();
        let mut copy = original.clone();
        copy.set(0, 0, 9_f64);

        assert_approx_eq!(original.get(0, 0), 1_f64);
        assert_approx_eq!(copy.get(0, 0), 9_f64);
    }
}
