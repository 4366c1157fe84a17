//! Properties that hold across representations: identical values must behave identically no
//! matter which back-end stores them, and the multiply dispatcher must never change a result
//! beyond rounding.
use assert_approx_eq::assert_approx_eq;

use sparla::matrix::{DenseMatrix, Matrix, SparseRowMatrix};
use sparla::matrix::kernel;
use sparla::vector::{
    BitVector, DenseVector, HashSparseVector, SequentialSparseVector, Vector,
};

const DATA: [f64; 8] = [0_f64, 3.5, 0_f64, -2_f64, 8_f64, 0_f64, 0_f64, 1.25];

#[test]
fn representations_materialize_identically() {
    let dense = DenseVector::from(&DATA[..]);
    let sequential = SequentialSparseVector::from(&DATA[..]);
    let hashed = HashSparseVector::from(&DATA[..]);

    assert_eq!(dense.to_array(), DATA.to_vec());
    assert_eq!(sequential.to_array(), DATA.to_vec());
    assert_eq!(hashed.to_array(), DATA.to_vec());

    // The bit representation is compared on presence data only.
    let flags = [0_f64, 1_f64, 1_f64, 0_f64, 1_f64];
    let bit = BitVector::from(&flags[..]);
    assert_eq!(bit.to_array(), flags.to_vec());
    assert_eq!(bit.to_array(), DenseVector::from(&flags[..]).to_array());
}

#[test]
fn conversions_preserve_values() {
    let dense = DenseVector::from(&DATA[..]);

    let sequential = SequentialSparseVector::from_vector(&dense);
    let hashed = HashSparseVector::from_vector(&sequential);
    let back = DenseVector::from_vector(&hashed);

    assert_eq!(back.to_array(), dense.to_array());
}

#[test]
fn dot_products_agree_between_representations() {
    let other_data = [1_f64, 0_f64, 2_f64, 3_f64, 0_f64, 0_f64, 4_f64, -1_f64];

    let pairs: Vec<(Box<dyn Vector>, Box<dyn Vector>)> = vec![
        (
            Box::new(DenseVector::from(&DATA[..])),
            Box::new(DenseVector::from(&other_data[..])),
        ),
        (
            Box::new(SequentialSparseVector::from(&DATA[..])),
            Box::new(DenseVector::from(&other_data[..])),
        ),
        (
            Box::new(SequentialSparseVector::from(&DATA[..])),
            Box::new(HashSparseVector::from(&other_data[..])),
        ),
        (
            Box::new(HashSparseVector::from(&DATA[..])),
            Box::new(DenseVector::from(&other_data[..])),
        ),
    ];

    let expected = DATA.iter().zip(other_data.iter()).map(|(x, y)| x * y).sum::<f64>();
    for (left, right) in &pairs {
        assert_approx_eq!(left.dot(right.as_ref()), expected);
        assert_approx_eq!(right.dot(left.as_ref()), expected);
    }
}

#[test]
fn slice_boundaries_hold_for_every_range() {
    let dimension = DATA.len();
    for start in 0..=dimension {
        for end in start..=dimension {
            let sequential = SequentialSparseVector::from(&DATA[..]).slice(start, end);
            let hashed = HashSparseVector::from(&DATA[..]).slice(start, end);

            assert_eq!(sequential.dimension(), end - start);
            assert_eq!(hashed.dimension(), end - start);
            assert_eq!(sequential.to_array(), DATA[start..end].to_vec());
            assert_eq!(hashed.to_array(), DATA[start..end].to_vec());
        }
    }
}

#[test]
fn deep_copies_are_equal_but_independent() {
    let mut original = SequentialSparseVector::from(&DATA[..]);
    let copy = original.clone();

    assert_eq!(copy.to_array(), original.to_array());

    original.set(0, 9_f64);
    assert_eq!(copy.get(0), 0_f64);
}

#[test]
fn merge_matches_random_access_combination() {
    let left_data = [0_f64, 1_f64, 0_f64, 2_f64, 3_f64, 0_f64];
    let right_data = [4_f64, 1_f64, 0_f64, 0_f64, -3_f64, 5_f64];
    let left = SequentialSparseVector::from(&left_data[..]);
    let right = SequentialSparseVector::from(&right_data[..]);

    // The merged difference must equal the per-index difference for every index in the union.
    let difference = &left - &right;
    for index in 0..left_data.len() {
        assert_approx_eq!(difference.get(index), left_data[index] - right_data[index]);
    }

    let sum = &left + &right;
    for index in 0..left_data.len() {
        assert_approx_eq!(sum.get(index), left_data[index] + right_data[index]);
    }
}

#[test]
fn sparse_and_dense_matrix_products_agree() {
    let left_rows = vec![
        vec![0_f64, 2_f64, 0_f64, 1_f64],
        vec![1_f64, 0_f64, 0_f64, 0_f64],
        vec![0_f64, 0_f64, 3_f64, 0_f64],
    ];
    let right_rows = vec![
        vec![1_f64, 0_f64],
        vec![0_f64, 2_f64],
        vec![4_f64, 0_f64],
        vec![0_f64, 0.5],
    ];

    let dense = DenseMatrix::from_rows(&left_rows)
        .multiply(&DenseMatrix::from_rows(&right_rows));
    let sparse = SparseRowMatrix::from_rows(&left_rows)
        .multiply(&SparseRowMatrix::from_rows(&right_rows));
    let mixed = DenseMatrix::from_rows(&left_rows)
        .multiply(&SparseRowMatrix::from_rows(&right_rows));

    assert_eq!(dense.to_array(), sparse.to_array());
    assert_eq!(dense.to_array(), mixed.to_array());
}

/// Matrices below and above the kernel threshold must produce the same values per cell; this
/// exercises the naive path and, when a kernel is compiled in, compares it against the naive
/// path on the same operands.
#[test]
fn dispatch_does_not_change_results() {
    for size in [50, 101] {
        let left = DenseMatrix::constant(6_f64, size, size);
        let right = DenseMatrix::constant(3_f64, size, size);

        let expected = size as f64 * 18_f64;

        let product = left.multiply(&right);
        for &row in &[0, size / 2, size - 1] {
            for &column in &[0, size / 2, size - 1] {
                assert_approx_eq!(product.get(row, column), expected);
            }
        }

        let naive = left.multiply_with_kernel(&right, None);
        if let Some(kernel) = kernel::native() {
            let native = left.multiply_with_kernel(&right, Some(kernel));
            for row in 0..size {
                for column in 0..size {
                    assert_approx_eq!(native.get(row, column), naive.get(row, column));
                }
            }
        }
    }
}

#[test]
fn sparse_right_operand_takes_the_naive_path() {
    // A sparse right operand is excluded from the kernel path regardless of size; the result
    // must nevertheless match the dense-by-dense product of the same values.
    let size = 101;
    let dense_right = DenseMatrix::constant(3_f64, size, size);
    let sparse_right = SparseRowMatrix::from_matrix(&dense_right);
    let left = DenseMatrix::constant(6_f64, size, size);

    let through_sparse = left.multiply(&sparse_right);
    let through_dense = left.multiply(&dense_right);

    for &row in &[0, size / 2, size - 1] {
        for &column in &[0, size / 2, size - 1] {
            assert_approx_eq!(through_sparse.get(row, column), through_dense.get(row, column));
        }
    }
}
