use graphalgebra::dense::DenseMatrix;
use graphalgebra::operators::strassen::{multiply, multiply_crossover};
use graphalgebra::operators::{equal, matrix_matrix_multiply};
use graphalgebra::{Context, Error, MatrixBase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Integer-valued entries keep float products exact, so Strassen and naive
/// results can be compared without tolerance.
fn random_integer_matrix(n: usize, seed: u64) -> DenseMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(-4..=4) as f64).collect())
        .collect();
    DenseMatrix::from_rows(rows).unwrap()
}

fn naive(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let ctx = Context::new();
    let mut out = DenseMatrix::new(a.rows(), b.columns());
    matrix_matrix_multiply(&ctx, a, b, None, &mut out).unwrap();
    out
}

#[test]
fn strassen_matches_naive_across_crossover_sizes() {
    let ctx = Context::new();
    for (size, crossover) in [(2, 2), (4, 2), (8, 2), (16, 2), (64, 16)] {
        let a = random_integer_matrix(size, size as u64);
        let b = random_integer_matrix(size, size as u64 + 1);
        let expected = naive(&a, &b);
        let got = multiply_crossover(&ctx, &a, &b, crossover).unwrap();
        assert!(
            equal(&ctx, &got, &expected).unwrap(),
            "size {size} crossover {crossover} diverged from naive"
        );
    }
}

#[test]
fn constant_by_column_scenario() {
    // Each row of the operand is [1, 2, 3, 4]; the square has each row
    // equal to [10, 20, 30, 40].
    let ctx = Context::new();
    let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0]; 4]).unwrap();
    let c = multiply_crossover(&ctx, &a, &a, 2).unwrap();
    for r in 0..4 {
        for (col, expected) in [10.0, 20.0, 30.0, 40.0].iter().enumerate() {
            assert_eq!(c.at(r, col).unwrap(), *expected);
        }
    }
}

#[test]
fn default_crossover_handles_odd_sizes_naively() {
    // 65 exceeds a crossover of 65 nowhere, so the naive path runs and odd
    // dimensions never reach the splitter.
    let ctx = Context::new();
    let a = random_integer_matrix(65, 7);
    let b = random_integer_matrix(65, 8);
    let got = multiply_crossover(&ctx, &a, &b, 65).unwrap();
    assert!(equal(&ctx, &got, &naive(&a, &b)).unwrap());
}

#[test]
fn odd_size_above_crossover_is_a_typed_error() {
    let ctx = Context::new();
    let a = random_integer_matrix(65, 9);
    assert_eq!(
        multiply_crossover(&ctx, &a, &a, 2).unwrap_err(),
        Error::OddStrassenDimension { size: 65 }
    );
}

#[test]
fn default_entry_point_uses_crossover_64() {
    let ctx = Context::new();
    let a = random_integer_matrix(128, 11);
    let b = random_integer_matrix(128, 12);
    let got = multiply(&ctx, &a, &b).unwrap();
    assert!(equal(&ctx, &got, &naive(&a, &b)).unwrap());
}
