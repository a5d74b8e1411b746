//! Structural equality across container kinds.

use crate::context::Context;
use crate::error::Result;
use crate::matrix::{Element, MatrixBase};

/// Logical content equality, regardless of storage kind.
///
/// Differing shapes compare unequal rather than erroring. When both
/// operands share a sparse/dense classification, differing stored-value
/// counts short-circuit to `false` and either side can drive enumeration.
/// Across classifications the dense operand drives, visiting every cell,
/// while the sparse side is probed by binary search, so default cells the
/// sparse operand never stores are still compared.
///
/// A cancelled context makes the result undefined; `false` is returned.
pub fn equal<T, A, B>(ctx: &Context, a: &A, b: &B) -> Result<bool>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T> + ?Sized,
{
    if a.rows() != b.rows() || a.columns() != b.columns() {
        return Ok(false);
    }

    let a_sparse = a.kind().is_sparse();
    let b_sparse = b.kind().is_sparse();

    if a_sparse == b_sparse {
        if a.values() != b.values() {
            return Ok(false);
        }
        for (r, c, v) in a.enumerate() {
            if ctx.is_cancelled() {
                return Ok(false);
            }
            if b.at(r, c)? != v {
                return Ok(false);
            }
        }
    } else if a_sparse {
        for (r, c, v) in b.enumerate() {
            if ctx.is_cancelled() {
                return Ok(false);
            }
            if a.at(r, c)? != v {
                return Ok(false);
            }
        }
    } else {
        for (r, c, v) in a.enumerate() {
            if ctx.is_cancelled() {
                return Ok(false);
            }
            if b.at(r, c)? != v {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Negation of [`equal`].
pub fn not_equal<T, A, B>(ctx: &Context, a: &A, b: &B) -> Result<bool>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T> + ?Sized,
{
    Ok(!equal(ctx, a, b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseMatrix;
    use crate::sparse::{CscMatrix, CsrMatrix};

    fn rows() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![3.0, 4.0, 0.0],
        ]
    }

    #[test]
    fn test_cross_kind_equality() {
        let ctx = Context::new();
        let dense = DenseMatrix::from_rows(rows()).unwrap();
        let csr = CsrMatrix::from_rows(rows()).unwrap();
        let csc = CscMatrix::from_rows(rows()).unwrap();

        assert!(equal(&ctx, &dense, &csr).unwrap());
        assert!(equal(&ctx, &csr, &dense).unwrap());
        assert!(equal(&ctx, &csr, &csc).unwrap());
        assert!(equal(&ctx, &dense, &csc).unwrap());

        // Stored-value counts differ by classification even when content
        // matches.
        assert_eq!(dense.values(), 9);
        assert_eq!(csr.values(), 4);
    }

    #[test]
    fn test_mixed_kind_catches_extra_dense_entry() {
        let ctx = Context::new();
        let mut cells = rows();
        cells[1][1] = 9.0;
        let dense = DenseMatrix::from_rows(cells).unwrap();
        let csr = CsrMatrix::from_rows(rows()).unwrap();
        // The differing cell is unstored on the sparse side; full dense
        // enumeration still finds it.
        assert!(not_equal(&ctx, &dense, &csr).unwrap());
        assert!(not_equal(&ctx, &csr, &dense).unwrap());
    }

    #[test]
    fn test_value_count_fast_path() {
        let ctx = Context::new();
        let a = CsrMatrix::from_rows(rows()).unwrap();
        let mut b = CsrMatrix::from_rows(rows()).unwrap();
        b.set(1, 1, 5.0).unwrap();
        assert!(!equal(&ctx, &a, &b).unwrap());
    }

    #[test]
    fn test_shape_mismatch_is_unequal_not_error() {
        let ctx = Context::new();
        let a = CsrMatrix::<f64>::new(2, 3);
        let b = CsrMatrix::<f64>::new(3, 2);
        assert!(!equal(&ctx, &a, &b).unwrap());
    }

    #[test]
    fn test_value_difference() {
        let ctx = Context::new();
        let a = CsrMatrix::from_rows(rows()).unwrap();
        let mut b = CsrMatrix::from_rows(rows()).unwrap();
        b.set(2, 1, 8.0).unwrap();
        assert!(not_equal(&ctx, &a, &b).unwrap());
    }
}
