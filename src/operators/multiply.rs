//! Naive product operators: matrix-matrix, matrix-vector, vector-matrix.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::{suppressed, validate_mask, Mask};
use crate::matrix::{Matrix, MatrixBase, NumericOps, Vector};

/// `c = a * b` by the naive triple loop over row and column views.
///
/// Dot products iterate only the stored entries of each column view, so a
/// sparse right operand keeps the inner loop short. The mask suppresses
/// individual cell writes into `c`.
pub fn matrix_matrix_multiply<T, A, B, C>(
    ctx: &Context,
    a: &A,
    b: &B,
    mask: Option<&dyn Mask>,
    c: &mut C,
) -> Result<()>
where
    T: NumericOps,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
    C: MatrixBase<T>,
{
    if a.columns() != b.rows() {
        return Err(Error::InnerDimensionMismatch {
            left_columns: a.columns(),
            right_rows: b.rows(),
        });
    }
    if c.rows() != a.rows() || c.columns() != b.columns() {
        return Err(Error::DimensionMismatch {
            expected: (a.rows(), b.columns()),
            found: (c.rows(), c.columns()),
        });
    }
    validate_mask(mask, c.rows(), c.columns())?;

    // Column views are reused across every output row.
    let columns: Vec<Box<dyn Vector<T>>> = (0..b.columns())
        .map(|col| b.columns_at(col))
        .collect::<Result<_>>()?;

    for r in 0..a.rows() {
        let row = a.rows_at_to_vec(r)?;
        for (col, column) in columns.iter().enumerate() {
            if ctx.is_cancelled() {
                log::trace!("matrix_matrix_multiply cancelled at row {r}");
                return Ok(());
            }
            if suppressed(mask, r, col) {
                continue;
            }
            let mut sum = T::zero();
            for (i, _, v) in column.enumerate() {
                sum = sum + row[i] * v;
            }
            c.set(r, col, sum)?;
        }
    }
    Ok(())
}

/// `out = m * v`; `out[r] = sum_i m[r][i] * v[i]`.
pub fn matrix_vector_multiply<T, A, V, W>(
    ctx: &Context,
    m: &A,
    v: &V,
    mask: Option<&dyn Mask>,
    out: &mut W,
) -> Result<()>
where
    T: NumericOps,
    A: Matrix<T> + ?Sized,
    V: Vector<T> + ?Sized,
    W: Vector<T>,
{
    if m.columns() != v.length() {
        return Err(Error::InnerDimensionMismatch {
            left_columns: m.columns(),
            right_rows: v.length(),
        });
    }
    if out.length() != m.rows() {
        return Err(Error::DimensionMismatch {
            expected: (m.rows(), 1),
            found: (out.length(), 1),
        });
    }
    validate_mask(mask, out.length(), 1)?;

    for r in 0..m.rows() {
        if ctx.is_cancelled() {
            log::trace!("matrix_vector_multiply cancelled at row {r}");
            return Ok(());
        }
        if suppressed(mask, r, 0) {
            continue;
        }
        let row = m.rows_at_to_vec(r)?;
        let mut sum = T::zero();
        for (i, _, value) in v.enumerate() {
            sum = sum + row[i] * value;
        }
        out.set_vec(r, sum)?;
    }
    Ok(())
}

/// `out = v * m`; `out[c] = sum_i v[i] * m[i][c]`.
pub fn vector_matrix_multiply<T, V, A, W>(
    ctx: &Context,
    v: &V,
    m: &A,
    mask: Option<&dyn Mask>,
    out: &mut W,
) -> Result<()>
where
    T: NumericOps,
    V: Vector<T> + ?Sized,
    A: Matrix<T> + ?Sized,
    W: Vector<T>,
{
    if v.length() != m.rows() {
        return Err(Error::InnerDimensionMismatch {
            left_columns: v.length(),
            right_rows: m.rows(),
        });
    }
    if out.length() != m.columns() {
        return Err(Error::DimensionMismatch {
            expected: (m.columns(), 1),
            found: (out.length(), 1),
        });
    }
    validate_mask(mask, out.length(), 1)?;

    let dense = v.to_vec();
    for c in 0..m.columns() {
        if ctx.is_cancelled() {
            log::trace!("vector_matrix_multiply cancelled at column {c}");
            return Ok(());
        }
        if suppressed(mask, c, 0) {
            continue;
        }
        let column = m.columns_at(c)?;
        let mut sum = T::zero();
        for (i, _, value) in column.enumerate() {
            sum = sum + dense[i] * value;
        }
        out.set_vec(c, sum)?;
    }
    Ok(())
}
