//! Transpose operators.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::{suppressed, validate_mask, Mask};
use crate::matrix::{Element, MatrixBase};
use crate::sparse::{CscMatrix, CsrMatrix};

/// Masked transpose: every stored `(r, c, v)` of `m` is written to `out` at
/// `(c, r)`. Sparse targets re-insert each entry by binary search, so the
/// cost is O(n log n) in stored elements; there is no index trick.
pub fn transpose<T, A, C>(
    ctx: &Context,
    m: &A,
    mask: Option<&dyn Mask>,
    out: &mut C,
) -> Result<()>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
    C: MatrixBase<T>,
{
    if out.rows() != m.columns() || out.columns() != m.rows() {
        return Err(Error::DimensionMismatch {
            expected: (m.columns(), m.rows()),
            found: (out.rows(), out.columns()),
        });
    }
    validate_mask(mask, out.rows(), out.columns())?;

    for (r, c, v) in m.enumerate() {
        if ctx.is_cancelled() {
            log::trace!("transpose cancelled");
            return Ok(());
        }
        if !suppressed(mask, c, r) {
            out.set(c, r, v)?;
        }
    }
    Ok(())
}

/// Transpose into a freshly constructed CSR matrix.
pub fn transpose_to_csr<T, A>(ctx: &Context, m: &A) -> Result<CsrMatrix<T>>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
{
    let mut out = CsrMatrix::new(m.columns(), m.rows());
    transpose(ctx, m, None, &mut out)?;
    Ok(out)
}

/// Transpose into a freshly constructed CSC matrix.
pub fn transpose_to_csc<T, A>(ctx: &Context, m: &A) -> Result<CscMatrix<T>>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
{
    let mut out = CscMatrix::new(m.columns(), m.rows());
    transpose(ctx, m, None, &mut out)?;
    Ok(out)
}
