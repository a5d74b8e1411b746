//! Strassen's recursive block multiplication.
//!
//! Below the crossover dimension the naive triple loop is faster (less
//! recursion and better cache behavior), so the recursion bottoms out into
//! [`matrix_matrix_multiply`]. Above it, the operands split into four
//! quadrants each and the seven Strassen sub-products are computed as
//! parallel tasks joined before combination; the seven may finish in any
//! order.

use crate::context::Context;
use crate::dense::DenseMatrix;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixBase, NumericOps};
use crate::operators::matrix_matrix_multiply;

/// Dimension at or below which the naive multiply takes over.
pub const DEFAULT_CROSSOVER: usize = 64;

/// `a * b` with the default crossover of 64.
pub fn multiply<T, A, B>(ctx: &Context, a: &A, b: &B) -> Result<DenseMatrix<T>>
where
    T: NumericOps,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
{
    multiply_crossover(ctx, a, b, DEFAULT_CROSSOVER)
}

/// `a * b`, recursing while `b.rows()` exceeds `crossover`.
///
/// The split assumes square operands with an even dimension; an odd
/// dimension above the crossover is reported as
/// [`Error::OddStrassenDimension`] rather than silently mis-splitting.
/// Cancellation is observed at every recursion step and inside the naive
/// fallback; a cancelled call returns a correctly sized but undefined
/// result.
pub fn multiply_crossover<T, A, B>(
    ctx: &Context,
    a: &A,
    b: &B,
    crossover: usize,
) -> Result<DenseMatrix<T>>
where
    T: NumericOps,
    A: Matrix<T> + ?Sized,
    B: Matrix<T> + ?Sized,
{
    if a.columns() != b.rows() {
        return Err(Error::InnerDimensionMismatch {
            left_columns: a.columns(),
            right_rows: b.rows(),
        });
    }

    let n = b.rows();
    if n <= crossover || ctx.is_cancelled() {
        log::trace!("strassen: naive multiply at size {n}");
        let mut out = DenseMatrix::new(a.rows(), b.columns());
        matrix_matrix_multiply(ctx, a, b, None, &mut out)?;
        return Ok(out);
    }
    if n % 2 != 0 {
        return Err(Error::OddStrassenDimension { size: n });
    }

    log::trace!("strassen: splitting at size {n}");
    let size = n / 2;
    let a11 = quadrant(ctx, a, 0, 0, size)?;
    let a12 = quadrant(ctx, a, 0, size, size)?;
    let a21 = quadrant(ctx, a, size, 0, size)?;
    let a22 = quadrant(ctx, a, size, size, size)?;
    let b11 = quadrant(ctx, b, 0, 0, size)?;
    let b12 = quadrant(ctx, b, 0, size, size)?;
    let b21 = quadrant(ctx, b, size, 0, size)?;
    let b22 = quadrant(ctx, b, size, size, size)?;

    // m1 = (a11 + a22)(b11 + b22)    m2 = (a21 + a22) b11
    // m3 = a11 (b12 - b22)           m4 = a22 (b21 - b11)
    // m5 = (a11 + a12) b22           m6 = (a21 - a11)(b11 + b12)
    // m7 = (a12 - a22)(b21 + b22)
    let m1a = block_add(&a11, &a22);
    let m1b = block_add(&b11, &b22);
    let m2a = block_add(&a21, &a22);
    let m3b = block_sub(&b12, &b22);
    let m4b = block_sub(&b21, &b11);
    let m5a = block_add(&a11, &a12);
    let m6a = block_sub(&a21, &a11);
    let m6b = block_add(&b11, &b12);
    let m7a = block_sub(&a12, &a22);
    let m7b = block_add(&b21, &b22);

    // Fan out the seven sub-products; all must complete before combining,
    // in no particular order.
    let ((m1, m2), ((m3, m4), (m5, (m6, m7)))) = rayon::join(
        || {
            rayon::join(
                || multiply_crossover(ctx, &m1a, &m1b, crossover),
                || multiply_crossover(ctx, &m2a, &b11, crossover),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || multiply_crossover(ctx, &a11, &m3b, crossover),
                        || multiply_crossover(ctx, &a22, &m4b, crossover),
                    )
                },
                || {
                    rayon::join(
                        || multiply_crossover(ctx, &m5a, &b22, crossover),
                        || {
                            rayon::join(
                                || multiply_crossover(ctx, &m6a, &m6b, crossover),
                                || multiply_crossover(ctx, &m7a, &m7b, crossover),
                            )
                        },
                    )
                },
            )
        },
    );
    let (m1, m2, m3, m4) = (m1?, m2?, m3?, m4?);
    let (m5, m6, m7) = (m5?, m6?, m7?);

    let c11 = block_add(&block_sub(&block_add(&m1, &m4), &m5), &m7);
    let c12 = block_add(&m3, &m5);
    let c21 = block_add(&m2, &m4);
    let c22 = block_add(&block_add(&block_sub(&m1, &m2), &m3), &m6);

    let mut out = DenseMatrix::new(n, n);
    copy_block(&mut out, &c11, 0, 0, size);
    copy_block(&mut out, &c12, 0, size, size);
    copy_block(&mut out, &c21, size, 0, size);
    copy_block(&mut out, &c22, size, size, size);
    Ok(out)
}

/// Dense copy of the `size x size` block of `m` anchored at `(row0, col0)`.
fn quadrant<T, M>(
    ctx: &Context,
    m: &M,
    row0: usize,
    col0: usize,
    size: usize,
) -> Result<DenseMatrix<T>>
where
    T: NumericOps,
    M: Matrix<T> + ?Sized,
{
    let mut out = DenseMatrix::new(size, size);
    for r in 0..size {
        if ctx.is_cancelled() {
            return Ok(out);
        }
        for c in 0..size {
            let v = m.at(row0 + r, col0 + c)?;
            out.set(r, c, v)?;
        }
    }
    Ok(out)
}

fn block_add<T: NumericOps>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    let mut out = a.clone();
    for (o, &v) in out.data_mut().iter_mut().zip(b.data()) {
        *o = *o + v;
    }
    out
}

fn block_sub<T: NumericOps>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    let mut out = a.clone();
    for (o, &v) in out.data_mut().iter_mut().zip(b.data()) {
        *o = *o - v;
    }
    out
}

fn copy_block<T: NumericOps>(
    out: &mut DenseMatrix<T>,
    block: &DenseMatrix<T>,
    row0: usize,
    col0: usize,
    size: usize,
) {
    let stride = out.columns();
    for r in 0..size {
        let src = &block.data()[r * size..(r + 1) * size];
        let offset = (row0 + r) * stride + col0;
        out.data_mut()[offset..offset + size].copy_from_slice(src);
    }
}
