//! Reductions: stream stored values through a monoid.

use std::sync::mpsc;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::{suppressed, validate_mask, Mask};
use crate::matrix::{Element, Matrix, MatrixBase, Vector};
use crate::scalar::Monoid;

/// Folds every mask-surviving stored value of `m` into a single scalar.
///
/// The enumeration runs on a producer thread feeding the monoid's consumer
/// through a rendezvous channel: the producer blocks until the fold is
/// ready for each element, and closing the channel flushes the fold.
/// Cancellation is polled on both sides of the channel.
pub fn reduce_matrix_to_scalar<T, A>(
    ctx: &Context,
    m: &A,
    mask: Option<&dyn Mask>,
    monoid: &Monoid<T>,
) -> Result<T>
where
    T: Element,
    A: MatrixBase<T> + ?Sized,
{
    validate_mask(mask, m.rows(), m.columns())?;

    let folded = std::thread::scope(|scope| {
        let (tx, rx) = mpsc::sync_channel::<T>(0);
        scope.spawn(move || {
            for (r, c, v) in m.enumerate() {
                if ctx.is_cancelled() {
                    log::trace!("reduce producer cancelled");
                    break;
                }
                if suppressed(mask, r, c) {
                    continue;
                }
                // A closed receiver means the consumer is gone; stop.
                if tx.send(v).is_err() {
                    break;
                }
            }
        });
        monoid.reduce_stream(rx, ctx)
    });
    Ok(folded)
}

/// [`reduce_matrix_to_scalar`] for vectors.
pub fn reduce_vector_to_scalar<T, V>(
    ctx: &Context,
    v: &V,
    mask: Option<&dyn Mask>,
    monoid: &Monoid<T>,
) -> Result<T>
where
    T: Element,
    V: Vector<T> + ?Sized,
{
    reduce_matrix_to_scalar(ctx, v, mask, monoid)
}

/// Folds each column of `m` to one scalar of `out`.
///
/// The mask has `m`'s shape and filters source values; a fully masked
/// column folds to the monoid's zero.
pub fn reduce_matrix_to_vector<T, A, W>(
    ctx: &Context,
    m: &A,
    mask: Option<&dyn Mask>,
    monoid: &Monoid<T>,
    out: &mut W,
) -> Result<()>
where
    T: Element,
    A: Matrix<T> + ?Sized,
    W: Vector<T>,
{
    if out.length() != m.columns() {
        return Err(Error::DimensionMismatch {
            expected: (m.columns(), 1),
            found: (out.length(), 1),
        });
    }
    validate_mask(mask, m.rows(), m.columns())?;

    for c in 0..m.columns() {
        if ctx.is_cancelled() {
            log::trace!("reduce_matrix_to_vector cancelled at column {c}");
            return Ok(());
        }
        let column = m.columns_at(c)?;
        let folded = monoid.reduce(
            column
                .enumerate()
                .filter(|&(i, _, _)| !suppressed(mask, i, c))
                .map(|(_, _, v)| v),
        );
        out.set_vec(c, folded)?;
    }
    Ok(())
}
