//! Unary map operators: apply, negative and scalar multiplication.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::{suppressed, validate_mask, Mask};
use crate::matrix::{Matrix, MatrixBase, NumericOps};
use crate::scalar::{negate, UnaryOp};

/// Writes `op(value)` for each stored entry of `input` into `output` at the
/// TRANSPOSED position `(c, r)`.
///
/// The index swap is inherited convention: the copying form of apply also
/// transposes, while the in-place form ([`apply_assign`]) does not. `output`
/// must therefore have `input`'s dimensions swapped, and the mask is probed
/// at the write position.
pub fn apply<T, A, C>(
    ctx: &Context,
    input: &A,
    mask: Option<&dyn Mask>,
    op: UnaryOp<T>,
    output: &mut C,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    C: MatrixBase<T>,
{
    if output.rows() != input.columns() || output.columns() != input.rows() {
        return Err(Error::DimensionMismatch {
            expected: (input.columns(), input.rows()),
            found: (output.rows(), output.columns()),
        });
    }
    validate_mask(mask, output.rows(), output.columns())?;

    for (r, c, v) in input.enumerate() {
        if ctx.is_cancelled() {
            log::trace!("apply cancelled");
            return Ok(());
        }
        if !suppressed(mask, c, r) {
            output.set(c, r, op.apply(v))?;
        }
    }
    Ok(())
}

/// In-place unary map with masking: `m[r][c] = op(m[r][c])` for each stored
/// entry whose position the mask does not suppress. No index transposition,
/// unlike [`apply`]. A snapshot of the stored coordinates is taken first, so
/// entries mapped to the default can be removed while iterating.
pub fn apply_assign<T, A>(
    ctx: &Context,
    mask: Option<&dyn Mask>,
    op: UnaryOp<T>,
    m: &mut A,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T>,
{
    validate_mask(mask, m.rows(), m.columns())?;

    let stored: Vec<(usize, usize, T)> = m.enumerate().collect();
    for (r, c, v) in stored {
        if ctx.is_cancelled() {
            log::trace!("apply_assign cancelled");
            return Ok(());
        }
        if !suppressed(mask, r, c) {
            m.set(r, c, op.apply(v))?;
        }
    }
    Ok(())
}

/// Additive inverse of every stored element, in place.
pub fn negative<T, A>(ctx: &Context, mask: Option<&dyn Mask>, m: &mut A) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T>,
{
    apply_assign(ctx, mask, negate(), m)
}

/// Every stored element multiplied by `alpha`, on a deep copy.
pub fn scalar_multiply<T, A>(ctx: &Context, m: &A, alpha: T) -> Result<A>
where
    T: NumericOps,
    A: Matrix<T> + Clone,
{
    let mut out = m.clone();
    let stored: Vec<(usize, usize, T)> = out.enumerate().collect();
    for (r, c, v) in stored {
        if ctx.is_cancelled() {
            log::trace!("scalar_multiply cancelled");
            return Ok(out);
        }
        out.set(r, c, v * alpha)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{identity, reciprocal};
    use crate::sparse::CsrMatrix;

    struct FullMask {
        rows: usize,
        columns: usize,
    }

    impl Mask for FullMask {
        fn rows(&self) -> usize {
            self.rows
        }
        fn columns(&self) -> usize {
            self.columns
        }
        fn element(&self, _r: usize, _c: usize) -> bool {
            true
        }
    }

    #[test]
    fn test_apply_writes_transposed() {
        let ctx = Context::new();
        let input = CsrMatrix::from_rows(vec![vec![2.0, 0.0, 4.0]]).unwrap();
        let mut output = CsrMatrix::new(3, 1);
        apply(&ctx, &input, None, reciprocal(), &mut output).unwrap();
        assert_eq!(output.at(0, 0).unwrap(), 0.5);
        assert_eq!(output.at(2, 0).unwrap(), 0.25);
        assert_eq!(output.values(), 2);
    }

    #[test]
    fn test_apply_requires_swapped_dimensions() {
        let ctx = Context::new();
        let input = CsrMatrix::<f64>::new(2, 3);
        let mut output = CsrMatrix::new(2, 3);
        assert_eq!(
            apply(&ctx, &input, None, identity(), &mut output),
            Err(Error::DimensionMismatch {
                expected: (3, 2),
                found: (2, 3),
            })
        );
    }

    #[test]
    fn test_apply_assign_maps_in_place() {
        let ctx = Context::new();
        let mut m = CsrMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, -3.0]]).unwrap();
        apply_assign(&ctx, None, negate(), &mut m).unwrap();
        assert_eq!(m.at(0, 0).unwrap(), -1.0);
        assert_eq!(m.at(1, 1).unwrap(), 3.0);
    }

    #[test]
    fn test_negative() {
        let ctx = Context::new();
        let mut m = CsrMatrix::from_rows(vec![vec![5.0, -2.0]]).unwrap();
        negative(&ctx, None, &mut m).unwrap();
        assert_eq!(m.at(0, 0).unwrap(), -5.0);
        assert_eq!(m.at(0, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_scalar_multiply_leaves_source_intact() {
        let ctx = Context::new();
        let m = CsrMatrix::from_rows(vec![vec![1.0, 0.0], vec![2.0, 3.0]]).unwrap();
        let scaled = scalar_multiply(&ctx, &m, 10.0).unwrap();
        assert_eq!(scaled.at(1, 1).unwrap(), 30.0);
        assert_eq!(m.at(1, 1).unwrap(), 3.0);
        assert_eq!(scaled.values(), m.values());
    }

    #[test]
    fn test_cancelled_apply_assign_stops_before_mutating() {
        let ctx = Context::new();
        ctx.cancel();
        let mut m = CsrMatrix::from_rows(vec![vec![1.0, 0.0], vec![2.0, 3.0]]).unwrap();
        let before = m.clone();
        apply_assign(&ctx, None, negate(), &mut m).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_cancelled_scalar_multiply_stops_before_scaling() {
        let ctx = Context::new();
        ctx.cancel();
        let m = CsrMatrix::from_rows(vec![vec![1.0, 0.0], vec![2.0, 3.0]]).unwrap();
        let scaled = scalar_multiply(&ctx, &m, 10.0).unwrap();
        assert_eq!(scaled, m);
    }

    #[test]
    fn test_full_mask_suppresses_everything() {
        let ctx = Context::new();
        let mut m = CsrMatrix::from_rows(vec![vec![5.0, -2.0]]).unwrap();
        let before = m.clone();
        let mask = FullMask { rows: 1, columns: 2 };
        apply_assign(&ctx, Some(&mask), negate(), &mut m).unwrap();
        assert_eq!(m, before);

        let mut output = CsrMatrix::from_rows(vec![vec![7.0], vec![8.0]]).unwrap();
        let out_before = output.clone();
        let mask = FullMask { rows: 2, columns: 1 };
        apply(&ctx, &m, Some(&mask), negate(), &mut output).unwrap();
        assert_eq!(output, out_before);
    }
}
