//! Element-wise (Hadamard) and additive operators.
//!
//! `element_wise_*_add` writes each operand's stored values independently;
//! it does not sum overlapping entries. That differs from [`add`], which
//! accumulates. The asymmetry is inherited behavior; see each function's
//! docs before assuming arithmetic addition.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::{suppressed, validate_mask, Mask};
use crate::matrix::{MatrixBase, NumericOps, Vector};

fn check_same_shape<T, A, B>(a: &A, b: &B) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T> + ?Sized,
{
    if a.rows() != b.rows() || a.columns() != b.columns() {
        return Err(Error::DimensionMismatch {
            expected: (a.rows(), a.columns()),
            found: (b.rows(), b.columns()),
        });
    }
    Ok(())
}

/// Hadamard product `c[r][k] = a[r][k] * b[r][k]`.
///
/// Enumeration is driven by whichever operand is sparse, keeping the
/// iteration count at that operand's stored entries; positions unstored in
/// the driver contribute a zero product and are never visited.
pub fn element_wise_multiply<T, A, B, C>(
    ctx: &Context,
    a: &A,
    b: &B,
    mask: Option<&dyn Mask>,
    c: &mut C,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T> + ?Sized,
    C: MatrixBase<T>,
{
    check_same_shape(a, b)?;
    check_same_shape(a, c)?;
    validate_mask(mask, c.rows(), c.columns())?;

    if b.kind().is_sparse() && !a.kind().is_sparse() {
        for (r, col, vb) in b.enumerate() {
            if ctx.is_cancelled() {
                return Ok(());
            }
            if suppressed(mask, r, col) {
                continue;
            }
            c.set(r, col, a.at(r, col)? * vb)?;
        }
    } else {
        for (r, col, va) in a.enumerate() {
            if ctx.is_cancelled() {
                return Ok(());
            }
            if suppressed(mask, r, col) {
                continue;
            }
            c.set(r, col, va * b.at(r, col)?)?;
        }
    }
    Ok(())
}

/// In-place Hadamard product `target[r][k] *= other[r][k]`.
///
/// The self-mutating mode of [`element_wise_multiply`]: every stored entry
/// of `target` is re-checked against `other` and cleared to the default
/// where the product vanishes. A snapshot of `target`'s stored coordinates
/// is taken first, so storage mutation does not disturb iteration.
pub fn element_wise_multiply_assign<T, A, B>(
    ctx: &Context,
    target: &mut A,
    other: &B,
    mask: Option<&dyn Mask>,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T>,
    B: MatrixBase<T> + ?Sized,
{
    check_same_shape(target, other)?;
    validate_mask(mask, target.rows(), target.columns())?;

    let stored: Vec<(usize, usize, T)> = target.enumerate().collect();
    for (r, col, vt) in stored {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if suppressed(mask, r, col) {
            continue;
        }
        target.set(r, col, vt * other.at(r, col)?)?;
    }
    Ok(())
}

/// Hadamard product of vectors; see [`element_wise_multiply`].
pub fn element_wise_vector_multiply<T, U, V, W>(
    ctx: &Context,
    u: &U,
    v: &V,
    mask: Option<&dyn Mask>,
    w: &mut W,
) -> Result<()>
where
    T: NumericOps,
    U: Vector<T> + ?Sized,
    V: Vector<T> + ?Sized,
    W: Vector<T>,
{
    element_wise_multiply(ctx, u, v, mask, w)
}

/// In-place Hadamard product of vectors; see [`element_wise_multiply_assign`].
pub fn element_wise_vector_multiply_assign<T, U, V>(
    ctx: &Context,
    target: &mut U,
    other: &V,
    mask: Option<&dyn Mask>,
) -> Result<()>
where
    T: NumericOps,
    U: Vector<T>,
    V: Vector<T> + ?Sized,
{
    element_wise_multiply_assign(ctx, target, other, mask)
}

/// Union-style element-wise add: writes each operand's stored values into
/// `c` independently. Overlapping positions are written twice and end up
/// holding `b`'s value; the values are NOT summed. Use [`add`] for
/// arithmetic addition.
pub fn element_wise_add<T, A, B, C>(
    ctx: &Context,
    a: &A,
    b: &B,
    mask: Option<&dyn Mask>,
    c: &mut C,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T> + ?Sized,
    C: MatrixBase<T>,
{
    check_same_shape(a, b)?;
    check_same_shape(a, c)?;
    validate_mask(mask, c.rows(), c.columns())?;

    for (r, col, va) in a.enumerate() {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if !suppressed(mask, r, col) {
            c.set(r, col, va)?;
        }
    }
    for (r, col, vb) in b.enumerate() {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if !suppressed(mask, r, col) {
            c.set(r, col, vb)?;
        }
    }
    Ok(())
}

/// The aliased form of [`element_wise_add`]: `target`'s own values are
/// already present, so only `other`'s pass runs.
pub fn element_wise_add_assign<T, A, B>(
    ctx: &Context,
    target: &mut A,
    other: &B,
    mask: Option<&dyn Mask>,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T>,
    B: MatrixBase<T> + ?Sized,
{
    check_same_shape(target, other)?;
    validate_mask(mask, target.rows(), target.columns())?;

    for (r, col, vo) in other.enumerate() {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if !suppressed(mask, r, col) {
            target.set(r, col, vo)?;
        }
    }
    Ok(())
}

/// Union-style add of vectors; see [`element_wise_add`].
pub fn element_wise_vector_add<T, U, V, W>(
    ctx: &Context,
    u: &U,
    v: &V,
    mask: Option<&dyn Mask>,
    w: &mut W,
) -> Result<()>
where
    T: NumericOps,
    U: Vector<T> + ?Sized,
    V: Vector<T> + ?Sized,
    W: Vector<T>,
{
    element_wise_add(ctx, u, v, mask, w)
}

/// Aliased union-style add of vectors; see [`element_wise_add_assign`].
pub fn element_wise_vector_add_assign<T, U, V>(
    ctx: &Context,
    target: &mut U,
    other: &V,
    mask: Option<&dyn Mask>,
) -> Result<()>
where
    T: NumericOps,
    U: Vector<T>,
    V: Vector<T> + ?Sized,
{
    element_wise_add_assign(ctx, target, other, mask)
}

/// True matrix addition: `target[r][k] += a[r][k]` for every stored entry
/// of `a`, materializing every combined non-default value.
pub fn add<T, A, B>(
    ctx: &Context,
    a: &A,
    mask: Option<&dyn Mask>,
    target: &mut B,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T>,
{
    check_same_shape(a, target)?;
    validate_mask(mask, target.rows(), target.columns())?;

    for (r, col, va) in a.enumerate() {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if !suppressed(mask, r, col) {
            target.update(r, col, &mut |v| v + va)?;
        }
    }
    Ok(())
}

/// Subtraction with a deliberate one-sided sweep: only `a`'s stored entries
/// are visited, each updating `target` to `a_value - existing`. Positions
/// stored only in `target` are left untouched rather than negated. This
/// matches the inherited semantics; it is not a symmetric difference.
pub fn subtract<T, A, B>(
    ctx: &Context,
    a: &A,
    mask: Option<&dyn Mask>,
    target: &mut B,
) -> Result<()>
where
    T: NumericOps,
    A: MatrixBase<T> + ?Sized,
    B: MatrixBase<T>,
{
    check_same_shape(a, target)?;
    validate_mask(mask, target.rows(), target.columns())?;

    for (r, col, va) in a.enumerate() {
        if ctx.is_cancelled() {
            return Ok(());
        }
        if !suppressed(mask, r, col) {
            target.update(r, col, &mut |v| va - v)?;
        }
    }
    Ok(())
}
