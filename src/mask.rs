//! Write-suppression masks.
//!
//! A mask is a read-only boolean predicate with the same shape as the
//! output container it guards. `true` at `(r, c)` means "suppress the write
//! at this position". Operators take `Option<&dyn Mask>`; `None` behaves as
//! an [`EmptyMask`], which never suppresses anything.

use crate::error::{Error, Result};
use crate::matrix::{Element, Vector};

pub trait Mask: Send + Sync {
    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    /// `true` when the write at `(r, c)` must be skipped.
    fn element(&self, r: usize, c: usize) -> bool;
}

/// A mask that never suppresses.
#[derive(Copy, Clone, Debug)]
pub struct EmptyMask {
    rows: usize,
    columns: usize,
}

impl EmptyMask {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl Mask for EmptyMask {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn element(&self, _r: usize, _c: usize) -> bool {
        false
    }
}

/// Adapts a vector into an `l x 1` mask that suppresses wherever the vector
/// holds a non-default value. Frontier-expansion algorithms use this to keep
/// already-visited positions out of the next frontier.
pub struct VectorMask<'a, T: Element> {
    vector: &'a dyn Vector<T>,
}

impl<'a, T: Element> VectorMask<'a, T> {
    pub fn new(vector: &'a dyn Vector<T>) -> Self {
        Self { vector }
    }
}

impl<T: Element> Mask for VectorMask<'_, T> {
    fn rows(&self) -> usize {
        self.vector.length()
    }

    fn columns(&self) -> usize {
        1
    }

    fn element(&self, r: usize, _c: usize) -> bool {
        self.vector
            .at_vec(r)
            .map(|v| v != T::default())
            .unwrap_or(false)
    }
}

/// `true` when `mask` suppresses the write at `(r, c)`; `None` never does.
pub(crate) fn suppressed(mask: Option<&dyn Mask>, r: usize, c: usize) -> bool {
    mask.map(|m| m.element(r, c)).unwrap_or(false)
}

/// Validates that a supplied mask matches the output shape it guards.
pub(crate) fn validate_mask(mask: Option<&dyn Mask>, rows: usize, columns: usize) -> Result<()> {
    match mask {
        Some(m) if m.rows() != rows || m.columns() != columns => {
            Err(Error::MaskDimensionMismatch {
                mask: (m.rows(), m.columns()),
                output: (rows, columns),
            })
        }
        _ => Ok(()),
    }
}
