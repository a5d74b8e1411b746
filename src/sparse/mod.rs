//! Compressed sparse containers.
//!
//! All three kinds (CSR, CSC, sparse vector) share one storage discipline:
//! sorted index arrays searched by lower bound, splice insertion and removal
//! with offset maintenance, and no explicitly stored default values. A `set`
//! to the default removes the entry; a `set` of an unstored position to the
//! default is a no-op.

mod csc;
mod csr;
mod vector;

pub use csc::CscMatrix;
pub use csr::CsrMatrix;
pub use vector::SparseVector;

/// Lower-bound position of `target` in a sorted index slice: the first
/// position whose index is `>= target`. Insertion at this position keeps the
/// slice strictly increasing.
#[inline]
pub(crate) fn lower_bound(indices: &[usize], target: usize) -> usize {
    indices.partition_point(|&i| i < target)
}

/// Outcome of a lower-bound probe inside one row/column slice.
pub(crate) enum Probe {
    /// The index is stored at this absolute position.
    Hit(usize),
    /// The index is absent; inserting at this absolute position keeps order.
    Miss(usize),
}

/// Probe `[start, end)` of `indices` for `target`.
#[inline]
pub(crate) fn probe(indices: &[usize], start: usize, end: usize, target: usize) -> Probe {
    let pos = start + lower_bound(&indices[start..end], target);
    if pos < end && indices[pos] == target {
        Probe::Hit(pos)
    } else {
        Probe::Miss(pos)
    }
}
