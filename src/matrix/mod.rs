//! Container traits shared by every matrix and vector kind.
//!
//! The crate splits container access into an object-safe base trait
//! ([`MatrixBase`]) and two extension traits ([`Matrix`], [`Vector`]) so
//! that operators can be generic over concrete containers while row/column
//! views can still be returned as trait objects.

use num_traits::{NumOps, One, Zero};

use crate::error::{Error, Result};

/// Types storable as container elements.
///
/// `Default` supplies the "not stored" value of sparse containers (0 for
/// numbers, `false` for booleans); sparse storage never holds it explicitly.
pub trait Element: Copy + Default + PartialEq + Send + Sync + 'static {}

impl<T> Element for T where T: Copy + Default + PartialEq + Send + Sync + 'static {}

/// Elements supporting the arithmetic the operator layer needs.
pub trait NumericOps: Element + NumOps + Zero + One + PartialOrd {}

impl<T> NumericOps for T where T: Element + NumOps + Zero + One + PartialOrd {}

/// The closed set of container kinds.
///
/// Operators query [`ContainerKind::is_sparse`] to pick an enumeration
/// strategy (iterate the sparse operand's stored entries rather than probing
/// a dense operand cell by cell).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Dense,
    Csr,
    Csc,
    DenseVector,
    SparseVector,
}

impl ContainerKind {
    pub fn is_sparse(self) -> bool {
        matches!(
            self,
            ContainerKind::Csr | ContainerKind::Csc | ContainerKind::SparseVector
        )
    }
}

/// Object-safe access surface common to all containers.
pub trait MatrixBase<T: Element>: Send + Sync {
    /// Row count, fixed at construction.
    fn rows(&self) -> usize;

    /// Column count, fixed at construction.
    fn columns(&self) -> usize;

    /// Storage classification, driving operator dispatch.
    fn kind(&self) -> ContainerKind;

    /// Element at `(r, c)`; the default value for unstored sparse positions.
    fn at(&self, r: usize, c: usize) -> Result<T>;

    /// Store `value` at `(r, c)`. Sparse containers remove the entry when
    /// `value` is the default.
    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()>;

    /// Read-modify-write in a single lookup. For sparse containers this is
    /// one binary search instead of the two an `at` + `set` pair would cost.
    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()>;

    /// `rows * columns`.
    fn size(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Count of explicitly stored elements: `rows * columns` for dense
    /// containers, the non-default entry count for sparse ones.
    fn values(&self) -> usize;

    /// Empty all storage; dimensions are unchanged.
    fn clear(&mut self);

    /// Visit every stored element exactly once as `(row, column, value)`.
    ///
    /// Order is implementation defined (row-major for dense and CSR,
    /// column-major for CSC) and not stable across mutations.
    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_>;

    /// Replace each stored value with `f(row, column, value)` in place.
    ///
    /// Sparse containers physically remove entries whose new value is the
    /// default, preserving the no-stored-default invariant. Keys never
    /// change, so no re-sorting happens.
    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T);
}

/// Two-dimensional containers with row/column views.
pub trait Matrix<T: Element>: MatrixBase<T> {
    /// Materialize row `r` as a vector of logical length `columns()`.
    ///
    /// Cost is storage dependent: contiguous for CSR and dense, one binary
    /// search per column for CSC.
    fn rows_at(&self, r: usize) -> Result<Box<dyn Vector<T>>>;

    /// Materialize column `c` as a vector of logical length `rows()`.
    ///
    /// The mirror of [`Matrix::rows_at`]: contiguous for CSC, one binary
    /// search per row for CSR. Pick the storage kind that makes the
    /// dominant slicing direction cheap.
    fn columns_at(&self, c: usize) -> Result<Box<dyn Vector<T>>>;

    /// Row `r` fully materialized as a dense `Vec`, for hot paths needing
    /// repeated indexed access without per-element dispatch.
    fn rows_at_to_vec(&self, r: usize) -> Result<Vec<T>>;

    /// Deep clone behind a trait object.
    fn copy_matrix(&self) -> Box<dyn Matrix<T>>;
}

/// One-dimensional containers; a vector is an `l x 1` matrix.
pub trait Vector<T: Element>: MatrixBase<T> {
    /// Logical length `l`.
    fn length(&self) -> usize;

    fn at_vec(&self, i: usize) -> Result<T>;

    fn set_vec(&mut self, i: usize, value: T) -> Result<()>;

    fn update_vec(&mut self, i: usize, f: &mut dyn FnMut(T) -> T) -> Result<()>;

    /// Deep clone behind a trait object.
    fn copy_vector(&self) -> Box<dyn Vector<T>>;

    /// Fully materialized dense form.
    fn to_vec(&self) -> Vec<T>;
}

/// Shared bounds check for `(r, c)` accesses.
pub(crate) fn check_position(rows: usize, columns: usize, r: usize, c: usize) -> Result<()> {
    Error::check_index(r, rows)?;
    Error::check_index(c, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert!(ContainerKind::Csr.is_sparse());
        assert!(ContainerKind::Csc.is_sparse());
        assert!(ContainerKind::SparseVector.is_sparse());
        assert!(!ContainerKind::Dense.is_sparse());
        assert!(!ContainerKind::DenseVector.is_sparse());
    }

    #[test]
    fn test_position_check() {
        assert!(check_position(2, 3, 1, 2).is_ok());
        assert_eq!(
            check_position(2, 3, 2, 0),
            Err(Error::IndexOutOfBounds { index: 2, bound: 2 })
        );
        assert_eq!(
            check_position(2, 3, 0, 3),
            Err(Error::IndexOutOfBounds { index: 3, bound: 3 })
        );
    }
}
