//! Coarse-grained synchronization wrapper for sharing one container across
//! threads.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::matrix::{ContainerKind, Element, Matrix, MatrixBase, Vector};

/// Serializes access to a single shared container.
///
/// Read operations take a read lock and mutations a write lock, each held
/// only for the duration of the single call, never across calls; sequences
/// of calls from different threads may interleave.
/// [`MutexMatrix::enumerate`] snapshots the stored triples under the read
/// lock and iterates the snapshot afterwards.
pub struct MutexMatrix<M> {
    inner: RwLock<M>,
}

impl<M> MutexMatrix<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub fn into_inner(self) -> M {
        self.inner.into_inner()
    }

    /// Explicit read lock, for callers composing several reads atomically.
    pub fn read(&self) -> RwLockReadGuard<'_, M> {
        self.inner.read()
    }

    /// Explicit write lock, for callers composing several writes atomically.
    pub fn write(&self) -> RwLockWriteGuard<'_, M> {
        self.inner.write()
    }
}

impl<T, M> MatrixBase<T> for MutexMatrix<M>
where
    T: Element,
    M: MatrixBase<T>,
{
    fn rows(&self) -> usize {
        self.inner.read().rows()
    }

    fn columns(&self) -> usize {
        self.inner.read().columns()
    }

    fn kind(&self) -> ContainerKind {
        self.inner.read().kind()
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        self.inner.read().at(r, c)
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.inner.write().set(r, c, value)
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        self.inner.write().update(r, c, f)
    }

    fn values(&self) -> usize {
        self.inner.read().values()
    }

    fn clear(&mut self) {
        self.inner.write().clear();
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        let snapshot: Vec<(usize, usize, T)> = self.inner.read().enumerate().collect();
        Box::new(snapshot.into_iter())
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        self.inner.write().map_inplace(f);
    }
}

impl<T, M> Matrix<T> for MutexMatrix<M>
where
    T: Element,
    M: Matrix<T>,
{
    fn rows_at(&self, r: usize) -> Result<Box<dyn Vector<T>>> {
        self.inner.read().rows_at(r)
    }

    fn columns_at(&self, c: usize) -> Result<Box<dyn Vector<T>>> {
        self.inner.read().columns_at(c)
    }

    fn rows_at_to_vec(&self, r: usize) -> Result<Vec<T>> {
        self.inner.read().rows_at_to_vec(r)
    }

    fn copy_matrix(&self) -> Box<dyn Matrix<T>> {
        self.inner.read().copy_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::operators::reduce_matrix_to_scalar;
    use crate::scalar::plus_monoid;
    use crate::sparse::CsrMatrix;
    use std::sync::Arc;

    #[test]
    fn test_per_call_locking_round_trip() {
        let mut shared = MutexMatrix::new(CsrMatrix::<f64>::new(3, 3));
        shared.set(1, 1, 2.0).unwrap();
        shared.update(1, 1, &mut |v| v * 3.0).unwrap();
        assert_eq!(shared.at(1, 1).unwrap(), 6.0);
        assert_eq!(shared.values(), 1);
    }

    #[test]
    fn test_enumerate_snapshots_under_lock() {
        let shared = MutexMatrix::new(
            CsrMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap(),
        );
        let triples: Vec<_> = shared.enumerate().collect();
        assert_eq!(triples, vec![(0, 0, 1.0), (1, 1, 2.0)]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = Arc::new(MutexMatrix::new(
            CsrMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(),
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let ctx = Context::new();
                    reduce_matrix_to_scalar(&ctx, &*shared, None, &plus_monoid()).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10.0);
        }
    }
}
