//! Compressed sparse vector storage.

use crate::error::{Error, Result};
use crate::matrix::{check_position, ContainerKind, Element, MatrixBase, Vector};
use crate::sparse::{probe, Probe};

/// A sparse vector of logical length `l`, treated as an `l x 1` matrix.
///
/// One-dimensional counterpart of the compressed matrices: `indices` is
/// strictly increasing, default values are never stored, and lookups are a
/// single lower-bound binary search.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVector<T> {
    length: usize,
    values: Vec<T>,
    indices: Vec<usize>,
}

impl<T: Element> SparseVector<T> {
    /// An empty vector of logical `length`.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            values: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Build from a dense slice, skipping default values.
    pub fn from_slice(values: &[T]) -> Self {
        let mut vector = Self::new(values.len());
        for (i, &value) in values.iter().enumerate() {
            if value != T::default() {
                vector.values.push(value);
                vector.indices.push(i);
            }
        }
        vector
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.values.len(), self.indices.len());
        for w in self.indices.windows(2) {
            assert!(w[0] < w[1], "indices not strictly increasing");
        }
        for &v in &self.values {
            assert!(v != T::default(), "stored default value");
        }
    }
}

impl<T: Element> MatrixBase<T> for SparseVector<T> {
    fn rows(&self) -> usize {
        self.length
    }

    fn columns(&self) -> usize {
        1
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::SparseVector
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        check_position(self.length, 1, r, c)?;
        self.at_vec(r)
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        check_position(self.length, 1, r, c)?;
        self.set_vec(r, value)
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        check_position(self.length, 1, r, c)?;
        self.update_vec(r, f)
    }

    fn values(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
        self.indices.clear();
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        Box::new(
            self.indices
                .iter()
                .zip(self.values.iter())
                .map(|(&i, &v)| (i, 0, v)),
        )
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        let mut values = Vec::with_capacity(self.values.len());
        let mut indices = Vec::with_capacity(self.indices.len());
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            let value = f(i, 0, v);
            if value != T::default() {
                values.push(value);
                indices.push(i);
            }
        }
        self.values = values;
        self.indices = indices;
    }
}

impl<T: Element> Vector<T> for SparseVector<T> {
    fn length(&self) -> usize {
        self.length
    }

    fn at_vec(&self, i: usize) -> Result<T> {
        Error::check_index(i, self.length)?;
        match probe(&self.indices, 0, self.indices.len(), i) {
            Probe::Hit(pos) => Ok(self.values[pos]),
            Probe::Miss(_) => Ok(T::default()),
        }
    }

    fn set_vec(&mut self, i: usize, value: T) -> Result<()> {
        Error::check_index(i, self.length)?;
        match probe(&self.indices, 0, self.indices.len(), i) {
            Probe::Hit(pos) => {
                if value == T::default() {
                    self.values.remove(pos);
                    self.indices.remove(pos);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                if value != T::default() {
                    self.values.insert(pos, value);
                    self.indices.insert(pos, i);
                }
            }
        }
        Ok(())
    }

    fn update_vec(&mut self, i: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        Error::check_index(i, self.length)?;
        match probe(&self.indices, 0, self.indices.len(), i) {
            Probe::Hit(pos) => {
                let value = f(self.values[pos]);
                if value == T::default() {
                    self.values.remove(pos);
                    self.indices.remove(pos);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                let value = f(T::default());
                if value != T::default() {
                    self.values.insert(pos, value);
                    self.indices.insert(pos, i);
                }
            }
        }
        Ok(())
    }

    fn copy_vector(&self) -> Box<dyn Vector<T>> {
        Box::new(self.clone())
    }

    fn to_vec(&self) -> Vec<T> {
        let mut dense = vec![T::default(); self.length];
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            dense[i] = v;
        }
        dense
    }
}
