//! Fully materialized vector, stored as a flat `Vec<T>`.

use crate::error::{Error, Result};
use crate::matrix::{check_position, ContainerKind, Element, MatrixBase, Vector};

/// A dense vector of logical length `l`, treated as an `l x 1` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: Element> DenseVector<T> {
    /// A vector of `length` default values.
    pub fn new(length: usize) -> Self {
        Self {
            data: vec![T::default(); length],
        }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }
}

impl<T: Element> MatrixBase<T> for DenseVector<T> {
    fn rows(&self) -> usize {
        self.data.len()
    }

    fn columns(&self) -> usize {
        1
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::DenseVector
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        check_position(self.data.len(), 1, r, c)?;
        Ok(self.data[r])
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        check_position(self.data.len(), 1, r, c)?;
        self.data[r] = value;
        Ok(())
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        check_position(self.data.len(), 1, r, c)?;
        self.data[r] = f(self.data[r]);
        Ok(())
    }

    fn values(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.fill(T::default());
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        Box::new(self.data.iter().enumerate().map(|(i, &v)| (i, 0, v)))
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = f(i, 0, *v);
        }
    }
}

impl<T: Element> Vector<T> for DenseVector<T> {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn at_vec(&self, i: usize) -> Result<T> {
        Error::check_index(i, self.data.len())?;
        Ok(self.data[i])
    }

    fn set_vec(&mut self, i: usize, value: T) -> Result<()> {
        Error::check_index(i, self.data.len())?;
        self.data[i] = value;
        Ok(())
    }

    fn update_vec(&mut self, i: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        Error::check_index(i, self.data.len())?;
        self.data[i] = f(self.data[i]);
        Ok(())
    }

    fn copy_vector(&self) -> Box<dyn Vector<T>> {
        Box::new(self.clone())
    }

    fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut v = DenseVector::<f64>::new(4);
        v.set_vec(2, 3.5).unwrap();
        assert_eq!(v.at_vec(2).unwrap(), 3.5);
        assert_eq!(v.at_vec(0).unwrap(), 0.0);
        assert_eq!(v.length(), 4);
        assert_eq!(v.values(), 4);
    }

    #[test]
    fn test_vector_is_a_column_matrix() {
        let v = DenseVector::from_slice(&[1, 2, 3]);
        assert_eq!(v.rows(), 3);
        assert_eq!(v.columns(), 1);
        assert_eq!(v.at(1, 0).unwrap(), 2);
        assert!(v.at(0, 1).is_err());
    }

    #[test]
    fn test_bounds() {
        let v = DenseVector::<i32>::new(2);
        assert_eq!(
            v.at_vec(2),
            Err(Error::IndexOutOfBounds { index: 2, bound: 2 })
        );
    }

    #[test]
    fn test_map_inplace_visits_every_cell() {
        let mut v = DenseVector::from_slice(&[1, 0, 3]);
        v.map_inplace(&mut |i, _, x| x + i as i32);
        assert_eq!(v.to_vec(), vec![1, 1, 5]);
    }
}
