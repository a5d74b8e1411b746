//! Dense containers: a row-major matrix and a fully materialized vector.

mod vector;

pub use vector::DenseVector;

use crate::error::{Error, Result};
use crate::matrix::{check_position, ContainerKind, Element, Matrix, MatrixBase, Vector};

/// A fully materialized row-major matrix with O(1) element access.
///
/// Every cell is stored, so [`MatrixBase::values`] always reports
/// `rows * columns` regardless of content.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Element> DenseMatrix<T> {
    /// A `rows x columns` matrix filled with the default value.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![T::default(); rows * columns],
        }
    }

    /// Build from row slices; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::RaggedRows {
                    row: i,
                    found: row.len(),
                    expected: columns,
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Transposed deep copy.
    pub fn transpose(&self) -> DenseMatrix<T> {
        let mut out = DenseMatrix::new(self.columns, self.rows);
        for r in 0..self.rows {
            for c in 0..self.columns {
                out.data[c * self.rows + r] = self.data[r * self.columns + c];
            }
        }
        out
    }

    #[inline]
    fn offset(&self, r: usize, c: usize) -> usize {
        r * self.columns + c
    }

    pub(crate) fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Element> MatrixBase<T> for DenseMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Dense
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        check_position(self.rows, self.columns, r, c)?;
        Ok(self.data[self.offset(r, c)])
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let offset = self.offset(r, c);
        self.data[offset] = value;
        Ok(())
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let offset = self.offset(r, c);
        self.data[offset] = f(self.data[offset]);
        Ok(())
    }

    fn values(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.fill(T::default());
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        Box::new(
            self.data
                .iter()
                .enumerate()
                .map(move |(i, &v)| (i / self.columns, i % self.columns, v)),
        )
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        for i in 0..self.data.len() {
            let (r, c) = (i / self.columns, i % self.columns);
            self.data[i] = f(r, c, self.data[i]);
        }
    }
}

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    fn rows_at(&self, r: usize) -> Result<Box<dyn Vector<T>>> {
        Ok(Box::new(DenseVector::from_slice(&self.rows_at_to_vec(r)?)))
    }

    fn columns_at(&self, c: usize) -> Result<Box<dyn Vector<T>>> {
        Error::check_index(c, self.columns)?;
        let column: Vec<T> = (0..self.rows)
            .map(|r| self.data[self.offset(r, c)])
            .collect();
        Ok(Box::new(DenseVector::from_slice(&column)))
    }

    fn rows_at_to_vec(&self, r: usize) -> Result<Vec<T>> {
        Error::check_index(r, self.rows)?;
        let start = self.offset(r, 0);
        Ok(self.data[start..start + self.columns].to_vec())
    }

    fn copy_matrix(&self) -> Box<dyn Matrix<T>> {
        Box::new(self.clone())
    }
}
