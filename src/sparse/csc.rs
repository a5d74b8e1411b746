//! Compressed sparse column storage.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::matrix::{check_position, ContainerKind, Element, Matrix, MatrixBase, Vector};
use crate::operators::transpose_to_csc;
use crate::sparse::{probe, Probe, SparseVector};

/// A matrix compressed by column; the mirror image of
/// [`CsrMatrix`](crate::sparse::CsrMatrix).
///
/// `col_offsets` has length `columns + 1`; column `c`'s entries live at
/// `[col_offsets[c], col_offsets[c + 1])` of `values`/`row_indices`, with
/// row indices strictly increasing inside each column. Column slicing is
/// contiguous, row slicing costs one binary search per column.
#[derive(Clone, Debug, PartialEq)]
pub struct CscMatrix<T> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
    row_indices: Vec<usize>,
    col_offsets: Vec<usize>,
}

impl<T: Element> CscMatrix<T> {
    /// An empty `rows x columns` matrix.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: Vec::new(),
            row_indices: Vec::new(),
            col_offsets: vec![0; columns + 1],
        }
    }

    /// Build from row slices, skipping default values.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        let mut matrix = Self::new(rows.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::RaggedRows {
                    row: r,
                    found: row.len(),
                    expected: columns,
                });
            }
        }
        // Column-major fill keeps each insertion an append.
        for c in 0..columns {
            for (r, row) in rows.iter().enumerate() {
                if row[c] != T::default() {
                    matrix.values.push(row[c]);
                    matrix.row_indices.push(r);
                }
            }
            matrix.col_offsets[c + 1] = matrix.values.len();
        }
        Ok(matrix)
    }

    /// Transposed deep copy, rebuilt entry by entry through the generic
    /// transpose operator (O(n log n) in stored elements).
    pub fn transpose(&self) -> CscMatrix<T> {
        transpose_to_csc(&Context::new(), self).expect("transpose of a well-formed matrix")
    }

    fn column_bounds(&self, c: usize) -> (usize, usize) {
        (self.col_offsets[c], self.col_offsets[c + 1])
    }

    fn remove_entry(&mut self, pos: usize, c: usize) {
        self.values.remove(pos);
        self.row_indices.remove(pos);
        for offset in &mut self.col_offsets[c + 1..] {
            *offset -= 1;
        }
    }

    fn insert_entry(&mut self, pos: usize, c: usize, r: usize, value: T) {
        self.values.insert(pos, value);
        self.row_indices.insert(pos, r);
        for offset in &mut self.col_offsets[c + 1..] {
            *offset += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.col_offsets.len(), self.columns + 1);
        assert_eq!(self.values.len(), self.row_indices.len());
        assert_eq!(*self.col_offsets.last().unwrap(), self.values.len());
        for c in 0..self.columns {
            let (start, end) = self.column_bounds(c);
            for w in self.row_indices[start..end].windows(2) {
                assert!(w[0] < w[1], "row indices not strictly increasing");
            }
        }
        for &v in &self.values {
            assert!(v != T::default(), "stored default value");
        }
    }
}

impl<T: Element> MatrixBase<T> for CscMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Csc
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.column_bounds(c);
        match probe(&self.row_indices, start, end, r) {
            Probe::Hit(pos) => Ok(self.values[pos]),
            Probe::Miss(_) => Ok(T::default()),
        }
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.column_bounds(c);
        match probe(&self.row_indices, start, end, r) {
            Probe::Hit(pos) => {
                if value == T::default() {
                    self.remove_entry(pos, c);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                if value != T::default() {
                    self.insert_entry(pos, c, r, value);
                }
            }
        }
        Ok(())
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.column_bounds(c);
        match probe(&self.row_indices, start, end, r) {
            Probe::Hit(pos) => {
                let value = f(self.values[pos]);
                if value == T::default() {
                    self.remove_entry(pos, c);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                let value = f(T::default());
                if value != T::default() {
                    self.insert_entry(pos, c, r, value);
                }
            }
        }
        Ok(())
    }

    fn values(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
        self.row_indices.clear();
        self.col_offsets.fill(0);
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        // Column-major, unlike CSR and dense.
        Box::new((0..self.columns).flat_map(move |c| {
            let (start, end) = self.column_bounds(c);
            (start..end).map(move |i| (self.row_indices[i], c, self.values[i]))
        }))
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        let mut values = Vec::with_capacity(self.values.len());
        let mut row_indices = Vec::with_capacity(self.row_indices.len());
        let mut col_offsets = vec![0; self.columns + 1];
        for c in 0..self.columns {
            let (start, end) = self.column_bounds(c);
            for i in start..end {
                let value = f(self.row_indices[i], c, self.values[i]);
                if value != T::default() {
                    values.push(value);
                    row_indices.push(self.row_indices[i]);
                }
            }
            col_offsets[c + 1] = values.len();
        }
        self.values = values;
        self.row_indices = row_indices;
        self.col_offsets = col_offsets;
    }
}

impl<T: Element> Matrix<T> for CscMatrix<T> {
    fn rows_at(&self, r: usize) -> Result<Box<dyn Vector<T>>> {
        Error::check_index(r, self.rows)?;
        let mut row = SparseVector::new(self.columns);
        for c in 0..self.columns {
            let (start, end) = self.column_bounds(c);
            if let Probe::Hit(pos) = probe(&self.row_indices, start, end, r) {
                row.set_vec(c, self.values[pos])?;
            }
        }
        Ok(Box::new(row))
    }

    fn columns_at(&self, c: usize) -> Result<Box<dyn Vector<T>>> {
        Error::check_index(c, self.columns)?;
        let (start, end) = self.column_bounds(c);
        let mut column = SparseVector::new(self.rows);
        for i in start..end {
            column.set_vec(self.row_indices[i], self.values[i])?;
        }
        Ok(Box::new(column))
    }

    fn rows_at_to_vec(&self, r: usize) -> Result<Vec<T>> {
        Error::check_index(r, self.rows)?;
        let mut row = vec![T::default(); self.columns];
        for c in 0..self.columns {
            let (start, end) = self.column_bounds(c);
            if let Probe::Hit(pos) = probe(&self.row_indices, start, end, r) {
                row[c] = self.values[pos];
            }
        }
        Ok(row)
    }

    fn copy_matrix(&self) -> Box<dyn Matrix<T>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CscMatrix<f64> {
        // [1 0 2]
        // [0 0 0]
        // [3 4 0]
        // [0 5 6]
        CscMatrix::from_rows(vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![3.0, 4.0, 0.0],
            vec![0.0, 5.0, 6.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let mut m = CscMatrix::<f64>::new(3, 3);
        m.set(1, 2, 4.5).unwrap();
        assert_eq!(m.at(1, 2).unwrap(), 4.5);
        assert_eq!(m.at(0, 0).unwrap(), 0.0);
        assert_eq!(m.values(), 1);
        m.assert_invariants();
    }

    #[test]
    fn test_setting_default_removes_entry() {
        let mut m = sample();
        m.set(3, 1, 0.0).unwrap();
        assert_eq!(m.values(), 5);
        assert_eq!(m.at(3, 1).unwrap(), 0.0);
        assert_eq!(m.at(2, 1).unwrap(), 4.0);
        m.assert_invariants();
    }

    #[test]
    fn test_insert_keeps_row_order() {
        let mut m = CscMatrix::<i64>::new(6, 1);
        for r in [4, 0, 5, 2] {
            m.set(r, 0, (r + 1) as i64).unwrap();
        }
        let triples: Vec<_> = m.enumerate().collect();
        assert_eq!(
            triples,
            vec![(0, 0, 1), (2, 0, 3), (4, 0, 5), (5, 0, 6)]
        );
        m.assert_invariants();
    }

    #[test]
    fn test_enumerate_is_column_major() {
        let m = sample();
        let triples: Vec<_> = m.enumerate().collect();
        assert_eq!(
            triples,
            vec![
                (0, 0, 1.0),
                (2, 0, 3.0),
                (2, 1, 4.0),
                (3, 1, 5.0),
                (0, 2, 2.0),
                (3, 2, 6.0),
            ]
        );
    }

    #[test]
    fn test_column_slicing_is_contiguous() {
        let m = sample();
        let col = m.columns_at(1).unwrap();
        assert_eq!(col.values(), 2);
        assert_eq!(col.to_vec(), vec![0.0, 0.0, 4.0, 5.0]);
    }

    #[test]
    fn test_row_slicing_probes_each_column() {
        let m = sample();
        assert_eq!(m.rows_at_to_vec(2).unwrap(), vec![3.0, 4.0, 0.0]);
        let row = m.rows_at(0).unwrap();
        assert_eq!(row.values(), 2);
        assert_eq!(row.at_vec(2).unwrap(), 2.0);
    }

    #[test]
    fn test_update_and_removal_offsets() {
        let mut m = sample();
        m.update(2, 0, &mut |v| v - 3.0).unwrap();
        assert_eq!(m.values(), 5);
        assert_eq!(m.at(2, 0).unwrap(), 0.0);
        // Later columns keep their entries after the offset shift.
        assert_eq!(m.at(3, 2).unwrap(), 6.0);
        m.assert_invariants();
    }

    #[test]
    fn test_map_inplace_drops_defaults() {
        let mut m = sample();
        m.map_inplace(&mut |_, _, v| if v > 4.0 { v } else { 0.0 });
        assert_eq!(m.values(), 2);
        assert_eq!(m.at(3, 1).unwrap(), 5.0);
        assert_eq!(m.at(3, 2).unwrap(), 6.0);
        m.assert_invariants();
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.columns(), 4);
        assert_eq!(t.at(1, 2).unwrap(), 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_clear() {
        let mut m = sample();
        m.clear();
        assert_eq!(m.values(), 0);
        assert_eq!(m.rows(), 4);
        m.assert_invariants();
    }
}
