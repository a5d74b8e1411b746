//! Compressed sparse row storage.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::matrix::{check_position, ContainerKind, Element, Matrix, MatrixBase, Vector};
use crate::operators::transpose_to_csr;
use crate::sparse::{probe, Probe, SparseVector};

/// A matrix compressed by row.
///
/// `row_offsets` has length `rows + 1`; row `r`'s entries live at
/// `[row_offsets[r], row_offsets[r + 1])` of `values`/`col_indices`, with
/// column indices strictly increasing inside each row. Row slicing is
/// contiguous while column slicing costs one binary search per row; prefer
/// [`CscMatrix`](crate::sparse::CscMatrix) when column access dominates.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix<T> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
    col_indices: Vec<usize>,
    row_offsets: Vec<usize>,
}

impl<T: Element> CsrMatrix<T> {
    /// An empty `rows x columns` matrix.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: Vec::new(),
            col_indices: Vec::new(),
            row_offsets: vec![0; rows + 1],
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
            for (c, &value) in row.iter().enumerate() {
                if value != T::default() {
                    matrix.values.push(value);
                    matrix.col_indices.push(c);
                }
            }
            matrix.row_offsets[r + 1] = matrix.values.len();
        }
        Ok(matrix)
    }

    /// Transposed deep copy, rebuilt entry by entry through the generic
    /// transpose operator (O(n log n) in stored elements).
    pub fn transpose(&self) -> CsrMatrix<T> {
        // Infallible here: dimensions are consistent and no mask is applied.
        transpose_to_csr(&Context::new(), self).expect("transpose of a well-formed matrix")
    }

    fn row_bounds(&self, r: usize) -> (usize, usize) {
        (self.row_offsets[r], self.row_offsets[r + 1])
    }

    fn remove_entry(&mut self, pos: usize, r: usize) {
        self.values.remove(pos);
        self.col_indices.remove(pos);
        for offset in &mut self.row_offsets[r + 1..] {
            *offset -= 1;
        }
    }

    fn insert_entry(&mut self, pos: usize, r: usize, c: usize, value: T) {
        self.values.insert(pos, value);
        self.col_indices.insert(pos, c);
        for offset in &mut self.row_offsets[r + 1..] {
            *offset += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.row_offsets.len(), self.rows + 1);
        assert_eq!(self.values.len(), self.col_indices.len());
        assert_eq!(*self.row_offsets.last().unwrap(), self.values.len());
        for r in 0..self.rows {
            let (start, end) = self.row_bounds(r);
            for w in self.col_indices[start..end].windows(2) {
                assert!(w[0] < w[1], "column indices not strictly increasing");
            }
        }
        for &v in &self.values {
            assert!(v != T::default(), "stored default value");
        }
    }
}

impl<T: Element> MatrixBase<T> for CsrMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Csr
    }

    fn at(&self, r: usize, c: usize) -> Result<T> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.row_bounds(r);
        match probe(&self.col_indices, start, end, c) {
            Probe::Hit(pos) => Ok(self.values[pos]),
            Probe::Miss(_) => Ok(T::default()),
        }
    }

    fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.row_bounds(r);
        match probe(&self.col_indices, start, end, c) {
            Probe::Hit(pos) => {
                if value == T::default() {
                    self.remove_entry(pos, r);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                if value != T::default() {
                    self.insert_entry(pos, r, c, value);
                }
            }
        }
        Ok(())
    }

    fn update(&mut self, r: usize, c: usize, f: &mut dyn FnMut(T) -> T) -> Result<()> {
        check_position(self.rows, self.columns, r, c)?;
        let (start, end) = self.row_bounds(r);
        match probe(&self.col_indices, start, end, c) {
            Probe::Hit(pos) => {
                let value = f(self.values[pos]);
                if value == T::default() {
                    self.remove_entry(pos, r);
                } else {
                    self.values[pos] = value;
                }
            }
            Probe::Miss(pos) => {
                let value = f(T::default());
                if value != T::default() {
                    self.insert_entry(pos, r, c, value);
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
        self.col_indices.clear();
        self.row_offsets.fill(0);
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        Box::new((0..self.rows).flat_map(move |r| {
            let (start, end) = self.row_bounds(r);
            (start..end).map(move |i| (r, self.col_indices[i], self.values[i]))
        }))
    }

    fn map_inplace(&mut self, f: &mut dyn FnMut(usize, usize, T) -> T) {
        // Keys never change, so a single rebuild pass preserves ordering
        // while dropping entries that map to the default.
        let mut values = Vec::with_capacity(self.values.len());
        let mut col_indices = Vec::with_capacity(self.col_indices.len());
        let mut row_offsets = vec![0; self.rows + 1];
        for r in 0..self.rows {
            let (start, end) = self.row_bounds(r);
            for i in start..end {
                let value = f(r, self.col_indices[i], self.values[i]);
                if value != T::default() {
                    values.push(value);
                    col_indices.push(self.col_indices[i]);
                }
            }
            row_offsets[r + 1] = values.len();
        }
        self.values = values;
        self.col_indices = col_indices;
        self.row_offsets = row_offsets;
    }
}

impl<T: Element> Matrix<T> for CsrMatrix<T> {
    fn rows_at(&self, r: usize) -> Result<Box<dyn Vector<T>>> {
        Error::check_index(r, self.rows)?;
        let (start, end) = self.row_bounds(r);
        let mut row = SparseVector::new(self.columns);
        for i in start..end {
            row.set_vec(self.col_indices[i], self.values[i])?;
        }
        Ok(Box::new(row))
    }

    fn columns_at(&self, c: usize) -> Result<Box<dyn Vector<T>>> {
        Error::check_index(c, self.columns)?;
        let mut column = SparseVector::new(self.rows);
        for r in 0..self.rows {
            let (start, end) = self.row_bounds(r);
            if let Probe::Hit(pos) = probe(&self.col_indices, start, end, c) {
                column.set_vec(r, self.values[pos])?;
            }
        }
        Ok(Box::new(column))
    }

    fn rows_at_to_vec(&self, r: usize) -> Result<Vec<T>> {
        Error::check_index(r, self.rows)?;
        let mut row = vec![T::default(); self.columns];
        let (start, end) = self.row_bounds(r);
        for i in start..end {
            row[self.col_indices[i]] = self.values[i];
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

    fn sample() -> CsrMatrix<f64> {
        // [1 0 2]
        // [0 0 0]
        // [3 4 0]
        // [0 5 6]
        CsrMatrix::from_rows(vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![3.0, 4.0, 0.0],
            vec![0.0, 5.0, 6.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let mut m = CsrMatrix::<f64>::new(3, 3);
        m.set(1, 2, 4.5).unwrap();
        assert_eq!(m.at(1, 2).unwrap(), 4.5);
        assert_eq!(m.at(0, 0).unwrap(), 0.0);
        assert_eq!(m.values(), 1);
        m.assert_invariants();
    }

    #[test]
    fn test_setting_default_removes_entry() {
        let mut m = sample();
        assert_eq!(m.values(), 6);
        m.set(2, 1, 0.0).unwrap();
        assert_eq!(m.values(), 5);
        assert_eq!(m.at(2, 1).unwrap(), 0.0);
        assert!(m.enumerate().all(|(r, c, _)| (r, c) != (2, 1)));
        m.assert_invariants();
    }

    #[test]
    fn test_setting_unstored_default_is_noop() {
        let mut m = sample();
        m.set(1, 1, 0.0).unwrap();
        assert_eq!(m.values(), 6);
        m.assert_invariants();
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut m = sample();
        m.set(2, 1, 9.0).unwrap();
        assert_eq!(m.values(), 6);
        assert_eq!(m.at(2, 1).unwrap(), 9.0);
        m.assert_invariants();
    }

    #[test]
    fn test_insert_keeps_column_order() {
        let mut m = CsrMatrix::<i64>::new(1, 6);
        for c in [4, 0, 5, 2] {
            m.set(0, c, (c + 1) as i64).unwrap();
        }
        let triples: Vec<_> = m.enumerate().collect();
        assert_eq!(
            triples,
            vec![(0, 0, 1), (0, 2, 3), (0, 4, 5), (0, 5, 6)]
        );
        m.assert_invariants();
    }

    #[test]
    fn test_offset_maintenance_across_rows() {
        let mut m = CsrMatrix::<i32>::new(3, 3);
        m.set(2, 2, 9).unwrap();
        m.set(0, 1, 1).unwrap();
        m.set(1, 0, 4).unwrap();
        assert_eq!(m.at(2, 2).unwrap(), 9);
        assert_eq!(m.at(1, 0).unwrap(), 4);
        m.set(0, 1, 0).unwrap();
        assert_eq!(m.at(1, 0).unwrap(), 4);
        assert_eq!(m.at(2, 2).unwrap(), 9);
        m.assert_invariants();
    }

    #[test]
    fn test_update_single_lookup() {
        let mut m = sample();
        m.update(2, 1, &mut |v| v * 2.0).unwrap();
        assert_eq!(m.at(2, 1).unwrap(), 8.0);
        // Update to default removes; update of an absent entry inserts.
        m.update(2, 1, &mut |_| 0.0).unwrap();
        assert_eq!(m.values(), 5);
        m.update(1, 1, &mut |v| v + 7.0).unwrap();
        assert_eq!(m.at(1, 1).unwrap(), 7.0);
        m.assert_invariants();
    }

    #[test]
    fn test_row_slicing_is_contiguous() {
        let m = sample();
        assert_eq!(m.rows_at_to_vec(2).unwrap(), vec![3.0, 4.0, 0.0]);
        let row = m.rows_at(3).unwrap();
        assert_eq!(row.values(), 2);
        assert_eq!(row.at_vec(1).unwrap(), 5.0);
    }

    #[test]
    fn test_column_slicing_probes_each_row() {
        let m = sample();
        let col = m.columns_at(1).unwrap();
        assert_eq!(col.length(), 4);
        assert_eq!(col.values(), 2);
        assert_eq!(col.to_vec(), vec![0.0, 0.0, 4.0, 5.0]);
    }

    #[test]
    fn test_map_inplace_drops_defaults() {
        let mut m = sample();
        m.map_inplace(&mut |_, _, v| if v < 3.0 { 0.0 } else { v });
        assert_eq!(m.values(), 4);
        assert_eq!(m.at(0, 0).unwrap(), 0.0);
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
        let back = t.transpose();
        assert_eq!(back, m);
    }

    #[test]
    fn test_enumerate_count_matches_values() {
        let m = sample();
        assert_eq!(m.enumerate().count(), m.values());
    }

    #[test]
    fn test_clear() {
        let mut m = sample();
        m.clear();
        assert_eq!(m.values(), 0);
        assert_eq!(m.rows(), 4);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.at(2, 1).unwrap(), 0.0);
        m.assert_invariants();
    }
}
