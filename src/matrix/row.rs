use crate::scalar::scalar::Scalar;
use std::ops;

/// A fixed-width run of cells; the unit the elementary row operations act on.
#[derive(Debug, Clone)]
pub struct Row<T> {
    cells: Vec<T>,
}

impl<T: Scalar> Row<T> {
    pub fn zeros(width: usize) -> Row<T> {
        Row {
            cells: vec![T::zero(); width],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, col: usize) -> &T {
        self.check_index(col);
        &self.cells[col]
    }

    pub fn set(&mut self, col: usize, value: T) {
        self.check_index(col);
        self.cells[col] = value;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Applies `f` to every cell, in column order.
    pub fn apply(&mut self, f: impl FnMut(&mut T)) {
        self.cells.iter_mut().for_each(f);
    }

    pub fn scale(&mut self, factor: &T) {
        self.apply(|cell| *cell = cell.clone() * factor.clone());
    }

    pub fn scaled(&self, factor: &T) -> Row<T> {
        Row {
            cells: self
                .cells
                .iter()
                .map(|cell| cell.clone() * factor.clone())
                .collect(),
        }
    }

    /// Elementwise `self += other`.
    pub fn add(&mut self, other: &Row<T>) {
        assert_eq!(
            self.width(),
            other.width(),
            "Cannot add rows of different widths"
        );
        for (cell, rhs) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell = cell.clone() + rhs.clone();
        }
    }

    #[inline(always)]
    fn check_index(&self, col: usize) {
        assert!(
            col < self.width(),
            "Column index {} out of range for a row of width {}",
            col,
            self.width()
        );
    }
}

impl<T> From<Vec<T>> for Row<T> {
    fn from(cells: Vec<T>) -> Row<T> {
        Row { cells }
    }
}

impl<T> From<Row<T>> for Vec<T> {
    fn from(row: Row<T>) -> Vec<T> {
        row.cells
    }
}

impl<T: Scalar> ops::Index<usize> for Row<T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        self.get(col)
    }
}

impl<T: Scalar> ops::IndexMut<usize> for Row<T> {
    fn index_mut(&mut self, col: usize) -> &mut T {
        self.check_index(col);
        &mut self.cells[col]
    }
}

/// Same width and every cell pair equal under [`Scalar::approx_eq`].
impl<T: Scalar> PartialEq for Row<T> {
    fn eq(&self, rhs: &Row<T>) -> bool {
        self.width() == rhs.width()
            && self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .all(|(a, b)| a.approx_eq(b))
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
