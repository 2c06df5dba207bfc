use crate::matrix::matrix::Matrix;
use crate::scalar::scalar::Scalar;

/// Reads one column of a matrix top to bottom (or bottom to top), without
/// copying it.
#[derive(Debug, Clone)]
pub struct Column<'a, T> {
    matrix: &'a Matrix<T>,
    col: usize,
    // next row to yield from the top, and one past the next from the bottom
    front: usize,
    back: usize,
}

impl<'a, T: Scalar> Column<'a, T> {
    pub(crate) fn new(matrix: &'a Matrix<T>, col: usize) -> Column<'a, T> {
        assert!(
            col < matrix.width(),
            "Column index {} out of range for a matrix of width {}",
            col,
            matrix.width()
        );
        Column {
            matrix,
            col,
            front: 0,
            back: matrix.height(),
        }
    }

    pub fn index(&self) -> usize {
        self.col
    }

    /// Rewinds both cursors to the ends of the column.
    pub fn restart(&mut self) {
        self.front = 0;
        self.back = self.matrix.height();
    }
}

impl<'a, T: Scalar> Iterator for Column<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.matrix.get(self.front, self.col);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: Scalar> DoubleEndedIterator for Column<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.matrix.get(self.back, self.col))
    }
}

impl<'a, T: Scalar> ExactSizeIterator for Column<'a, T> {}

impl<'a, T: Scalar> std::iter::FusedIterator for Column<'a, T> {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
