use crate::error::{MatrixError, MatrixResult};
use crate::matrix::column::Column;
use crate::matrix::row::Row;
use crate::scalar::scalar::Scalar;
use itertools::iproduct;
use log::{debug, trace};
use std::fmt;
use std::ops;

/// Dense `height x width` matrix, stored as a list of [`Row`]s.
///
/// The shape is fixed once the value exists: only the contents change,
/// through the elementary row operations and [`Matrix::row_reduce`].
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Row<T>>,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(height: usize, width: usize) -> Matrix<T> {
        Matrix {
            rows: (0..height).map(|_| Row::zeros(width)).collect(),
            cols: width,
        }
    }

    /// Cell `(r, c)` is `f(r, c)`, filled row by row.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Matrix<T> {
        Matrix {
            rows: (0..height)
                .map(|r| (0..width).map(|c| f(r, c)).collect::<Vec<T>>().into())
                .collect(),
            cols: width,
        }
    }

    /// Builds a matrix from row-major literals. All rows must have the same
    /// length.
    pub fn from_list(lines: Vec<Vec<T>>) -> MatrixResult<Matrix<T>> {
        let cols = lines.first().map_or(0, |line| line.len());
        if let Some((row, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows: lines.into_iter().map(Row::from).collect(),
            cols,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|row| row.as_slice().to_vec()).collect()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> &T {
        self.row(row).get(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.row_mut(row).set(col, value);
    }

    pub fn row(&self, row: usize) -> &Row<T> {
        self.check_row(row);
        &self.rows[row]
    }

    // private: row widths must stay fixed
    fn row_mut(&mut self, row: usize) -> &mut Row<T> {
        self.check_row(row);
        &mut self.rows[row]
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    pub fn column(&self, col: usize) -> Column<'_, T> {
        Column::new(self, col)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.check_row(a);
        self.check_row(b);
        if a != b {
            self.rows.swap(a, b);
        }
    }

    pub fn scale_row(&mut self, row: usize, factor: &T) {
        self.row_mut(row).scale(factor);
    }

    /// `row[target] += row[source] * multiple`
    pub fn add_multiple_of_row(&mut self, target: usize, source: usize, multiple: &T) {
        let addend = self.row(source).scaled(multiple);
        self.row_mut(target).add(&addend);
    }

    /// Gauss-Jordan elimination, in place.
    ///
    /// Pivots are taken from the diagonal. When `(r, r)` is negligible, the
    /// first later row `s` whose own diagonal cell `(s, s)` is usable gets
    /// swapped in; the candidate's cell in column `r` is not looked at. This
    /// rejects some invertible matrices (`[[0, 1], [1, 0]]` for one).
    ///
    /// On [`MatrixError::DegenerateMatrix`] the matrix is left half reduced.
    pub fn row_reduce(&mut self) -> MatrixResult<()> {
        let height = self.height();

        for r in 0..height {
            if r >= self.cols {
                debug!(
                    "No diagonal cell left for row {} of a {}x{} matrix",
                    r, height, self.cols
                );
                return Err(MatrixError::DegenerateMatrix { column: r });
            }

            if self.rows[r][r].is_negligible() {
                let cols = self.cols;
                let candidate = (r + 1..height)
                    .find(|&s| s < cols && !self.rows[s][s].is_negligible());

                match candidate {
                    Some(s) => {
                        trace!("Pivot {}: swapping in row {}", r, s);
                        self.swap_rows(r, s);
                    }
                    None => {
                        debug!("No usable pivot for column {}", r);
                        return Err(MatrixError::DegenerateMatrix { column: r });
                    }
                }
            }

            let pivot = self.rows[r][r].clone();
            if pivot != T::one() {
                self.scale_row(r, &pivot.reciprocal());
            }

            for s in 0..height {
                if s == r || self.rows[s][r].is_zero() {
                    continue;
                }
                let factor = self.rows[s][r].negated();
                self.add_multiple_of_row(s, r, &factor);
            }
        }

        Ok(())
    }

    /// `[lhs | rhs]`, row by row.
    pub fn horizontal_concat(lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if lhs.height() != rhs.height() {
            return Err(MatrixError::DimensionMismatch {
                op: "horizontal_concat",
                lhs: lhs.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: lhs
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(l, r)| l.iter().chain(r.iter()).cloned().collect::<Vec<T>>().into())
                .collect(),
            cols: lhs.cols + rhs.cols,
        })
    }

    /// Copy of the columns `[width / 2, width)`.
    pub fn right_slice(&self) -> MatrixResult<Matrix<T>> {
        if self.cols % 2 != 0 {
            return Err(MatrixError::OddWidth { cols: self.cols });
        }

        let half = self.cols / 2;
        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.as_slice()[half..].to_vec().into())
                .collect(),
            cols: half,
        })
    }

    pub fn multiply(&self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.cols != rhs.height() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| {
                    (0..rhs.cols)
                        .map(|c| {
                            row.iter()
                                .zip(rhs.column(c))
                                .map(|(a, b)| a.clone() * b.clone())
                                .sum()
                        })
                        .collect::<Vec<T>>()
                        .into()
                })
                .collect(),
            cols: rhs.cols,
        })
    }

    /// Cellwise [`Scalar::approx_eq`]. Matrices of different shapes are
    /// never equal.
    pub fn equals(&self, rhs: &Matrix<T>) -> bool {
        self.shape() == rhs.shape()
            && iproduct!(0..self.height(), 0..self.cols)
                .all(|(r, c)| self.rows[r][c].approx_eq(&rhs.rows[r][c]))
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: (0..self.cols)
                .map(|c| self.column(c).cloned().collect::<Vec<T>>().into())
                .collect(),
            cols: self.height(),
        }
    }

    #[inline(always)]
    fn check_row(&self, row: usize) {
        assert!(
            row < self.height(),
            "Row index {} out of range for a matrix of height {}",
            row,
            self.height()
        );
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, rhs: &Matrix<T>) -> bool {
        self.equals(rhs)
    }
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        self.multiply(rhs)
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// One line per row, each starting with a line break; every cell is
    /// preceded by a tab. A precision (`{:.6}`) applies to every cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            f.write_str("\n")?;
            for cell in row {
                match f.precision() {
                    Some(precision) => write!(f, "\t{:.*}", precision, cell)?,
                    None => write!(f, "\t{}", cell)?,
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
