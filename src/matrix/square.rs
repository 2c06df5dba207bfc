use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::Matrix;
use crate::scalar::scalar::Scalar;
use std::fmt;
use std::ops;

/// A [`Matrix`] whose height equals its width, checked when it is built.
///
/// Dereferences to [`Matrix`] for reading. Mutation goes through `invert` and
/// the row operations below, none of which change the shape.
///
/// ```compile_fail
/// use gauss_invert::{Matrix, SquareMatrix};
///
/// let mut square = SquareMatrix::<f64>::identity(2);
/// *square = Matrix::zeros(2, 3);
/// ```
#[derive(Debug, Clone)]
pub struct SquareMatrix<T>(Matrix<T>);

impl<T: Scalar> SquareMatrix<T> {
    pub fn zeros(size: usize) -> SquareMatrix<T> {
        SquareMatrix(Matrix::zeros(size, size))
    }

    pub fn identity(size: usize) -> SquareMatrix<T> {
        SquareMatrix(Matrix::from_fn(size, size, |r, c| {
            if r == c {
                T::one()
            } else {
                T::zero()
            }
        }))
    }

    pub fn from_fn(size: usize, f: impl FnMut(usize, usize) -> T) -> SquareMatrix<T> {
        SquareMatrix(Matrix::from_fn(size, size, f))
    }

    pub fn from_list(lines: Vec<Vec<T>>) -> MatrixResult<SquareMatrix<T>> {
        SquareMatrix::try_from(Matrix::from_list(lines)?)
    }

    pub fn size(&self) -> usize {
        self.0.height()
    }

    pub fn into_inner(self) -> Matrix<T> {
        self.0
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.0.set(row, col, value);
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.0.swap_rows(a, b);
    }

    pub fn scale_row(&mut self, row: usize, factor: &T) {
        self.0.scale_row(row, factor);
    }

    pub fn add_multiple_of_row(&mut self, target: usize, source: usize, multiple: &T) {
        self.0.add_multiple_of_row(target, source, multiple);
    }

    /// Replaces `self` with its inverse.
    ///
    /// The elimination runs on `[self | I]`, a copy, so on
    /// [`MatrixError::DegenerateMatrix`] `self` keeps its previous value.
    pub fn invert(&mut self) -> MatrixResult<()> {
        *self = self.get_inverse()?;
        Ok(())
    }

    pub fn get_inverse(&self) -> MatrixResult<SquareMatrix<T>> {
        let identity = SquareMatrix::identity(self.size());
        let mut augmented = Matrix::horizontal_concat(&self.0, &identity.0)?;
        augmented.row_reduce()?;
        Ok(SquareMatrix(augmented.right_slice()?))
    }
}

impl<T: Scalar> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(matrix: Matrix<T>) -> MatrixResult<SquareMatrix<T>> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Ok(SquareMatrix(matrix))
    }
}

impl<T> ops::Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T: Scalar> PartialEq for SquareMatrix<T> {
    fn eq(&self, rhs: &SquareMatrix<T>) -> bool {
        self.0.equals(&rhs.0)
    }
}

impl<T: Scalar> PartialEq<Matrix<T>> for SquareMatrix<T> {
    fn eq(&self, rhs: &Matrix<T>) -> bool {
        self.0.equals(rhs)
    }
}

impl<T: Scalar> PartialEq<SquareMatrix<T>> for Matrix<T> {
    fn eq(&self, rhs: &SquareMatrix<T>) -> bool {
        self.equals(&rhs.0)
    }
}

impl<T: Scalar> ops::Mul<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = MatrixResult<SquareMatrix<T>>;

    fn mul(self, rhs: &SquareMatrix<T>) -> MatrixResult<SquareMatrix<T>> {
        self.0.multiply(&rhs.0).map(SquareMatrix)
    }
}

impl<T: Scalar> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::fraction::Fraction;

    fn sq<T: Scalar>(lines: Vec<Vec<T>>) -> SquareMatrix<T> {
        SquareMatrix::from_list(lines).unwrap()
    }

    fn assert_inverts(mtx: &SquareMatrix<f64>) {
        let identity = SquareMatrix::identity(mtx.size());
        let inverse = mtx.get_inverse().unwrap();

        assert_eq!((mtx * &inverse).unwrap(), identity);
        assert_eq!((&inverse * mtx).unwrap(), identity);
    }

    fn assert_degenerate(mtx: SquareMatrix<f64>) {
        let before = mtx.clone();
        let mut mtx = mtx;
        assert!(matches!(
            mtx.invert(),
            Err(MatrixError::DegenerateMatrix { .. })
        ));
        assert_eq!(mtx, before);
    }

    #[test]
    fn test_square_construction() {
        let m = Matrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            SquareMatrix::try_from(m).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
        assert_eq!(SquareMatrix::<f64>::zeros(3).shape(), (3, 3));
        assert_eq!(
            SquareMatrix::<i64>::identity(3).to_list(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_mutation_keeps_square_shape() {
        let mut mtx = SquareMatrix::<f64>::identity(3);
        mtx.set(0, 2, 4.0);
        mtx.swap_rows(0, 1);
        mtx.scale_row(2, &2.0);
        mtx.add_multiple_of_row(1, 2, &-2.0);

        assert_eq!(mtx.shape(), (3, 3));
        assert_eq!(
            mtx.to_list(),
            vec![
                vec![0.0, 1.0, 0.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 0.0, 2.0],
            ]
        );

        // reshaping goes through validated construction again
        let reshaped = Matrix::from_fn(2, 3, |_, _| 1.0);
        assert_eq!(
            SquareMatrix::try_from(reshaped).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_1x1() {
        let mtx = sq(vec![vec![5.0]]);
        let inverse = mtx.get_inverse().unwrap();
        assert_eq!(inverse, sq(vec![vec![0.2]]));
        assert_inverts(&mtx);

        assert_eq!(sq(vec![vec![1.0]]).get_inverse().unwrap(), sq(vec![vec![1.0]]));
        for value in [103217.4, -103213217.4, 0.004124] {
            assert_inverts(&sq(vec![vec![value]]));
        }
    }

    #[test]
    fn test_2x2() {
        assert_inverts(&sq(vec![vec![2.0, 7.0], vec![4.0, 6.0]]));
        assert_inverts(&sq(vec![vec![0.0, 1.0], vec![1.0, 2.0]]));
        assert_inverts(&sq(vec![vec![0.7, 1.99], vec![24.1, 9999.0]]));
    }

    #[test]
    fn test_2x2_degenerate() {
        assert_degenerate(sq(vec![vec![10.0, 10.0], vec![10.0, 10.0]]));
        assert_degenerate(sq(vec![vec![2.0, 6.0], vec![1.0, 3.0]]));
        assert_degenerate(sq(vec![vec![0.001, 0.002], vec![0.003, 0.006]]));
        // invertible, but no row has a usable diagonal cell
        assert_degenerate(sq(vec![vec![0.0, 1.0], vec![1.0, 0.0]]));
    }

    #[test]
    fn test_3x3() {
        assert_inverts(&sq(vec![
            vec![-1.0, 3.0, -3.0],
            vec![0.0, -6.0, 5.0],
            vec![-5.0, -3.0, 1.0],
        ]));
        assert_inverts(&sq(vec![
            vec![7.0, 2.0, 1.0],
            vec![0.0, 3.0, -1.0],
            vec![-3.0, 4.0, -2.0],
        ]));
        assert_inverts(&sq(vec![
            vec![2.0, 1.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 1.0],
        ]));

        assert_degenerate(sq(vec![
            vec![1.0, 0.0, 0.0],
            vec![-2.0, 0.0, 0.0],
            vec![4.0, 6.0, 1.0],
        ]));
        assert_degenerate(sq(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ]));
    }

    #[test]
    fn test_4x4() {
        assert_inverts(&sq(vec![
            vec![4.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 2.0, 0.0],
            vec![0.0, 1.0, 2.0, 0.0],
            vec![1.0, 0.0, 0.0, 1.0],
        ]));
        assert_inverts(&sq(vec![
            vec![1.0, 2.0, 1.0, 0.0],
            vec![2.0, 1.0, 1.0, 1.0],
            vec![-1.0, 2.0, 1.0, -1.0],
            vec![1.0, 1.0, 1.0, 2.0],
        ]));
    }

    #[test]
    fn test_7x7() {
        let mtx = sq(vec![
            vec![1.0, 2.0, 3.0, 4.0, 0.0, -1.0, 0.0],
            vec![0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 2.0, 2.0, 2.0, -2.0, 1.0, 3.0],
            vec![1.0, 3.0, 5.0, 7.0, 0.0, -1.0, 1.0],
            vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0],
            vec![9.0, -2.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        ]);
        assert_inverts(&mtx);
    }

    #[test]
    fn test_identity_is_own_inverse() {
        for size in 0..9 {
            let identity = SquareMatrix::<f64>::identity(size);
            assert_eq!(identity.get_inverse().unwrap(), identity);
        }
    }

    #[test]
    fn test_invert_in_place() {
        let mut mtx = sq(vec![vec![2.0, 4.0], vec![1.0, 3.0]]);
        let before = mtx.clone();
        let inverse = mtx.get_inverse().unwrap();
        assert_eq!(mtx, before);

        mtx.invert().unwrap();
        assert_eq!(mtx, inverse);
        assert_eq!(mtx.to_list(), vec![vec![1.5, -2.0], vec![-0.5, 1.0]]);
    }

    #[test]
    fn test_exact_integer_inverse() {
        let mtx = sq(vec![vec![1i64, 2], vec![0, 1]]);
        assert_eq!(
            mtx.get_inverse().unwrap().to_list(),
            vec![vec![1, -2], vec![0, 1]]
        );

        // integer reciprocals truncate: no error, but not an inverse either
        let mtx = sq(vec![vec![2i64, 1], vec![1, 1]]);
        let inverse = mtx.get_inverse().unwrap();
        assert_ne!((&mtx * &inverse).unwrap(), SquareMatrix::identity(2));
    }

    #[test]
    fn test_fraction_inverse() {
        let f = |s: &str| s.parse::<Fraction>().unwrap();
        let mtx = sq(vec![vec![f("2"), f("7")], vec![f("4"), f("6")]]);
        let inverse = mtx.get_inverse().unwrap();

        assert_eq!(
            inverse.to_list(),
            vec![vec![f("-3/8"), f("7/16")], vec![f("1/4"), f("-1/8")]]
        );
        assert_eq!((&inverse * &mtx).unwrap(), SquareMatrix::identity(2));
        assert_eq!(inverse.to_string(), "\n\t-3/8\t7/16\n\t1/4\t-1/8");
    }
}
