//! Dense square-matrix inversion by Gauss-Jordan elimination on `[A | I]`.
//!
//! ```
//! use gauss_invert::matrix::square::SquareMatrix;
//!
//! let a = SquareMatrix::from_list(vec![vec![2.0, 7.0], vec![4.0, 6.0]]).unwrap();
//! let inverse = a.get_inverse().unwrap();
//! assert_eq!((&inverse * &a).unwrap(), SquareMatrix::identity(2));
//! ```

pub mod matrix {
    pub mod column;
    pub mod matrix;
    pub mod row;
    pub mod square;
}
pub mod scalar {
    pub mod fraction;
    pub mod scalar;
}

pub mod bench;
pub mod error;
pub mod logging;

pub use error::{MatrixError, MatrixResult};
pub use matrix::matrix::Matrix;
pub use matrix::square::SquareMatrix;
pub use scalar::scalar::{Scalar, TOLERANCE};
