use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// No usable pivot was found while reducing `column`.
    #[error("Cannot invert degenerate matrix (no pivot for column {column})")]
    DegenerateMatrix { column: usize },

    #[error("Dimensions not compatible for {op}: lhs is {lhs:?}, rhs is {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Cannot take the right half of a matrix with odd width {cols}")]
    OddWidth { cols: usize },

    #[error("Matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("Row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid benchmark configuration: {0}")]
    InvalidBenchConfig(String),

    #[error("Cannot build the benchmark thread pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for MatrixError {
    fn from(error: rayon::ThreadPoolBuildError) -> Self {
        MatrixError::ThreadPool(error.to_string())
    }
}

pub type MatrixResult<T> = Result<T, MatrixError>;
