//! Error types for numerical methods.

use thiserror::Error;

/// A specialized Result type for numerical methods.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while running a numerical method.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix is empty, not square, or does not match the right-hand side.
    #[error("Invalid dimensions: {rows}x{cols} matrix with right-hand side of length {rhs}")]
    InvalidDimensions {
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix (the widest row for ragged input).
        cols: usize,
        /// Length of the right-hand side vector.
        rhs: usize,
    },

    /// No unused row is strictly diagonally dominant for a target position.
    #[error("Unable to achieve diagonal dominance: no row qualifies for position {position}")]
    DominanceUnachievable {
        /// Diagonal position that could not be filled.
        position: usize,
    },

    /// Iterative method hit its iteration cap without converging.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual or step size.
        residual: f64,
    },

    /// Iterates blew up (NaN or unbounded magnitude).
    #[error("Iteration diverged after {iterations} iterations (last value: {value:.2e})")]
    Diverged {
        /// Iteration at which divergence was detected.
        iterations: u32,
        /// The offending iterate.
        value: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// Matrix (or Jacobian) is singular.
    #[error("Singular matrix: determinant {determinant:.2e}")]
    SingularMatrix {
        /// The near-zero determinant.
        determinant: f64,
    },

    /// Two interpolation nodes share the same abscissa.
    #[error("Duplicate interpolation node at x = {x}")]
    DuplicateNode {
        /// The repeated abscissa.
        x: f64,
    },

    /// Finite-difference formula requested on a non-uniform grid.
    #[error("Grid is not uniform: finite-difference formulas need equally spaced nodes")]
    NonUniformGrid,

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailure {
            iterations,
            residual,
        }
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub fn invalid_dimensions(rows: usize, cols: usize, rhs: usize) -> Self {
        Self::InvalidDimensions { rows, cols, rhs }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
