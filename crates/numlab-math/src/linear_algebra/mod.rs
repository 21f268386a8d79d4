//! Linear algebra utilities.
//!
//! The centrepiece is an iterative solver for square linear systems:
//!
//! 1. [`LinearSystem`] validates the shape of `A x = b` up front.
//! 2. [`enforce_diagonal_dominance`] permutes rows greedily until every row
//!    is strictly diagonally dominant.
//! 3. [`JacobiSolver`] runs the Jacobi fixed-point iteration on the
//!    reordered system until the per-component change falls below the
//!    requested precision.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::linear_algebra::solve_system;
//!
//! // Rows are given out of order; the solver swaps them into dominance.
//! let a = vec![vec![1.0, 3.0], vec![4.0, 1.0]];
//! let b = vec![4.0, 5.0];
//!
//! let result = solve_system(&a, &b, 1e-10).unwrap();
//! assert!((result.solution[0] - 1.0).abs() < 1e-8);
//! assert!((result.solution[1] - 1.0).abs() < 1e-8);
//! assert_eq!(result.permutation, vec![1, 0]);
//! ```

mod dominance;
mod jacobi;

pub use dominance::{enforce_diagonal_dominance, DominantSystem};
pub use jacobi::{solve_system, JacobiConfig, JacobiSolution, JacobiSolver, JACOBI_MAX_ITERATIONS};

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// A square linear system `A x = b`.
///
/// Construction is the validation gate: an empty matrix, a non-square
/// matrix, a right-hand side of the wrong length, or a non-finite entry
/// is rejected before any algorithmic work happens.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl LinearSystem {
    /// Creates a system from an `nalgebra` matrix and vector.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidDimensions`] when the matrix has no rows,
    /// is not square, or its row count differs from `rhs.len()`, and
    /// [`MathError::InvalidInput`] when any entry is NaN or infinite.
    pub fn new(matrix: DMatrix<f64>, rhs: DVector<f64>) -> MathResult<Self> {
        let (rows, cols) = matrix.shape();
        if rows == 0 || rows != cols || rhs.len() != rows {
            return Err(MathError::invalid_dimensions(rows, cols, rhs.len()));
        }

        if matrix.iter().chain(rhs.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input(
                "linear system contains a non-finite coefficient",
            ));
        }

        Ok(Self { matrix, rhs })
    }

    /// Creates a system from row slices.
    ///
    /// Ragged input (any row whose length differs from the number of rows)
    /// is reported as [`MathError::InvalidDimensions`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], rhs: &[f64]) -> MathResult<Self> {
        let n = rows.len();
        let widest = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);

        if n == 0 || rhs.len() != n || rows.iter().any(|r| r.as_ref().len() != n) {
            return Err(MathError::invalid_dimensions(n, widest, rhs.len()));
        }

        let matrix = DMatrix::from_fn(n, n, |i, j| rows[i].as_ref()[j]);
        Self::new(matrix, DVector::from_column_slice(rhs))
    }

    /// Number of unknowns.
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// The coefficient matrix `A`.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The right-hand side `b`.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }
}

/// Infinity norm of a matrix: the largest absolute row sum.
pub fn infinity_norm(matrix: &DMatrix<f64>) -> f64 {
    matrix
        .row_iter()
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Returns true if `|a_ii| > sum_{j != i} |a_ij|` holds for every row.
pub fn is_strictly_diagonally_dominant(matrix: &DMatrix<f64>) -> bool {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return false;
    }

    (0..n).all(|i| {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| matrix[(i, j)].abs())
            .sum();
        matrix[(i, i)].abs() > off_diagonal
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rows_valid() {
        let system =
            LinearSystem::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]], &[5.0, 4.0]).unwrap();

        assert_eq!(system.dim(), 2);
        assert_relative_eq!(system.matrix()[(0, 1)], 1.0);
        assert_relative_eq!(system.matrix()[(1, 0)], 1.0);
        assert_relative_eq!(system.rhs()[1], 4.0);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let err = LinearSystem::from_rows(&rows, &[]).unwrap_err();

        assert_eq!(err, MathError::invalid_dimensions(0, 0, 0));
    }

    #[test]
    fn test_rhs_length_mismatch_rejected() {
        let rows = vec![
            vec![10.0, 1.0, 1.0],
            vec![1.0, 10.0, 1.0],
            vec![1.0, 1.0, 10.0],
        ];
        let err = LinearSystem::from_rows(&rows, &[1.0, 2.0]).unwrap_err();

        assert_eq!(err, MathError::invalid_dimensions(3, 3, 2));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![4.0, 1.0], vec![1.0]];
        let err = LinearSystem::from_rows(&rows, &[1.0, 2.0]).unwrap_err();

        assert!(matches!(err, MathError::InvalidDimensions { rows: 2, .. }));
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let matrix = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rhs = DVector::from_vec(vec![1.0, 2.0]);

        let err = LinearSystem::new(matrix, rhs).unwrap_err();
        assert_eq!(err, MathError::invalid_dimensions(2, 3, 2));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = LinearSystem::from_rows(&[vec![f64::NAN]], &[1.0]).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));

        let err = LinearSystem::from_rows(&[vec![2.0]], &[f64::INFINITY]).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_infinity_norm() {
        let a = DMatrix::from_row_slice(3, 3, &[1.0, -2.0, 3.0, 4.0, 5.0, -6.0, 0.5, 0.5, 0.5]);
        assert_relative_eq!(infinity_norm(&a), 15.0);

        let a = DMatrix::from_row_slice(1, 1, &[-7.0]);
        assert_relative_eq!(infinity_norm(&a), 7.0);
    }

    #[test]
    fn test_dominance_check() {
        let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
        assert!(is_strictly_diagonally_dominant(&a));

        // Equality is not strict dominance
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 2.0, 1.0, 3.0]);
        assert!(!is_strictly_diagonally_dominant(&a));

        let a = DMatrix::from_row_slice(1, 2, &[2.0, 1.0]);
        assert!(!is_strictly_diagonally_dominant(&a));
    }
}
