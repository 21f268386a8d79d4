//! Jacobi iteration on a diagonally dominant system.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::{enforce_diagonal_dominance, DominantSystem, LinearSystem};

/// Default iteration cap for the Jacobi solver.
pub const JACOBI_MAX_ITERATIONS: u32 = 10_000;

/// Configuration for the Jacobi solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JacobiConfig {
    /// Maximum number of sweeps before giving up.
    pub max_iterations: u32,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            max_iterations: JACOBI_MAX_ITERATIONS,
        }
    }
}

impl JacobiConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a converged Jacobi solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JacobiSolution {
    /// Solution vector, in the original unknown order.
    pub solution: Vec<f64>,
    /// Number of sweeps, counting the one that converged.
    pub iterations: u32,
    /// `|x_i - x_prev_i|` from the final sweep.
    pub errors: Vec<f64>,
    /// Infinity norm of the reordered matrix.
    pub matrix_norm: f64,
    /// Row order used: `permutation[i]` is the original row at position `i`.
    pub permutation: Vec<usize>,
}

impl JacobiSolution {
    /// Largest component of the final error vector; NaN if any component is NaN.
    pub fn max_error(&self) -> f64 {
        self.errors
            .iter()
            .copied()
            .fold(0.0, |max, e| if e > max || e.is_nan() { e } else { max })
    }
}

/// Iterative solver: dominance reordering followed by Jacobi sweeps.
///
/// Every component of a sweep is computed from the previous iterate only;
/// no freshly updated value is reused within the same sweep.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{JacobiConfig, JacobiSolver, LinearSystem};
///
/// let system = LinearSystem::from_rows(
///     &[vec![10.0, 1.0, 1.0], vec![2.0, 10.0, 1.0], vec![2.0, 2.0, 10.0]],
///     &[12.0, 13.0, 14.0],
/// ).unwrap();
///
/// let solver = JacobiSolver::new(JacobiConfig::default());
/// let result = solver.solve(&system, 1e-8).unwrap();
///
/// for x in &result.solution {
///     assert!((x - 1.0).abs() < 1e-7);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSolver {
    config: JacobiConfig,
}

impl JacobiSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: JacobiConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &JacobiConfig {
        &self.config
    }

    /// Reorders `system` into diagonal dominance and iterates to `precision`.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidInput`] if `precision` is not a finite positive
    ///   number or the iteration cap is zero
    /// - [`MathError::DominanceUnachievable`] if no dominant row order is found
    /// - [`MathError::ConvergenceFailure`] if the cap is reached first, or
    ///   an iterate overflows to a non-finite value
    pub fn solve(&self, system: &LinearSystem, precision: f64) -> MathResult<JacobiSolution> {
        self.check_parameters(precision)?;
        let dominant = enforce_diagonal_dominance(system)?;
        self.iterate(&dominant, precision)
    }

    /// Runs Jacobi sweeps on an already reordered system.
    pub fn iterate(&self, system: &DominantSystem, precision: f64) -> MathResult<JacobiSolution> {
        self.check_parameters(precision)?;

        let a = system.matrix();
        let b = system.rhs();
        let n = system.dim();

        let mut x = vec![0.0; n];
        let mut x_prev = vec![0.0; n];
        let mut errors = vec![0.0; n];
        let mut iterations = 0;

        loop {
            iterations += 1;

            for i in 0..n {
                let sum: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| a[(i, j)] * x_prev[j])
                    .sum();
                x[i] = (b[i] - sum) / a[(i, i)];
            }

            let mut max_error = 0.0_f64;
            for i in 0..n {
                errors[i] = (x[i] - x_prev[i]).abs();
                max_error = max_error.max(errors[i]);
            }

            log::trace!("jacobi sweep {iterations}: max error {max_error:.3e}");

            // an overflowed iterate never settles, and NaN would slip past `<`
            if x.iter().chain(&errors).any(|v| !v.is_finite()) {
                log::debug!("jacobi iterate left the finite range on sweep {iterations}");
                return Err(MathError::convergence_failed(iterations, f64::INFINITY));
            }

            if max_error < precision {
                log::debug!("jacobi converged after {iterations} sweeps (n = {n})");
                break;
            }

            if iterations >= self.config.max_iterations {
                log::debug!("jacobi exhausted {iterations} sweeps, max error {max_error:.3e}");
                return Err(MathError::convergence_failed(iterations, max_error));
            }

            x_prev.copy_from_slice(&x);
        }

        Ok(JacobiSolution {
            solution: x,
            iterations,
            errors,
            matrix_norm: system.norm(),
            permutation: system.permutation().to_vec(),
        })
    }

    fn check_parameters(&self, precision: f64) -> MathResult<()> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "precision must be a positive finite number, got {precision}"
            )));
        }
        if self.config.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Solves `A x = b` from row slices with the default configuration.
///
/// Dimension checks run first, then dominance reordering, then iteration.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::solve_system;
///
/// let result = solve_system(&[vec![4.0, 1.0], vec![1.0, 3.0]], &[5.0, 4.0], 1e-6).unwrap();
/// assert!((result.solution[0] - 1.0).abs() < 1e-5);
/// assert!(result.max_error() < 1e-6);
/// ```
pub fn solve_system<R: AsRef<[f64]>>(
    matrix: &[R],
    rhs: &[f64],
    precision: f64,
) -> MathResult<JacobiSolution> {
    let system = LinearSystem::from_rows(matrix, rhs)?;
    JacobiSolver::default().solve(&system, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_algebra::is_strictly_diagonally_dominant;
    use approx::assert_relative_eq;

    #[test]
    fn test_jacobi_config() {
        let config = JacobiConfig::default();
        assert_eq!(config.max_iterations, 10_000);

        let config = config.with_max_iterations(50);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_identity_order_converges() {
        let result = solve_system(&[vec![4.0, 1.0], vec![1.0, 3.0]], &[5.0, 4.0], 1e-10).unwrap();

        assert_eq!(result.permutation, vec![0, 1]);
        assert_relative_eq!(result.solution[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(result.solution[1], 1.0, epsilon = 1e-9);
        assert!(result.max_error() < 1e-10);
        assert_relative_eq!(result.matrix_norm, 5.0);
    }

    #[test]
    fn test_single_unknown() {
        // x = 2 is reached on the first sweep; the second sweep sees no change
        let result = solve_system(&[vec![5.0]], &[10.0], 1e-6).unwrap();
        assert_eq!(result.solution, vec![2.0]);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.errors, vec![0.0]);

        // a precision looser than the first step stops after one sweep
        let result = solve_system(&[vec![5.0]], &[10.0], 3.0).unwrap();
        assert_eq!(result.solution, vec![2.0]);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.errors, vec![2.0]);
    }

    #[test]
    fn test_overflowing_iterate_is_not_convergence() {
        let result = solve_system(&[vec![1e-300]], &[1e300], 1e-6);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailure { iterations: 1, residual }) if residual.is_infinite()
        ));
    }

    #[test]
    fn test_max_error_propagates_nan() {
        let solution = JacobiSolution {
            solution: vec![1.0, 2.0],
            iterations: 3,
            errors: vec![f64::NAN, 1e-9],
            matrix_norm: 1.0,
            permutation: vec![0, 1],
        };
        assert!(solution.max_error().is_nan());

        let solution = JacobiSolution {
            errors: vec![1e-9, 3e-9],
            ..solution
        };
        assert_relative_eq!(solution.max_error(), 3e-9);
    }

    #[test]
    fn test_reordered_three_by_three() {
        // Exact solution (1, -2, 3); rows given out of dominance order.
        let a = vec![
            vec![1.0, 6.0, 2.0],
            vec![2.0, 1.0, 8.0],
            vec![10.0, 1.0, 1.0],
        ];
        let b = vec![-5.0, 24.0, 11.0];

        let result = solve_system(&a, &b, 1e-12).unwrap();

        assert_eq!(result.permutation, vec![2, 0, 1]);
        assert_relative_eq!(result.solution[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.solution[1], -2.0, epsilon = 1e-10);
        assert_relative_eq!(result.solution[2], 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.matrix_norm, 12.0);
    }

    #[test]
    fn test_jacobi_uses_previous_iterate_only() {
        // After one sweep from x = 0 each component is b_i / a_ii.
        let a = vec![vec![4.0, 1.0], vec![1.0, 2.0]];
        let b = vec![8.0, 6.0];
        let system = LinearSystem::from_rows(&a, &b).unwrap();
        let solver = JacobiSolver::new(JacobiConfig::new(1));

        let err = solver.solve(&system, 1e-3).unwrap_err();
        assert_eq!(err, MathError::convergence_failed(1, 3.0));

        // Gauss-Seidel would give x1 = (6 - 2) / 2 = 2 here.
        let result = JacobiSolver::default().solve(&system, 10.0).unwrap();
        assert_eq!(result.solution, vec![2.0, 3.0]);
    }

    #[test]
    fn test_iteration_cap_is_exact() {
        let system =
            LinearSystem::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]], &[5.0, 4.0]).unwrap();
        let solver = JacobiSolver::new(JacobiConfig::new(5));

        match solver.solve(&system, 1e-12) {
            Err(MathError::ConvergenceFailure { iterations, .. }) => assert_eq!(iterations, 5),
            other => panic!("expected ConvergenceFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_slow_system_exhausts_default_cap() {
        // Iteration matrix has spectral radius 0.9999999: each step shrinks
        // by that factor, far from 1e-6 after 10000 sweeps.
        let r = 0.999_999_9;
        let a = vec![vec![1.0, -r], vec![-r, 1.0]];
        let b = vec![1.0, 1.0];

        match solve_system(&a, &b, 1e-6) {
            Err(MathError::ConvergenceFailure { iterations, residual }) => {
                assert_eq!(iterations, JACOBI_MAX_ITERATIONS);
                assert!(residual >= 1e-6);
            }
            other => panic!("expected ConvergenceFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_errors_come_first() {
        let a = vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]];

        let err = solve_system(&a, &[1.0, 2.0], 1e-3).unwrap_err();
        assert_eq!(err, MathError::invalid_dimensions(3, 3, 2));
    }

    #[test]
    fn test_zero_row_is_not_dominant() {
        let err = solve_system(&[vec![0.0, 0.0], vec![1.0, 1.0]], &[1.0, 1.0], 1e-3).unwrap_err();
        assert_eq!(err, MathError::DominanceUnachievable { position: 0 });
    }

    #[test]
    fn test_invalid_precision_rejected() {
        let a = vec![vec![4.0, 1.0], vec![1.0, 3.0]];
        let b = vec![5.0, 4.0];

        for precision in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let err = solve_system(&a, &b, precision).unwrap_err();
            assert!(matches!(err, MathError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_zero_cap_rejected() {
        let system = LinearSystem::from_rows(&[vec![2.0]], &[1.0]).unwrap();
        let solver = JacobiSolver::new(JacobiConfig::new(0));

        assert!(matches!(
            solver.solve(&system, 1e-3),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = vec![
            vec![5.0, -1.0, 2.0],
            vec![1.0, 7.0, -3.0],
            vec![2.0, -2.0, 9.0],
        ];
        let b = vec![1.0, 2.0, 3.0];

        let first = solve_system(&a, &b, 1e-9).unwrap();
        let second = solve_system(&a, &b, 1e-9).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_iterate_on_prebuilt_dominant_system() {
        let system =
            LinearSystem::from_rows(&[vec![1.0, 3.0], vec![4.0, 1.0]], &[4.0, 5.0]).unwrap();
        let dominant = enforce_diagonal_dominance(&system).unwrap();
        assert!(is_strictly_diagonally_dominant(dominant.matrix()));

        let result = JacobiSolver::default().iterate(&dominant, 1e-9).unwrap();
        assert_relative_eq!(result.solution[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(result.solution[1], 1.0, epsilon = 1e-8);
        assert_relative_eq!(result.matrix_norm, 5.0);
    }

    #[test]
    fn test_solution_serializes() {
        let result = solve_system(&[vec![5.0]], &[10.0], 3.0).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let back: JacobiSolution = serde_json::from_str(&json).unwrap();

        assert_eq!(back, result);
    }
}
