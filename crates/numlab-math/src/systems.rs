//! Solvers for 2×2 nonlinear systems.
//!
//! Systems are written as `F(x, y) = [f1(x, y), f2(x, y)] = 0`:
//!
//! - [`newton_system`]: Newton's method with an analytic Jacobian
//! - [`newton_system_numerical`]: the same with a finite-difference Jacobian
//! - [`simple_iteration_system`]: fixed-point iteration `(x, y) = phi(x, y)`
//!
//! All three stop when the Euclidean length of the step drops below
//! `config.tolerance`.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, DIVERGENCE_BOUND, ZERO_THRESHOLD};

/// Result of a 2×2 system solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemResult {
    /// First unknown.
    pub x: f64,
    /// Second unknown.
    pub y: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Length of the final step.
    pub step_norm: f64,
}

/// Newton's method for a 2×2 nonlinear system.
///
/// Each step solves `J(x, y) [dx, dy]^T = -F(x, y)` by Cramer's rule.
///
/// # Arguments
///
/// * `f` - The residual `[f1, f2]`
/// * `jacobian` - `[[df1/dx, df1/dy], [df2/dx, df2/dy]]`
/// * `initial` - Starting point `[x0, y0]`
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::SingularMatrix`] when `|det J| < 1e-10`.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::SolverConfig;
/// use numlab_math::systems::newton_system;
///
/// // circle x^2 + y^2 = 4 meets the line y = x at (sqrt 2, sqrt 2)
/// let f = |x: f64, y: f64| [x * x + y * y - 4.0, y - x];
/// let jacobian = |x: f64, y: f64| [[2.0 * x, 2.0 * y], [-1.0, 1.0]];
///
/// let result = newton_system(f, jacobian, [1.0, 1.0], &SolverConfig::default()).unwrap();
/// assert!((result.x - std::f64::consts::SQRT_2).abs() < 1e-10);
/// assert!((result.y - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_system<F, J>(
    f: F,
    jacobian: J,
    initial: [f64; 2],
    config: &SolverConfig,
) -> MathResult<SystemResult>
where
    F: Fn(f64, f64) -> [f64; 2],
    J: Fn(f64, f64) -> [[f64; 2]; 2],
{
    let [mut x, mut y] = initial;

    for iteration in 1..=config.max_iterations {
        let [f1, f2] = f(x, y);
        let [[j11, j12], [j21, j22]] = jacobian(x, y);

        let det = j11 * j22 - j12 * j21;
        if det.abs() < ZERO_THRESHOLD {
            return Err(MathError::SingularMatrix { determinant: det });
        }

        let dx = (-j22 * f1 + j12 * f2) / det;
        let dy = (j21 * f1 - j11 * f2) / det;
        x += dx;
        y += dy;

        let step_norm = dx.hypot(dy);
        log::trace!("newton system step {iteration}: ({x}, {y}), |step| = {step_norm:.3e}");

        if step_norm < config.tolerance {
            return Ok(SystemResult {
                x,
                y,
                iterations: iteration,
                step_norm,
            });
        }
    }

    log::debug!("newton system exhausted {} iterations at ({x}, {y})", config.max_iterations);
    let [f1, f2] = f(x, y);
    Err(MathError::convergence_failed(
        config.max_iterations,
        f1.hypot(f2),
    ))
}

/// Newton's method for a 2×2 system with a central-difference Jacobian.
pub fn newton_system_numerical<F>(
    f: F,
    initial: [f64; 2],
    config: &SolverConfig,
) -> MathResult<SystemResult>
where
    F: Fn(f64, f64) -> [f64; 2],
{
    let h = 1e-7;

    let jacobian = |x: f64, y: f64| {
        let [fx_plus_1, fx_plus_2] = f(x + h, y);
        let [fx_minus_1, fx_minus_2] = f(x - h, y);
        let [fy_plus_1, fy_plus_2] = f(x, y + h);
        let [fy_minus_1, fy_minus_2] = f(x, y - h);
        [
            [
                (fx_plus_1 - fx_minus_1) / (2.0 * h),
                (fy_plus_1 - fy_minus_1) / (2.0 * h),
            ],
            [
                (fx_plus_2 - fx_minus_2) / (2.0 * h),
                (fy_plus_2 - fy_minus_2) / (2.0 * h),
            ],
        ]
    };

    newton_system(&f, jacobian, initial, config)
}

/// Fixed-point iteration `(x, y) <- phi(x, y)` for a 2×2 system.
///
/// The caller supplies `phi` already rearranged from the system so that
/// its fixed point is the solution.
///
/// # Errors
///
/// - [`MathError::Diverged`] when a component is NaN or exceeds `1e10`
/// - [`MathError::ConvergenceFailure`] carrying the last step length when
///   the iteration cap is reached
pub fn simple_iteration_system<P>(
    phi: P,
    initial: [f64; 2],
    config: &SolverConfig,
) -> MathResult<SystemResult>
where
    P: Fn(f64, f64) -> [f64; 2],
{
    let [mut x, mut y] = initial;
    let mut step_norm = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let [x_next, y_next] = phi(x, y);

        for value in [x_next, y_next] {
            if value.is_nan() || value.abs() > DIVERGENCE_BOUND {
                return Err(MathError::Diverged {
                    iterations: iteration,
                    value,
                });
            }
        }

        step_norm = (x_next - x).hypot(y_next - y);
        x = x_next;
        y = y_next;

        if step_norm < config.tolerance {
            return Ok(SystemResult {
                x,
                y,
                iterations: iteration,
                step_norm,
            });
        }
    }

    log::debug!(
        "simple iteration system exhausted {} iterations at ({x}, {y})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, step_norm))
}
