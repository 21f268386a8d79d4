//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, ZERO_THRESHOLD};

/// Secant method.
///
/// Replaces the derivative in Newton's step with the slope of the line
/// through the last two iterates:
/// `x_{k+1} = x_k - f(x_k) (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
///
/// Converges when `|x_{k+1} - x_k| < config.tolerance`. A small residual
/// alone never stops the iteration, so a flat function is not mistaken for
/// a root. Convergence is superlinear (order ~1.618) near a simple root.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::DivisionByZero`] when `|f(x_k) - f(x_{k-1})|` drops below
/// `1e-10`.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x = x1;
    let mut f_prev = f(x_prev);
    let mut fx = f(x);

    for iteration in 1..=config.max_iterations {
        let slope_run = fx - f_prev;
        if slope_run.abs() < ZERO_THRESHOLD {
            log::debug!("secant line flat at x = {x} (df = {slope_run:e})");
            return Err(MathError::DivisionByZero { value: slope_run });
        }

        let x_next = x - fx * (x - x_prev) / slope_run;
        log::trace!("secant step {iteration}: x = {x_next}");

        if (x_next - x).abs() < config.tolerance {
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration,
                residual: f(x_next),
            });
        }

        x_prev = x;
        f_prev = fx;
        x = x_next;
        fx = f(x);
    }

    log::debug!("secant exhausted {} iterations at x = {x}", config.max_iterations);
    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}
