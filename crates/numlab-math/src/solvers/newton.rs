//! Newton's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, ZERO_THRESHOLD};

/// Newton's method (tangent method).
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Converges when `|x_{n+1} - x_n| < config.tolerance`. This method has
/// quadratic convergence near a simple root but requires the derivative.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::DivisionByZero`] when `|f'(x)|` drops below `1e-10`.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{newton, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx.abs() < ZERO_THRESHOLD {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let x_next = x - fx / dfx;
        log::trace!("newton step {iteration}: x = {x_next}");

        if (x_next - x).abs() < config.tolerance {
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration,
                residual: f(x_next),
            });
        }

        x = x_next;
    }

    log::debug!("newton exhausted {} iterations at x = {x}", config.max_iterations);
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton's method with numerical derivative estimation.
///
/// Uses central finite differences to estimate the derivative when
/// an analytical derivative is not available.
pub fn newton_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-7; // Step size for numerical differentiation

    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    newton(&f, df, initial_guess, config)
}
