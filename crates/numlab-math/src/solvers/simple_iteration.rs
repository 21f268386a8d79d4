//! Simple (relaxed fixed-point) iteration.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Magnitude beyond which iterates are treated as divergent.
pub(crate) const DIVERGENCE_BOUND: f64 = 1e10;

/// Number of subintervals sampled when estimating `max |phi'|`.
const CONTRACTION_SAMPLES: usize = 100;

/// Result of a simple iteration, with the sampled contraction factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPointResult {
    /// Root, iteration count and residual.
    pub solution: SolverResult,
    /// `max |1 - alpha f'(x)|` sampled on `[x0 - 1, x0 + 1]`.
    pub contraction_factor: f64,
}

impl FixedPointResult {
    /// True when the sampled factor guarantees convergence near `x0`.
    pub fn is_contraction(&self) -> bool {
        self.contraction_factor < 1.0
    }
}

/// Simple iteration on `phi(x) = x - alpha * f(x)`.
///
/// Iterates `x_{n+1} = phi(x_n)` until `|x_{n+1} - x_n| < config.tolerance`.
/// Before iterating, the derivative `phi'(x) = 1 - alpha f'(x)` is sampled
/// on `[x0 - 1, x0 + 1]`; a maximum below 1 means `phi` is a contraction
/// there. The factor is reported, not enforced.
///
/// # Errors
///
/// - [`MathError::Diverged`] if an iterate is NaN or exceeds `1e10` in magnitude
/// - [`MathError::ConvergenceFailure`] if the iteration cap is reached
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{relaxation_parameter, simple_iteration, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let alpha = relaxation_parameter(df, 1.0, 2.0).unwrap();
/// let result = simple_iteration(f, df, 1.5, alpha, &SolverConfig::default()).unwrap();
///
/// assert!((result.solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn simple_iteration<F, DF>(
    f: F,
    df: DF,
    x0: f64,
    alpha: f64,
    config: &SolverConfig,
) -> MathResult<FixedPointResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let contraction_factor = max_abs_on(|x| 1.0 - alpha * df(x), x0 - 1.0, x0 + 1.0);
    if contraction_factor >= 1.0 {
        log::debug!(
            "simple iteration: phi is not a contraction near {x0} (q = {contraction_factor:.3})"
        );
    }

    let mut x = x0;
    for iteration in 1..=config.max_iterations {
        let x_next = x - alpha * f(x);

        if x_next.is_nan() || x_next.abs() > DIVERGENCE_BOUND {
            return Err(MathError::Diverged {
                iterations: iteration,
                value: x_next,
            });
        }

        if (x_next - x).abs() < config.tolerance {
            return Ok(FixedPointResult {
                solution: SolverResult {
                    root: x_next,
                    iterations: iteration,
                    residual: f(x_next),
                },
                contraction_factor,
            });
        }

        x = x_next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Relaxation parameter `alpha = 1 / max |f'|` on `[a, b]`, signed like `f'`.
///
/// With this choice `phi(x) = x - alpha f(x)` has `phi'` in `[0, 1)` when
/// `f'` keeps one sign on the interval.
///
/// # Errors
///
/// [`MathError::DivisionByZero`] if `f'` vanishes on every sample.
pub fn relaxation_parameter<DF>(df: DF, a: f64, b: f64) -> MathResult<f64>
where
    DF: Fn(f64) -> f64,
{
    let (lo, hi) = (a.min(b), a.max(b));
    let step = (hi - lo) / CONTRACTION_SAMPLES as f64;

    let steepest = (0..=CONTRACTION_SAMPLES)
        .map(|i| df(lo + i as f64 * step))
        .fold(0.0_f64, |best, d| if d.abs() > best.abs() { d } else { best });

    if steepest == 0.0 {
        return Err(MathError::DivisionByZero { value: steepest });
    }

    Ok(1.0 / steepest)
}

/// Largest `|g(x)|` over evenly spaced samples of `[a, b]`.
fn max_abs_on<G>(g: G, a: f64, b: f64) -> f64
where
    G: Fn(f64) -> f64,
{
    let step = (b - a) / CONTRACTION_SAMPLES as f64;
    (0..=CONTRACTION_SAMPLES)
        .map(|i| g(a + i as f64 * step).abs())
        .fold(0.0, f64::max)
}
