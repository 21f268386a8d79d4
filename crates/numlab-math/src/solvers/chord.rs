//! Chord (regula falsi) root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{is_sign_change, SolverConfig, SolverResult};

/// Chord method, also known as regula falsi.
///
/// Like bisection it keeps a bracket `[a, b]` with a sign change, but the
/// bracket is split where the chord through `(a, f(a))` and `(b, f(b))`
/// crosses zero:
///
/// `x = a - f(a) * (b - a) / (f(b) - f(a))`
///
/// Converges when two successive chord points differ by less than
/// `config.tolerance`. The first comparison is against `a`.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{chord, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = chord(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn chord<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (a.min(b), a.max(b));
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 || fb == 0.0 {
        let (root, residual) = if fa == 0.0 { (a, fa) } else { (b, fb) };
        return Ok(SolverResult {
            root,
            iterations: 0,
            residual,
        });
    }

    if !is_sign_change(fa, fb) {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut x = a;
    for iteration in 1..=config.max_iterations {
        let x_prev = x;
        x = a - fa * (b - a) / (fb - fa);
        let fx = f(x);

        if fx == 0.0 || (x - x_prev).abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if is_sign_change(fa, fx) {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }
    }

    log::debug!("chord exhausted {} iterations at x = {x}", config.max_iterations);
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
