//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{is_sign_change, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half whose endpoints still differ
/// in sign. Stops once the bracket is no wider than `config.tolerance` and
/// returns its midpoint.
///
/// Requires: `f(a)` and `f(b)` of opposite signs, or a zero at an endpoint.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Handle case where endpoint is the root
    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    if !is_sign_change(f_lo, f_hi) {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut iterations = 0;
    while hi - lo > config.tolerance {
        if iterations == config.max_iterations {
            log::debug!(
                "bisection exhausted {iterations} iterations, bracket width {:.3e}",
                hi - lo
            );
            return Err(MathError::convergence_failed(iterations, hi - lo));
        }
        iterations += 1;

        let mid = lo + (hi - lo) / 2.0;
        let f_mid = f(mid);

        if f_mid == 0.0 {
            return Ok(SolverResult {
                root: mid,
                iterations,
                residual: f_mid,
            });
        }

        // Keep the half that still brackets the root
        if is_sign_change(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let root = lo + (hi - lo) / 2.0;
    Ok(SolverResult {
        root,
        iterations,
        residual: f(root),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| x * x - 2.0;

        // Reversed bracket should still work
        let result = bisection(f, 2.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        // Both endpoints have same sign
        let result = bisection(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 1.0;

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_exact_midpoint_root() {
        let f = |x: f64| x + 1.0;

        let result = bisection(f, -2.0, 0.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -1.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_iteration_count_matches_halving() {
        // width 1 halved until <= 1e-3 takes ceil(log2(1000)) = 10 steps
        let f = |x: f64| x.sin() - 0.5 * x;
        let config = SolverConfig::new(1e-3, 100);

        let result = bisection(f, 1.0, 2.0, &config).unwrap();

        assert_eq!(result.iterations, 10);
        assert!(f(result.root).abs() < 1e-3);
    }

    #[test]
    fn test_iteration_limit() {
        let f = |x: f64| x * x - 2.0;
        let config = SolverConfig::new(1e-12, 5);

        let result = bisection(f, 1.0, 2.0, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailure { iterations: 5, .. })
        ));
    }
}
