//! Root-finding algorithms for a single equation `f(x) = 0`.
//!
//! - [`bisection`]: halves a sign-change bracket until it is narrower than the tolerance
//! - [`chord`]: regula falsi, keeps a bracket but cuts it along the chord
//! - [`newton`]: tangent steps, needs the derivative
//! - [`secant`]: tangent replaced by the line through the last two iterates
//! - [`simple_iteration`]: relaxed fixed point `x = x - alpha * f(x)`
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton | Fastest (quadratic) | May diverge | Derivative |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Chord | Linear | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Simple iteration | Linear | If `|1 - alpha f'| < 1` | Relaxation parameter |
//!
//! # Example
//!
//! ```rust
//! use numlab_math::solvers::{bisection, newton, SolverConfig};
//!
//! let f = |x: f64| x.powi(3) - 1.89 * x * x - 2.0 * x + 1.76;
//! let df = |x: f64| 3.0 * x * x - 3.78 * x - 2.0;
//! let config = SolverConfig::default().with_tolerance(1e-9);
//!
//! let coarse = bisection(f, 0.0, 1.0, &config).unwrap();
//! let fine = newton(f, df, coarse.root, &config).unwrap();
//! assert!((coarse.root - fine.root).abs() < 1e-8);
//! ```

mod bisection;
mod chord;
mod newton;
mod secant;
mod simple_iteration;

pub use bisection::bisection;
pub use chord::chord;
pub use newton::{newton, newton_numerical};
pub use secant::secant;
pub use simple_iteration::{relaxation_parameter, simple_iteration, FixedPointResult};
pub(crate) use simple_iteration::DIVERGENCE_BOUND;

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivative or function values below this are treated as zero.
pub(crate) const ZERO_THRESHOLD: f64 = 1e-10;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for root-finding solvers with optional derivative and bracket.
///
/// Gives callers one entry point regardless of which method they picked.
///
/// # Example
///
/// ```rust
/// use numlab_math::solvers::{ChordSolver, Solver, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let no_deriv: Option<fn(f64) -> f64> = None;
///
/// let result = ChordSolver
///     .solve(f, no_deriv, 1.5, Some((1.0, 2.0)), &SolverConfig::default())
///     .unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of the given function.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `derivative` - Optional derivative function (used if available)
    /// * `initial_guess` - Starting point for the search
    /// * `bounds` - Optional bracketing interval (a, b)
    /// * `config` - Solver configuration
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton solver; falls back to a numerical derivative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => newton(f, df, initial_guess, config),
            None => newton_numerical(f, initial_guess, config),
        }
    }

    fn name(&self) -> &'static str {
        "Newton"
    }
}

/// Bisection solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl Solver for BisectionSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Chord (regula falsi) solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordSolver;

impl Solver for ChordSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        chord(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Chord"
    }
}

/// Secant solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecantSolver;

impl Solver for SecantSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (x0, x1) = bounds.unwrap_or((initial_guess - 0.1, initial_guess + 0.1));
        secant(f, x0, x1, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}

/// Whether the signs of two values differ, robust to underflow of `a * b`.
pub(crate) fn is_sign_change(a: f64, b: f64) -> bool {
    a.signum() != b.signum()
}

/// Returns true if `f` has a root or a sign change on `[a, b]`.
///
/// A zero at either endpoint counts.
pub fn has_sign_change<F>(f: F, a: f64, b: f64) -> bool
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    fa == 0.0 || fb == 0.0 || is_sign_change(fa, fb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) - 1.89 * x * x - 2.0 * x + 1.76
    }

    fn d_cubic(x: f64) -> f64 {
        3.0 * x * x - 3.78 * x - 2.0
    }

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_is_sign_change_underflow() {
        // a * b underflows to -0.0 here
        assert!(is_sign_change(1e-200, -1e-200));
        assert!(!is_sign_change(-1.0, -2.0));
    }

    #[test]
    fn test_has_sign_change() {
        assert!(has_sign_change(cubic, 0.0, 1.0));
        assert!(has_sign_change(|x: f64| x - 1.0, 0.0, 1.0));
        assert!(!has_sign_change(|x: f64| x * x + 1.0, -1.0, 1.0));
    }

    #[test]
    fn test_solver_trait_newton() {
        let solver = NewtonSolver;
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = solver
            .solve(f, Some(df), 1.5, None, &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.name(), "Newton");
    }

    #[test]
    fn test_solver_trait_bisection() {
        let solver = BisectionSolver;
        let no_deriv: Option<fn(f64) -> f64> = None;

        let result = solver
            .solve(|x: f64| x * x - 2.0, no_deriv, 1.5, Some((1.0, 2.0)), &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert_eq!(solver.name(), "Bisection");
    }

    #[test]
    fn test_all_solvers_agree_on_cubic() {
        // roots near -1.156, 0.630 and 2.416
        let config = SolverConfig::default().with_tolerance(1e-12);

        let b = bisection(cubic, 0.0, 1.0, &config).unwrap();
        let c = chord(cubic, 0.0, 1.0, &config).unwrap();
        let n = newton(cubic, d_cubic, 0.5, &config).unwrap();
        let s = secant(cubic, 0.5, 0.8, &config).unwrap();

        assert_relative_eq!(b.root, n.root, epsilon = 1e-9);
        assert_relative_eq!(c.root, n.root, epsilon = 1e-9);
        assert_relative_eq!(s.root, n.root, epsilon = 1e-9);
        assert!(cubic(n.root).abs() < 1e-9);
    }

    #[test]
    fn test_newton_faster_than_bisection() {
        let config = SolverConfig::default().with_tolerance(1e-10);

        let b = bisection(cubic, 2.0, 3.0, &config).unwrap();
        let n = newton(cubic, d_cubic, 3.0, &config).unwrap();

        assert!(n.iterations < b.iterations);
    }
}
