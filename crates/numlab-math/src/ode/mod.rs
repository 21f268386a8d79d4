//! Initial-value problems `y' = f(x, y)`, `y(x0) = y0`.
//!
//! # Available Methods
//!
//! | Method | Order | `f` calls per step |
//! |--------|-------|--------------------|
//! | [`OdeMethod::Euler`] | 1 | 1 |
//! | [`OdeMethod::ImprovedEuler`] | 2 | 2 |
//! | [`OdeMethod::RungeKutta4`] | 4 | 4 |
//! | [`OdeMethod::Adams`] | 4 | 2 (after an RK4 start) |
//!
//! Every method runs on the same grid: `n = floor((x_end - x0) / h + 1e-9) + 1`
//! nodes at `x0 + i h`. The `1e-9` guard keeps `x_end` on the grid when
//! `(x_end - x0) / h` lands just below an integer. Grids longer than
//! [`MAX_GRID_NODES`] are rejected.
//!
//! Accuracy can be judged without the exact solution by the Runge rule:
//! solve with `h` and `h / 2` and compare at the shared nodes, see
//! [`runge_estimate`].
//!
//! # Example
//!
//! ```rust
//! use numlab_math::ode::{InitialValueProblem, OdeMethod};
//!
//! let problem = InitialValueProblem::new(|x: f64, y: f64| x + y, 0.0, 1.0);
//! let solution = problem.integrate(OdeMethod::RungeKutta4, 1.0, 0.1).unwrap();
//!
//! let exact = 2.0 * 1.0_f64.exp() - 2.0;
//! assert!((solution.last_value() - exact).abs() < 1e-5);
//! ```

mod estimate;
mod methods;

pub use estimate::{max_error, recommended_step, runge_estimate};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Slack added to `(x_end - x0) / h` before flooring.
const GRID_GUARD: f64 = 1e-9;

/// Largest grid accepted by [`InitialValueProblem::integrate`].
pub const MAX_GRID_NODES: usize = 10_000_000;

/// Integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OdeMethod {
    /// Explicit Euler.
    Euler,
    /// Heun's method: Euler predictor, trapezoid corrector.
    ImprovedEuler,
    /// Classical fourth-order Runge–Kutta.
    RungeKutta4,
    /// Adams–Bashforth–Moulton fourth-order predictor-corrector.
    Adams,
}

impl OdeMethod {
    /// All methods, lowest order first.
    pub const ALL: [OdeMethod; 4] = [
        OdeMethod::Euler,
        OdeMethod::ImprovedEuler,
        OdeMethod::RungeKutta4,
        OdeMethod::Adams,
    ];

    /// Global order of accuracy, the `p` in the Runge rule.
    pub fn order(self) -> u32 {
        match self {
            OdeMethod::Euler => 1,
            OdeMethod::ImprovedEuler => 2,
            OdeMethod::RungeKutta4 | OdeMethod::Adams => 4,
        }
    }
}

impl std::fmt::Display for OdeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OdeMethod::Euler => "Euler",
            OdeMethod::ImprovedEuler => "Improved Euler",
            OdeMethod::RungeKutta4 => "Runge-Kutta 4",
            OdeMethod::Adams => "Adams",
        };
        write!(f, "{name}")
    }
}

/// Grid nodes and the values computed on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdeSolution {
    /// Grid nodes `x0 + i h`.
    pub xs: Vec<f64>,
    /// Values at the nodes.
    pub ys: Vec<f64>,
    /// Method that produced the values; `None` for a sampled exact solution.
    pub method: Option<OdeMethod>,
}

impl OdeSolution {
    /// Samples a known solution on the grid used by [`InitialValueProblem::integrate`].
    pub fn exact<E>(exact: E, x0: f64, x_end: f64, h: f64) -> MathResult<Self>
    where
        E: Fn(f64) -> f64,
    {
        let xs = grid(x0, x_end, h)?;
        let ys = xs.iter().map(|&x| exact(x)).collect();
        Ok(Self {
            xs,
            ys,
            method: None,
        })
    }

    /// Number of grid nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a solution holds at least the initial node.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Value at the last node.
    pub fn last_value(&self) -> f64 {
        self.ys.last().copied().unwrap_or(f64::NAN)
    }
}

/// `y' = f(x, y)` with `y(x0) = y0`.
#[derive(Debug, Clone, Copy)]
pub struct InitialValueProblem<F> {
    f: F,
    x0: f64,
    y0: f64,
}

impl<F> InitialValueProblem<F>
where
    F: Fn(f64, f64) -> f64,
{
    /// Creates the problem.
    pub fn new(f: F, x0: f64, y0: f64) -> Self {
        Self { f, x0, y0 }
    }

    /// Start of the interval.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Initial value.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Right-hand side at `(x, y)`.
    pub fn slope(&self, x: f64, y: f64) -> f64 {
        (self.f)(x, y)
    }

    /// Integrates from `x0` to `x_end` with step `h`.
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidInput`] unless `h > 0`, `x_end > x0`, all three
    /// are finite and the grid has at most [`MAX_GRID_NODES`] nodes.
    pub fn integrate(&self, method: OdeMethod, x_end: f64, h: f64) -> MathResult<OdeSolution> {
        if !self.y0.is_finite() {
            return Err(MathError::invalid_input("initial value must be finite"));
        }
        let xs = grid(self.x0, x_end, h)?;
        log::debug!("{method}: {} nodes on [{}, {x_end}] with h = {h}", xs.len(), self.x0);

        let ys = match method {
            OdeMethod::Euler => methods::euler(&self.f, &xs, self.y0, h),
            OdeMethod::ImprovedEuler => methods::improved_euler(&self.f, &xs, self.y0, h),
            OdeMethod::RungeKutta4 => methods::runge_kutta4(&self.f, &xs, self.y0, h),
            OdeMethod::Adams => methods::adams(&self.f, &xs, self.y0, h),
        };

        Ok(OdeSolution {
            xs,
            ys,
            method: Some(method),
        })
    }
}

/// Nodes `x0 + i h` for `i = 0..n`, `n = floor((x_end - x0) / h + 1e-9) + 1`.
pub(crate) fn grid(x0: f64, x_end: f64, h: f64) -> MathResult<Vec<f64>> {
    if !(x0.is_finite() && x_end.is_finite() && h.is_finite()) {
        return Err(MathError::invalid_input("interval and step must be finite"));
    }
    if h <= 0.0 {
        return Err(MathError::invalid_input(format!("step must be positive, got {h}")));
    }
    if x_end <= x0 {
        return Err(MathError::invalid_input(format!(
            "interval end {x_end} must exceed start {x0}"
        )));
    }

    // NaN or inf when the span overflows
    let steps = ((x_end - x0) / h + GRID_GUARD).floor();
    if !(steps.is_finite() && steps < MAX_GRID_NODES as f64) {
        return Err(MathError::invalid_input(format!(
            "step {h} on [{x0}, {x_end}] needs more than {MAX_GRID_NODES} nodes"
        )));
    }

    let n = steps as usize + 1;
    Ok((0..n).map(|i| x0 + i as f64 * h).collect())
}
