//! Numerical quadrature on a finite interval.
//!
//! # Available Rules
//!
//! | Rule | Nodes | Degree of exactness | Error order |
//! |------|-------|---------------------|-------------|
//! | [`newton_cotes`] | 7 (closed) | 7 | h^9 |
//! | [`midpoint`] | n | 1 | h^2 |
//! | [`trapezoidal`] | n + 1 | 1 | h^2 |
//! | [`simpson`] | n + 1, n even | 3 | h^4 |
//!
//! [`QuadratureRule`] dispatches over the four rules so callers can pick one
//! at runtime.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::integration::{relative_error, QuadratureRule};
//!
//! let f = |x: f64| -2.0 * x.powi(3) - 4.0 * x * x + 8.0 * x - 4.0;
//! let exact = -104.0 / 3.0;
//!
//! let simpson = QuadratureRule::Simpson.integrate(f, -3.0, -1.0, 10).unwrap();
//! assert!(relative_error(simpson, exact) < 1e-12);
//! ```

mod composite;
mod newton_cotes;

pub use composite::{midpoint, simpson, trapezoidal};
pub use newton_cotes::{newton_cotes, NEWTON_COTES_WEIGHTS};

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// Quadrature rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuadratureRule {
    /// Closed Newton–Cotes rule on 7 equally spaced nodes.
    NewtonCotes,
    /// Composite midpoint rectangles.
    Midpoint,
    /// Composite trapezoids.
    Trapezoidal,
    /// Composite Simpson parabolas.
    Simpson,
}

impl QuadratureRule {
    /// All rules, in table order.
    pub const ALL: [QuadratureRule; 4] = [
        QuadratureRule::NewtonCotes,
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoidal,
        QuadratureRule::Simpson,
    ];

    /// Highest polynomial degree the rule integrates exactly.
    pub fn degree_of_exactness(self) -> u32 {
        match self {
            QuadratureRule::NewtonCotes => 7,
            QuadratureRule::Midpoint | QuadratureRule::Trapezoidal => 1,
            QuadratureRule::Simpson => 3,
        }
    }

    /// Integrates `f` over `[a, b]` using `n` subintervals.
    ///
    /// `n` is ignored by [`QuadratureRule::NewtonCotes`], which always uses
    /// six subintervals.
    pub fn integrate<F>(self, f: F, a: f64, b: f64, n: usize) -> MathResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            QuadratureRule::NewtonCotes => Ok(newton_cotes(f, a, b)),
            QuadratureRule::Midpoint => midpoint(f, a, b, n),
            QuadratureRule::Trapezoidal => trapezoidal(f, a, b, n),
            QuadratureRule::Simpson => simpson(f, a, b, n),
        }
    }
}

impl std::fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuadratureRule::NewtonCotes => "Newton-Cotes",
            QuadratureRule::Midpoint => "Midpoint",
            QuadratureRule::Trapezoidal => "Trapezoidal",
            QuadratureRule::Simpson => "Simpson",
        };
        write!(f, "{name}")
    }
}

/// Relative error `|approx - exact| / |exact|`.
///
/// Falls back to the absolute error when `exact` is zero.
pub fn relative_error(approx: f64, exact: f64) -> f64 {
    let diff = (approx - exact).abs();
    if exact == 0.0 {
        diff
    } else {
        diff / exact.abs()
    }
}
