//! Polynomial interpolation from tabulated data.
//!
//! # Available Methods
//!
//! **Arbitrary nodes:**
//! - [`Lagrange`]: Lagrange form, O(n^2) per evaluation
//! - [`NewtonDivided`]: Newton form with divided differences computed once
//!
//! **Uniform grid (finite differences):**
//! - [`NewtonForward`]: Newton's first formula, best near the first node
//! - [`NewtonBackward`]: Newton's second formula, best near the last node
//! - [`GaussForward`]: Gauss's first central formula (at least 5 nodes)
//! - [`Stirling`]: mean of the Gauss formulas (odd count, at least 5 nodes)
//! - [`Bessel`]: centred between the two middle nodes (at least 4 nodes)
//!
//! # Choosing a Method
//!
//! | Method | Grid | Best near |
//! |--------|------|-----------|
//! | Lagrange | any | anywhere |
//! | Newton divided | any | anywhere, cheap repeated evaluation |
//! | Newton forward | uniform | start of table |
//! | Newton backward | uniform | end of table |
//! | Gauss / Stirling | uniform | middle node |
//! | Bessel | uniform | midpoint of the middle pair |
//!
//! The finite-difference methods share one [`DifferenceTable`]; building
//! one on a non-uniform grid succeeds, but asking a finite-difference
//! method to use it fails with
//! [`MathError::NonUniformGrid`](crate::MathError::NonUniformGrid).
//!
//! # Example
//!
//! ```rust
//! use numlab_math::interpolation::{DifferenceTable, Interpolator, NewtonForward, Stirling};
//!
//! let xs: Vec<f64> = (0..7).map(|i| 1.05 + 0.1 * f64::from(i)).collect();
//! let ys = vec![0.1213, 1.1316, 2.1459, 3.1565, 4.1571, 5.1819, 6.1969];
//! let table = DifferenceTable::new(xs, ys).unwrap();
//!
//! let forward = NewtonForward::new(table.clone()).unwrap();
//! let stirling = Stirling::new(table).unwrap();
//!
//! let a = forward.interpolate(1.37).unwrap();
//! let b = stirling.interpolate(1.37).unwrap();
//! assert!((a - b).abs() < 1e-9);
//! ```

mod central;
mod difference_table;
mod lagrange;
mod newton_divided;
mod newton_finite;

pub use central::{Bessel, GaussForward, Stirling};
pub use difference_table::{DifferenceTable, UNIFORM_GRID_TOLERANCE};
pub use lagrange::Lagrange;
pub use newton_divided::NewtonDivided;
pub use newton_finite::{NewtonBackward, NewtonForward};

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolators are polynomials, so `interpolate` also evaluates
/// outside `[min_x, max_x]`; use [`in_range`](Interpolator::in_range) to
/// tell interpolation from extrapolation.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
