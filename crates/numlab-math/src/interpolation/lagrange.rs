//! Lagrange interpolating polynomial.

use crate::error::MathResult;
use crate::interpolation::{DifferenceTable, Interpolator};

/// Lagrange form of the interpolating polynomial.
///
/// `L(x) = sum_i y_i prod_{j != i} (x - x_j) / (x_i - x_j)`
///
/// Works on any set of distinct nodes. Each evaluation costs O(n^2).
///
/// # Example
///
/// ```rust
/// use numlab_math::interpolation::{Interpolator, Lagrange};
///
/// let interp = Lagrange::new(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 10.0]).unwrap();
///
/// // x^2 + 1 through the three points
/// assert!((interp.interpolate(2.0).unwrap() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lagrange {
    table: DifferenceTable,
}

impl Lagrange {
    /// Creates a Lagrange interpolator through `(xs[i], ys[i])`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        DifferenceTable::new(xs, ys).map(Self::from_table)
    }

    /// Creates a Lagrange interpolator over an existing table.
    pub fn from_table(table: DifferenceTable) -> Self {
        Self { table }
    }
}

impl Interpolator for Lagrange {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let xs = self.table.xs();

        let value = xs
            .iter()
            .zip(self.table.ys())
            .enumerate()
            .map(|(i, (&xi, &yi))| {
                xs.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(yi, |term, (_, &xj)| term * (x - xj) / (xi - xj))
            })
            .sum();

        Ok(value)
    }

    fn min_x(&self) -> f64 {
        self.table.min_x()
    }

    fn max_x(&self) -> f64 {
        self.table.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_through_nodes() {
        let xs = vec![0.5, 1.7, 2.2, 4.0];
        let ys = vec![3.0, -1.0, 0.25, 8.0];
        let interp = Lagrange::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(&ys) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unsorted_nodes() {
        let f = |x: f64| 2.0 * x * x - x + 3.0;
        let xs = vec![3.0, -1.0, 0.5];
        let ys = xs.iter().map(|&x| f(x)).collect();

        let interp = Lagrange::new(xs, ys).unwrap();

        assert_relative_eq!(interp.interpolate(1.25).unwrap(), f(1.25), epsilon = 1e-12);
        assert_relative_eq!(interp.min_x(), -1.0);
        assert_relative_eq!(interp.max_x(), 3.0);
        assert!(interp.in_range(0.0));
        assert!(!interp.in_range(3.5));
    }

    #[test]
    fn test_extrapolates() {
        let interp = Lagrange::new(vec![0.0, 1.0], vec![1.0, 3.0]).unwrap();

        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 5.0, epsilon = 1e-12);
    }
}
