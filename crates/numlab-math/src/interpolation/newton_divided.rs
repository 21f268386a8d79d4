//! Newton interpolating polynomial with divided differences.

use crate::error::MathResult;
use crate::interpolation::{DifferenceTable, Interpolator};

/// Newton form of the interpolating polynomial on arbitrary nodes.
///
/// The divided differences `f[x_0], f[x_0, x_1], ..., f[x_0, ..., x_{n-1}]`
/// are computed once at construction; each evaluation is a Horner pass.
///
/// # Example
///
/// ```rust
/// use numlab_math::interpolation::{Interpolator, NewtonDivided};
///
/// let interp = NewtonDivided::new(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 10.0]).unwrap();
///
/// assert_eq!(interp.coefficients(), &[1.0, 1.0, 1.0]);
/// assert!((interp.interpolate(2.0).unwrap() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonDivided {
    table: DifferenceTable,
    coefficients: Vec<f64>,
}

impl NewtonDivided {
    /// Creates a Newton interpolator through `(xs[i], ys[i])`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        DifferenceTable::new(xs, ys).map(Self::from_table)
    }

    /// Creates a Newton interpolator over an existing table.
    pub fn from_table(table: DifferenceTable) -> Self {
        let xs = table.xs();
        let mut coefficients = table.ys().to_vec();
        let n = coefficients.len();

        for order in 1..n {
            for i in (order..n).rev() {
                coefficients[i] = (coefficients[i] - coefficients[i - 1]) / (xs[i] - xs[i - order]);
            }
        }

        Self {
            table,
            coefficients,
        }
    }

    /// Divided differences `f[x_0, ..., x_k]` for `k = 0..n`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Interpolator for NewtonDivided {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let xs = self.table.xs();
        let n = self.coefficients.len();

        let value = (0..n - 1)
            .rev()
            .fold(self.coefficients[n - 1], |acc, i| acc * (x - xs[i]) + self.coefficients[i]);

        Ok(value)
    }

    fn min_x(&self) -> f64 {
        self.table.min_x()
    }

    fn max_x(&self) -> f64 {
        self.table.max_x()
    }
}
