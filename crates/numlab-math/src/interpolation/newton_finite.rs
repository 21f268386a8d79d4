//! Newton's forward and backward difference formulas on a uniform grid.

use crate::error::MathResult;
use crate::interpolation::{DifferenceTable, Interpolator};

/// Newton's first (forward) interpolation formula.
///
/// With `t = (x - x_0) / h`:
///
/// `P(x) = y_0 + t Δy_0 + t(t-1)/2! Δ²y_0 + ... + t(t-1)...(t-n+2)/(n-1)! Δⁿ⁻¹y_0`
///
/// Most accurate near the start of the table.
#[derive(Debug, Clone)]
pub struct NewtonForward {
    table: DifferenceTable,
    step: f64,
}

impl NewtonForward {
    /// Creates the interpolator.
    ///
    /// # Errors
    ///
    /// [`MathError::NonUniformGrid`](crate::MathError::NonUniformGrid) unless
    /// the nodes ascend with constant spacing.
    pub fn new(table: DifferenceTable) -> MathResult<Self> {
        let step = table.uniform_step()?;
        Ok(Self { table, step })
    }
}

impl Interpolator for NewtonForward {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let t = (x - self.table.xs()[0]) / self.step;

        let mut value = self.table.ys()[0];
        let mut term = 1.0;
        for k in 1..self.table.len() {
            term *= (t - (k - 1) as f64) / k as f64;
            value += term * self.table.differences(k)[0];
        }

        Ok(value)
    }

    fn min_x(&self) -> f64 {
        self.table.min_x()
    }

    fn max_x(&self) -> f64 {
        self.table.max_x()
    }
}

/// Newton's second (backward) interpolation formula.
///
/// With `t = (x - x_n) / h`, using the differences ending at the last node:
///
/// `P(x) = y_n + t ∇y_n + t(t+1)/2! ∇²y_n + ...`
///
/// Most accurate near the end of the table.
#[derive(Debug, Clone)]
pub struct NewtonBackward {
    table: DifferenceTable,
    step: f64,
}

impl NewtonBackward {
    /// Creates the interpolator.
    ///
    /// # Errors
    ///
    /// [`MathError::NonUniformGrid`](crate::MathError::NonUniformGrid) unless
    /// the nodes ascend with constant spacing.
    pub fn new(table: DifferenceTable) -> MathResult<Self> {
        let step = table.uniform_step()?;
        Ok(Self { table, step })
    }
}

impl Interpolator for NewtonBackward {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let last = self.table.len() - 1;
        let t = (x - self.table.xs()[last]) / self.step;

        let mut value = self.table.ys()[last];
        let mut term = 1.0;
        for k in 1..=last {
            term *= (t + (k - 1) as f64) / k as f64;
            value += term * self.table.differences(k)[last - k];
        }

        Ok(value)
    }

    fn min_x(&self) -> f64 {
        self.table.min_x()
    }

    fn max_x(&self) -> f64 {
        self.table.max_x()
    }
}
