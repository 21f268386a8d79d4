//! Central-difference formulas: Gauss forward, Stirling and Bessel.
//!
//! All three anchor at the middle of a uniform table and add difference
//! terms for as long as the table supplies them, alternating sides around
//! the anchor. A table with `n` nodes gives a polynomial through the
//! `n` nodes for Gauss and Stirling on odd `n`, and through the nodes the
//! zig-zag reaches otherwise.

use crate::error::{MathError, MathResult};
use crate::interpolation::{DifferenceTable, Interpolator};

const GAUSS_MIN_NODES: usize = 5;
const STIRLING_MIN_NODES: usize = 5;
const BESSEL_MIN_NODES: usize = 4;

fn uniform_with_nodes(table: &DifferenceTable, required: usize) -> MathResult<f64> {
    if table.len() < required {
        return Err(MathError::insufficient_data(required, table.len()));
    }
    table.uniform_step()
}

/// `Δᵏy_j` when `j` is a valid (non-negative) index in row `k`.
fn difference(table: &DifferenceTable, k: usize, j: isize) -> Option<f64> {
    usize::try_from(j).ok().and_then(|j| table.get(k, j))
}

/// Gauss's first (forward) central-difference formula.
///
/// Anchored at `x_m` with `m = n / 2` and `t = (x - x_m) / h`:
///
/// `P = y_m + t Δy_m + t(t-1)/2! Δ²y_{m-1} + (t+1)t(t-1)/3! Δ³y_{m-1}
///      + (t+1)t(t-1)(t-2)/4! Δ⁴y_{m-2} + ...`
#[derive(Debug, Clone)]
pub struct GaussForward {
    table: DifferenceTable,
    step: f64,
}

impl GaussForward {
    /// Creates the interpolator; needs a uniform grid of at least 5 nodes.
    pub fn new(table: DifferenceTable) -> MathResult<Self> {
        let step = uniform_with_nodes(&table, GAUSS_MIN_NODES)?;
        Ok(Self { table, step })
    }
}

impl Interpolator for GaussForward {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let m = self.table.len() / 2;
        let t = (x - self.table.xs()[m]) / self.step;

        let mut value = self.table.ys()[m];
        let mut term = 1.0;
        for k in 1..self.table.len() {
            // factors t, t-1, t+1, t-2, t+2, ...
            let shift = if k % 2 == 1 { ((k - 1) / 2) as f64 } else { -((k / 2) as f64) };
            let Some(delta) = difference(&self.table, k, m as isize - (k / 2) as isize) else {
                break;
            };
            term *= (t + shift) / k as f64;
            value += term * delta;
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

/// Stirling's formula, the mean of Gauss's forward and backward formulas.
///
/// Anchored at the middle node `x_m` with `t = (x - x_m) / h`:
///
/// `P = y_m + t (Δy_{m-1} + Δy_m)/2 + t²/2! Δ²y_{m-1}
///      + t(t²-1)/3! (Δ³y_{m-2} + Δ³y_{m-1})/2 + t²(t²-1)/4! Δ⁴y_{m-2} + ...`
///
/// Needs an odd number of nodes so the anchor is the exact middle.
#[derive(Debug, Clone)]
pub struct Stirling {
    table: DifferenceTable,
    step: f64,
}

impl Stirling {
    /// Creates the interpolator; needs a uniform grid of an odd number
    /// (at least 5) of nodes.
    pub fn new(table: DifferenceTable) -> MathResult<Self> {
        let step = uniform_with_nodes(&table, STIRLING_MIN_NODES)?;
        if table.len() % 2 == 0 {
            return Err(MathError::invalid_input(format!(
                "Stirling's formula needs an odd number of nodes, got {}",
                table.len()
            )));
        }
        Ok(Self { table, step })
    }
}

impl Interpolator for Stirling {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let m = (self.table.len() / 2) as isize;
        let t = (x - self.table.xs()[m as usize]) / self.step;

        let mut value = self.table.ys()[m as usize];
        // t (t²-1)(t²-4)... without the trailing factor of t for even orders
        let mut odd_product = t;
        let mut factorial = 1.0;

        for k in 1..self.table.len() {
            factorial *= k as f64;
            let q = (k / 2) as isize;

            let contribution = if k % 2 == 1 {
                if k > 1 {
                    odd_product *= t * t - (q * q) as f64;
                }
                let (Some(lo), Some(hi)) = (
                    difference(&self.table, k, m - q - 1),
                    difference(&self.table, k, m - q),
                ) else {
                    break;
                };
                odd_product * (lo + hi) / 2.0
            } else {
                let Some(delta) = difference(&self.table, k, m - q) else {
                    break;
                };
                t * odd_product * delta
            };

            value += contribution / factorial;
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

/// Bessel's formula, centred between the two middle nodes.
///
/// With `m = n / 2 - 1`, `t = (x - x_m) / h` and `v = t - 1/2`:
///
/// `P = (y_m + y_{m+1})/2 + v Δy_m + t(t-1)/2! (Δ²y_{m-1} + Δ²y_m)/2
///      + v t(t-1)/3! Δ³y_{m-1} + (t+1)t(t-1)(t-2)/4! (Δ⁴y_{m-2} + Δ⁴y_{m-1})/2 + ...`
///
/// Best for points near the middle of a table with an even node count.
#[derive(Debug, Clone)]
pub struct Bessel {
    table: DifferenceTable,
    step: f64,
}

impl Bessel {
    /// Creates the interpolator; needs a uniform grid of at least 4 nodes.
    pub fn new(table: DifferenceTable) -> MathResult<Self> {
        let step = uniform_with_nodes(&table, BESSEL_MIN_NODES)?;
        Ok(Self { table, step })
    }
}

impl Interpolator for Bessel {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let m = (self.table.len() / 2 - 1) as isize;
        let t = (x - self.table.xs()[m as usize]) / self.step;
        let v = t - 0.5;

        let ys = self.table.ys();
        let mut value = (ys[m as usize] + ys[m as usize + 1]) / 2.0;
        // (t+q-1)...t(t-1)...(t-q), grown by two factors per even order
        let mut even_product = 1.0;
        let mut factorial = 1.0;

        for k in 1..self.table.len() {
            factorial *= k as f64;
            let q = (k / 2) as isize;

            let contribution = if k % 2 == 1 {
                let Some(delta) = difference(&self.table, k, m - q) else {
                    break;
                };
                v * even_product * delta
            } else {
                let (Some(lo), Some(hi)) = (
                    difference(&self.table, k, m - q),
                    difference(&self.table, k, m - q + 1),
                ) else {
                    break;
                };
                even_product *= (t + (q - 1) as f64) * (t - q as f64);
                even_product * (lo + hi) / 2.0
            };

            value += contribution / factorial;
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
