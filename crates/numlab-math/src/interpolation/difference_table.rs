//! Forward finite-difference table.

use crate::error::{MathError, MathResult};

/// Tolerance when deciding whether node spacing is uniform.
pub const UNIFORM_GRID_TOLERANCE: f64 = 1e-9;

/// Interpolation nodes together with their forward differences.
///
/// Row `k` of the table holds `Δᵏy_j` for `j = 0..n - k`, where
/// `Δ⁰y_j = y_j` and `Δᵏy_j = Δᵏ⁻¹y_{j+1} - Δᵏ⁻¹y_j`.
///
/// # Example
///
/// ```rust
/// use numlab_math::interpolation::DifferenceTable;
///
/// let table = DifferenceTable::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 8.0, 27.0]).unwrap();
///
/// assert_eq!(table.differences(1), &[1.0, 7.0, 19.0]);
/// assert_eq!(table.differences(3), &[6.0]);
/// assert_eq!(table.step(), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    xs: Vec<f64>,
    rows: Vec<Vec<f64>>,
    step: Option<f64>,
    min_x: f64,
    max_x: f64,
}

impl DifferenceTable {
    /// Builds the table for nodes `xs` with values `ys`.
    ///
    /// Nodes need not be sorted, but finite-difference formulas only make
    /// sense on an ascending uniform grid.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidInput`] if lengths differ or a value is not finite
    /// - [`MathError::InsufficientData`] with fewer than 2 nodes
    /// - [`MathError::DuplicateNode`] if two nodes coincide
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.iter().chain(&ys).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("nodes and values must be finite"));
        }

        let mut sorted = xs.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(MathError::DuplicateNode { x: pair[0] });
        }

        let step = uniform_step(&xs);
        let mut rows = Vec::with_capacity(ys.len());
        rows.push(ys);
        for k in 1..xs.len() {
            let next: Vec<f64> = rows[k - 1].windows(2).map(|w| w[1] - w[0]).collect();
            rows.push(next);
        }

        Ok(Self {
            min_x: sorted[0],
            max_x: sorted[sorted.len() - 1],
            xs,
            rows,
            step,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a table holds at least two nodes.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The nodes, in input order.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The values at the nodes.
    pub fn ys(&self) -> &[f64] {
        &self.rows[0]
    }

    /// Differences of the given order, `Δᵏy_0 ..= Δᵏy_{n-1-k}`.
    ///
    /// Orders at or beyond the node count yield an empty slice.
    pub fn differences(&self, order: usize) -> &[f64] {
        self.rows.get(order).map(Vec::as_slice).unwrap_or_default()
    }

    /// `Δᵏy_j`, or `None` outside the table.
    pub fn get(&self, order: usize, j: usize) -> Option<f64> {
        self.rows.get(order).and_then(|row| row.get(j)).copied()
    }

    /// Spacing `h` when the nodes are equally spaced within `1e-9`.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// True when [`step`](Self::step) is known.
    pub fn is_uniform(&self) -> bool {
        self.step.is_some()
    }

    /// Spacing of an ascending uniform grid, for finite-difference formulas.
    pub(crate) fn uniform_step(&self) -> MathResult<f64> {
        match self.step {
            Some(h) if h > 0.0 => Ok(h),
            _ => Err(MathError::NonUniformGrid),
        }
    }

    /// Smallest node.
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Largest node.
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
}

fn uniform_step(xs: &[f64]) -> Option<f64> {
    let h = xs[1] - xs[0];
    xs.windows(2)
        .all(|w| ((w[1] - w[0]) - h).abs() <= UNIFORM_GRID_TOLERANCE)
        .then_some(h)
}
