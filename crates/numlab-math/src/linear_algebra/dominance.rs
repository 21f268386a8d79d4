//! Greedy row reordering into strict diagonal dominance.

use crate::error::{MathError, MathResult};
use crate::linear_algebra::{infinity_norm, LinearSystem};
use nalgebra::{DMatrix, DVector};

/// A row permutation of a [`LinearSystem`] in which every row is strictly
/// diagonally dominant.
///
/// Only [`enforce_diagonal_dominance`] builds one, so the dominance
/// invariant holds for every value of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    permutation: Vec<usize>,
}

impl DominantSystem {
    /// Number of unknowns.
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// The reordered coefficient matrix `A'`.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The reordered right-hand side `b'`.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// `permutation()[i]` is the original row placed at position `i`.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Infinity norm of the reordered matrix.
    pub fn norm(&self) -> f64 {
        infinity_norm(&self.matrix)
    }
}

/// Reorders rows so the matrix becomes strictly diagonally dominant.
///
/// For each diagonal position `i` in order, every unused row is scored by
/// `|a[row][i]|` against the sum of its other absolute entries. Among the
/// rows that dominate, the one with the largest diagonal wins; ties go to
/// the lowest original row index. The search is a single greedy pass and an
/// earlier assignment is never revisited.
///
/// The input system is not modified.
///
/// # Errors
///
/// Returns [`MathError::DominanceUnachievable`] naming the first position
/// for which no unused row qualifies.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{enforce_diagonal_dominance, LinearSystem};
///
/// let system = LinearSystem::from_rows(
///     &[vec![1.0, 5.0, 1.0], vec![6.0, 1.0, 2.0], vec![1.0, 1.0, 4.0]],
///     &[7.0, 9.0, 6.0],
/// ).unwrap();
///
/// let dominant = enforce_diagonal_dominance(&system).unwrap();
/// assert_eq!(dominant.permutation(), &[1, 0, 2]);
/// ```
pub fn enforce_diagonal_dominance(system: &LinearSystem) -> MathResult<DominantSystem> {
    let a = system.matrix();
    let b = system.rhs();
    let n = system.dim();

    let mut used = vec![false; n];
    let mut permutation = Vec::with_capacity(n);

    for position in 0..n {
        let mut best: Option<(usize, f64)> = None;

        for row in (0..n).filter(|&row| !used[row]) {
            let diagonal = a[(row, position)].abs();
            let off_sum: f64 = (0..n)
                .filter(|&col| col != position)
                .map(|col| a[(row, col)].abs())
                .sum();

            // strict comparison keeps the earliest row on ties
            if diagonal > off_sum && best.map_or(true, |(_, max)| diagonal > max) {
                best = Some((row, diagonal));
            }
        }

        let Some((row, diagonal)) = best else {
            log::debug!("no dominant row for position {position} of {n}");
            return Err(MathError::DominanceUnachievable { position });
        };

        log::trace!("position {position}: row {row} (|diagonal| = {diagonal})");
        used[row] = true;
        permutation.push(row);
    }

    let matrix = DMatrix::from_fn(n, n, |i, j| a[(permutation[i], j)]);
    let rhs = DVector::from_fn(n, |i, _| b[permutation[i]]);

    Ok(DominantSystem {
        matrix,
        rhs,
        permutation,
    })
}
