//! Closed Newton–Cotes rule on seven nodes.

/// Weights of the 7-node closed rule, to be divided by 840.
pub const NEWTON_COTES_WEIGHTS: [f64; 7] = [41.0, 216.0, 27.0, 272.0, 27.0, 216.0, 41.0];

const WEIGHT_SUM: f64 = 840.0;

/// Integrates `f` over `[a, b]` with the 7-node closed Newton–Cotes rule.
///
/// Nodes are `a + i (b - a) / 6` for `i = 0..=6`. The rule is exact for
/// polynomials up to degree 7.
///
/// # Example
///
/// ```rust
/// use numlab_math::integration::newton_cotes;
///
/// let value = newton_cotes(|x: f64| x.exp(), 0.0, 1.0);
/// assert!((value - (std::f64::consts::E - 1.0)).abs() < 1e-8);
/// ```
pub fn newton_cotes<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let intervals = NEWTON_COTES_WEIGHTS.len() - 1;
    let h = (b - a) / intervals as f64;

    let sum: f64 = NEWTON_COTES_WEIGHTS
        .iter()
        .enumerate()
        .map(|(i, w)| w * f(a + i as f64 * h))
        .sum();

    (b - a) * sum / WEIGHT_SUM
}
