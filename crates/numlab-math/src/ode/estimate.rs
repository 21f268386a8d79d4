//! Error estimates for ODE solutions.

use crate::error::{MathError, MathResult};

/// Runge rule error estimate at the nodes of the coarse solution.
///
/// `coarse` was computed with step `h`, `fine` with `h / 2` on the same
/// interval, so `fine[2i]` sits on the node of `coarse[i]`:
///
/// `R_i = |fine[2i] - coarse[i]| / (2^p - 1)`
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `order` is zero
/// - [`MathError::InsufficientData`] if `fine` does not reach the last coarse node
///
/// # Example
///
/// ```rust
/// use numlab_math::ode::{runge_estimate, InitialValueProblem, OdeMethod};
///
/// let problem = InitialValueProblem::new(|_: f64, y: f64| -y, 0.0, 1.0);
/// let coarse = problem.integrate(OdeMethod::ImprovedEuler, 1.0, 0.1).unwrap();
/// let fine = problem.integrate(OdeMethod::ImprovedEuler, 1.0, 0.05).unwrap();
///
/// let estimate = runge_estimate(&coarse.ys, &fine.ys, 2).unwrap();
/// assert_eq!(estimate.len(), coarse.len());
/// assert_eq!(estimate[0], 0.0);
/// ```
pub fn runge_estimate(coarse: &[f64], fine: &[f64], order: u32) -> MathResult<Vec<f64>> {
    if order == 0 {
        return Err(MathError::invalid_input("method order must be positive"));
    }
    let required = (2 * coarse.len()).saturating_sub(1);
    if fine.len() < required {
        return Err(MathError::insufficient_data(required, fine.len()));
    }

    let factor = 2.0_f64.powi(order as i32) - 1.0;
    Ok(coarse
        .iter()
        .zip(fine.iter().step_by(2))
        .map(|(c, f)| (f - c).abs() / factor)
        .collect())
}

/// Largest `|computed[i] - exact[i]|` over the common length.
///
/// Empty input yields zero.
pub fn max_error(computed: &[f64], exact: &[f64]) -> f64 {
    computed
        .iter()
        .zip(exact)
        .map(|(c, e)| (c - e).abs())
        .fold(0.0, f64::max)
}

/// Step expected to bring the error of an order-`p` method to `eps`.
///
/// `h_new = h (eps / estimate)^(1/p)`. A zero estimate leaves `h` unchanged.
///
/// # Errors
///
/// [`MathError::InvalidInput`] unless `h > 0`, `eps > 0`, `estimate >= 0`
/// and `order > 0`.
pub fn recommended_step(h: f64, estimate: f64, eps: f64, order: u32) -> MathResult<f64> {
    if !(h > 0.0 && eps > 0.0 && estimate >= 0.0) || order == 0 {
        return Err(MathError::invalid_input(format!(
            "invalid step inputs: h = {h}, estimate = {estimate}, eps = {eps}, order = {order}"
        )));
    }
    if estimate == 0.0 {
        return Ok(h);
    }

    Ok(h * (eps / estimate).powf(1.0 / f64::from(order)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ode::{InitialValueProblem, OdeMethod, OdeSolution};
    use approx::assert_relative_eq;

    #[test]
    fn test_runge_estimate_tracks_true_error() {
        let problem = InitialValueProblem::new(|x: f64, y: f64| x + y, 0.0, 1.0);
        let exact = OdeSolution::exact(|x| 2.0 * x.exp() - x - 1.0, 0.0, 1.0, 0.05).unwrap();

        let coarse = problem.integrate(OdeMethod::RungeKutta4, 1.0, 0.1).unwrap();
        let fine = problem.integrate(OdeMethod::RungeKutta4, 1.0, 0.05).unwrap();

        let estimate = runge_estimate(&coarse.ys, &fine.ys, 4).unwrap();
        let estimated = estimate.iter().copied().fold(0.0, f64::max);
        let actual = max_error(&fine.ys, &exact.ys);

        // same magnitude as the true error of the fine solution
        assert!(estimated > 0.5 * actual && estimated < 2.0 * actual);
    }

    #[test]
    fn test_runge_estimate_compares_shared_nodes() {
        let coarse = [1.0, 2.0, 3.0];
        let fine = [1.0, 9.0, 2.3, 9.0, 3.6];

        let estimate = runge_estimate(&coarse, &fine, 1).unwrap();

        assert_relative_eq!(estimate[0], 0.0);
        assert_relative_eq!(estimate[1], 0.3, epsilon = 1e-12);
        assert_relative_eq!(estimate[2], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_runge_estimate_errors() {
        assert!(matches!(
            runge_estimate(&[1.0, 2.0, 3.0], &[1.0, 1.5, 2.0], 2),
            Err(MathError::InsufficientData { required: 5, actual: 3 })
        ));
        assert!(matches!(
            runge_estimate(&[1.0], &[1.0], 0),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_max_error() {
        assert_relative_eq!(max_error(&[1.0, 2.0, 3.0], &[1.1, 1.5, 3.0]), 0.5);
        assert_relative_eq!(max_error(&[], &[]), 0.0);
    }

    #[test]
    fn test_recommended_step() {
        // fourth order: 16x too much error means halving the step
        assert_relative_eq!(recommended_step(0.1, 1.6e-5, 1e-6, 4).unwrap(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(recommended_step(0.1, 0.0, 1e-6, 4).unwrap(), 0.1);
        assert!(recommended_step(0.1, 1e-3, 0.0, 1).is_err());
        assert!(recommended_step(0.1, 1e-3, 1e-4, 0).is_err());
    }
}
