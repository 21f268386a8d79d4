//! Composite midpoint, trapezoidal and Simpson rules.

use crate::error::{MathError, MathResult};

fn check_intervals(n: usize) -> MathResult<()> {
    if n == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(())
}

/// Composite midpoint rule with `n` equal subintervals.
///
/// `h * sum f(a + (i + 1/2) h)` for `i = 0..n`.
pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_intervals(n)?;
    let h = (b - a) / n as f64;

    let sum: f64 = (0..n).map(|i| f(a + (i as f64 + 0.5) * h)).sum();
    Ok(h * sum)
}

/// Composite trapezoidal rule with `n` equal subintervals.
pub fn trapezoidal<F>(f: F, a: f64, b: f64, n: usize) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_intervals(n)?;
    let h = (b - a) / n as f64;

    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    Ok(h * ((f(a) + f(b)) / 2.0 + interior))
}

/// Composite Simpson rule with `n` equal subintervals.
///
/// Odd interior nodes carry weight 4, even ones weight 2.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when `n` is odd.
///
/// # Example
///
/// ```rust
/// use numlab_math::integration::simpson;
///
/// let value = simpson(|x: f64| x * x, 0.0, 3.0, 2).unwrap();
/// assert!((value - 9.0).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_intervals(n)?;
    if n % 2 != 0 {
        return Err(MathError::invalid_input(format!(
            "Simpson's rule needs an even number of subintervals, got {n}"
        )));
    }
    let h = (b - a) / n as f64;

    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();

    Ok(h * (f(a) + f(b) + interior) / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_intervals() {
        let f = |x: f64| x;
        for result in [
            midpoint(f, 0.0, 1.0, 0),
            trapezoidal(f, 0.0, 1.0, 0),
            simpson(f, 0.0, 1.0, 0),
        ] {
            assert!(matches!(
                result,
                Err(MathError::InsufficientData { required: 1, actual: 0 })
            ));
        }
    }

    #[test]
    fn test_simpson_odd_intervals() {
        assert!(matches!(
            simpson(|x: f64| x, 0.0, 1.0, 3),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_linear_exact() {
        let f = |x: f64| 3.0 * x + 1.0;
        // integral over [0, 2] is 8
        assert_relative_eq!(midpoint(f, 0.0, 2.0, 1).unwrap(), 8.0, epsilon = 1e-14);
        assert_relative_eq!(trapezoidal(f, 0.0, 2.0, 1).unwrap(), 8.0, epsilon = 1e-14);
        assert_relative_eq!(simpson(f, 0.0, 2.0, 2).unwrap(), 8.0, epsilon = 1e-14);
    }

    #[test]
    fn test_trapezoid_second_order() {
        let exact = 2.0; // integral of sin over [0, pi]
        let pi = std::f64::consts::PI;

        let coarse = (trapezoidal(f64::sin, 0.0, pi, 16).unwrap() - exact).abs();
        let fine = (trapezoidal(f64::sin, 0.0, pi, 32).unwrap() - exact).abs();

        // halving h quarters the error
        assert_relative_eq!(coarse / fine, 4.0, epsilon = 0.01);
    }

    #[test]
    fn test_simpson_fourth_order() {
        let pi = std::f64::consts::PI;

        let coarse = (simpson(f64::sin, 0.0, pi, 8).unwrap() - 2.0).abs();
        let fine = (simpson(f64::sin, 0.0, pi, 16).unwrap() - 2.0).abs();

        assert_relative_eq!(coarse / fine, 16.0, epsilon = 0.5);
    }
}
