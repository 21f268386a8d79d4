//! One-step and multistep schemes over a prepared grid.

/// Nodes computed by RK4 before the Adams recurrence takes over.
const ADAMS_START: usize = 4;

pub(super) fn euler<F>(f: &F, xs: &[f64], y0: f64, h: f64) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut ys = Vec::with_capacity(xs.len());
    ys.push(y0);
    for i in 1..xs.len() {
        let y = ys[i - 1];
        ys.push(y + h * f(xs[i - 1], y));
    }
    ys
}

pub(super) fn improved_euler<F>(f: &F, xs: &[f64], y0: f64, h: f64) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut ys = Vec::with_capacity(xs.len());
    ys.push(y0);
    for i in 1..xs.len() {
        let y = ys[i - 1];
        let slope = f(xs[i - 1], y);
        let predicted = y + h * slope;
        ys.push(y + h * (slope + f(xs[i], predicted)) / 2.0);
    }
    ys
}

pub(super) fn runge_kutta4<F>(f: &F, xs: &[f64], y0: f64, h: f64) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut ys = Vec::with_capacity(xs.len());
    ys.push(y0);
    for i in 1..xs.len() {
        let (x, y) = (xs[i - 1], ys[i - 1]);
        let k1 = h * f(x, y);
        let k2 = h * f(x + h / 2.0, y + k1 / 2.0);
        let k3 = h * f(x + h / 2.0, y + k2 / 2.0);
        let k4 = h * f(x + h, y + k3);
        ys.push(y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0);
    }
    ys
}

/// Adams–Bashforth 4 predictor with an Adams–Moulton 4 corrector,
/// started with RK4 on the first four nodes.
pub(super) fn adams<F>(f: &F, xs: &[f64], y0: f64, h: f64) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let start = xs.len().min(ADAMS_START);
    let mut ys = runge_kutta4(f, &xs[..start], y0, h);
    ys.reserve(xs.len() - start);

    // slopes at the previous four nodes, oldest first
    let mut slopes: Vec<f64> = xs.iter().zip(&ys).map(|(&x, &y)| f(x, y)).collect();

    for i in start..xs.len() {
        let [f4, f3, f2, f1] = [slopes[i - 4], slopes[i - 3], slopes[i - 2], slopes[i - 1]];

        let predicted = ys[i - 1] + h * (55.0 * f1 - 59.0 * f2 + 37.0 * f3 - 9.0 * f4) / 24.0;
        let corrected =
            ys[i - 1] + h * (9.0 * f(xs[i], predicted) + 19.0 * f1 - 5.0 * f2 + f3) / 24.0;

        log::trace!("adams step {i}: predicted {predicted}, corrected {corrected}");
        ys.push(corrected);
        slopes.push(f(xs[i], corrected));
    }
    ys
}
