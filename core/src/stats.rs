//! Small numeric helpers shared by the generators and the analytics.
//!
//! Undefined ratios (empty input, zero base) are reported as `None`,
//! never as NaN or a panic.

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Arithmetic mean. `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// `(to - from) / from * 100`. `None` when `from` is zero or not finite.
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}
