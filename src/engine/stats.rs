//! Small numeric helpers shared by every scorer.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by n).
///
/// Returns `None` when fewer than two values are available. Downstream
/// consistency ceilings are tuned against the population form, so this is
/// not a sample estimator.
pub fn stddev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Round half away from zero and clamp into the 0-100 score range.
pub fn to_score(x: f64) -> u8 {
    clamp(x.round(), 0.0, 100.0) as u8
}
