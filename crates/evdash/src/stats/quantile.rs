//! Quantile computation.

use crate::error::{DashboardError, Result};

/// Quantile of `values` using linear interpolation between closest ranks.
///
/// `rank = q * (n - 1)`, the same default NumPy and pandas use. Returns `None`
/// for an empty slice. NaN values are ignored.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }

    let rank = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        Some(sorted[lower])
    } else {
        Some(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
    }
}

/// Reject a quantile outside the open interval (0, 1).
pub fn validate_quantile(q: f64) -> Result<()> {
    if q.is_finite() && q > 0.0 && q < 1.0 {
        Ok(())
    } else {
        Err(DashboardError::InvalidParameter(format!(
            "Quantile must be strictly between 0 and 1, got {}",
            q
        )))
    }
}
