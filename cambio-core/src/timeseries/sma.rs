use serde::{Deserialize, Serialize};

use crate::{CambioError, DailyPoint};

/// A series point paired with its trailing moving average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    /// The underlying day.
    pub point: DailyPoint,
    /// Trailing mean of `derived_value` (or the raw value while warming up).
    pub average: f64,
}

/// Trailing simple moving average of `derived_value` over `period` points.
///
/// The output has the same length as `series`. Position `i` holds the mean of
/// the `period` points ending at `i`; the first `period - 1` positions, which
/// lack enough history, hold their own raw `derived_value` instead.
///
/// # Errors
/// Returns `CambioError::InvalidArg` if `period` is zero.
pub fn moving_average(series: &[DailyPoint], period: usize) -> Result<Vec<f64>, CambioError> {
    if period == 0 {
        return Err(CambioError::InvalidArg(
            "moving average period must be positive".into(),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = period as f64;
    let out = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i + 1 < period {
                p.derived_value
            } else {
                let sum: f64 = series[i + 1 - period..=i]
                    .iter()
                    .map(|q| q.derived_value)
                    .sum();
                sum / divisor
            }
        })
        .collect();
    Ok(out)
}

/// Pair every point with its [`moving_average`] value.
///
/// # Errors
/// Returns `CambioError::InvalidArg` if `period` is zero.
pub fn smoothed(series: &[DailyPoint], period: usize) -> Result<Vec<SmoothedPoint>, CambioError> {
    let averages = moving_average(series, period)?;
    Ok(series
        .iter()
        .zip(averages)
        .map(|(point, average)| SmoothedPoint {
            point: *point,
            average,
        })
        .collect())
}
