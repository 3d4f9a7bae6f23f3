use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fill::fill_missing_days;
use super::merge::merge_series;
use super::normalize::{normalize_index, normalize_rates};
use super::sma::{SmoothedPoint, moving_average, smoothed};
use super::window::filter_by_window;
use crate::analytics::{self, PointComparison, ValueChange};
use crate::{CambioError, DailyPoint, ImportReport, RawIndexPoint, RawRatePoint, Window};

/// Complete daily series derived from one pair of raw payloads.
///
/// This is the canonical artifact handed to presentation code. It is never
/// updated in place; a refresh builds a new one from fresh raw data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries {
    /// One point per calendar day, ascending.
    pub points: Vec<DailyPoint>,
    /// Validation counts for both raw sources.
    pub report: ImportReport,
}

/// Run normalize, merge, and gap filling over raw exchange-rate and
/// price-index entries.
///
/// Malformed entries are dropped and counted in the report. Only fully
/// populated days are published: when either side has no valid entries the
/// result is an empty series, never an error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cambio_core::build_daily_series",
        skip_all,
        fields(rates = rates.len(), index = index.len()),
    )
)]
#[must_use]
pub fn build_daily_series(rates: &[RawRatePoint], index: &[RawIndexPoint]) -> DailySeries {
    let rate_map = normalize_rates(rates);
    let index_map = normalize_index(index);
    let merged = merge_series(&rate_map.values, &index_map.values);
    let mut points = fill_missing_days(merged);
    // A lone merged point skips the fill's own sanitation.
    points.retain(DailyPoint::is_complete);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        days = points.len(),
        dropped_rates = rate_map.stats.dropped,
        dropped_index = index_map.stats.dropped,
        "built daily series"
    );

    DailySeries {
        points,
        report: ImportReport {
            rates: rate_map.stats,
            index: index_map.stats,
        },
    }
}

impl DailySeries {
    /// Number of days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no day survived the pipeline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent day.
    #[must_use]
    pub fn latest(&self) -> Option<&DailyPoint> {
        self.points.last()
    }

    /// Exact point on `date`, if the series covers it.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyPoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| &self.points[i])
    }

    /// Trailing points covered by `window` as seen on `today`.
    #[must_use]
    pub fn window(&self, window: Window, today: NaiveDate) -> &[DailyPoint] {
        filter_by_window(&self.points, window, today)
    }

    /// Trailing points covered by `window` as seen on the local calendar day.
    #[must_use]
    pub fn window_today(&self, window: Window) -> &[DailyPoint] {
        self.window(window, chrono::Local::now().date_naive())
    }

    /// Moving average of the derived value over the whole series.
    ///
    /// # Errors
    /// Returns `CambioError::InvalidArg` if `period` is zero.
    pub fn moving_average(&self, period: usize) -> Result<Vec<f64>, CambioError> {
        moving_average(&self.points, period)
    }

    /// Points paired with their moving average.
    ///
    /// # Errors
    /// Returns `CambioError::InvalidArg` if `period` is zero.
    pub fn smoothed(&self, period: usize) -> Result<Vec<SmoothedPoint>, CambioError> {
        smoothed(&self.points, period)
    }

    /// Change of the latest derived value versus the day before.
    #[must_use]
    pub fn latest_change(&self) -> Option<ValueChange> {
        analytics::latest_change(&self.points)
    }

    /// Compare the point on `date` with the latest point.
    #[must_use]
    pub fn compare_to_latest(&self, date: NaiveDate) -> Option<PointComparison> {
        analytics::compare_to_latest(&self.points, date)
    }

    /// First and last covered day.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        analytics::date_bounds(&self.points)
    }
}
