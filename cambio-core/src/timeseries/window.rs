use chrono::NaiveDate;

use crate::{DailyPoint, Window};

/// Select the trailing part of a complete series covered by `window`.
///
/// The boundary is `today` minus the window's length; points dated on or
/// after it are kept. [`Window::All`] and an empty series return the input
/// as is. `series` must be sorted ascending, as produced by
/// [`fill_missing_days`](super::fill::fill_missing_days).
///
/// ```
/// use cambio_core::{DailyPoint, Window, filter_by_window};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let series: Vec<DailyPoint> = start
///     .iter_days()
///     .take(90)
///     .map(|d| DailyPoint::new(d, 1.0, 1.0, 1.0))
///     .collect();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
/// let tail = filter_by_window(&series, Window::M1, today);
/// assert_eq!(tail.first().map(|p| p.date), NaiveDate::from_ymd_opt(2024, 2, 29));
/// ```
#[must_use]
pub fn filter_by_window(series: &[DailyPoint], window: Window, today: NaiveDate) -> &[DailyPoint] {
    let Some(start) = window.start_boundary(today) else {
        return series;
    };
    let from = series.partition_point(|p| p.date < start);
    &series[from..]
}
