use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DailyPoint;

/// Difference between a current and a reference derived value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueChange {
    /// `current - reference`.
    pub absolute: f64,
    /// `(current / reference - 1) * 100`, or 0 when the reference is 0.
    pub percentage: f64,
    /// True when `absolute` is strictly positive.
    pub increased: bool,
}

impl ValueChange {
    /// Change from `reference` to `current`.
    #[must_use]
    pub fn between(current: f64, reference: f64) -> Self {
        let absolute = current - reference;
        let percentage = if reference == 0.0 {
            0.0
        } else {
            (current / reference - 1.0) * 100.0
        };
        Self {
            absolute,
            percentage,
            increased: absolute > 0.0,
        }
    }
}

/// A past day set against the latest day of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointComparison {
    /// The selected day.
    pub point: DailyPoint,
    /// The most recent day.
    pub latest: DailyPoint,
    /// Change of the derived value from `point` to `latest`.
    pub change: ValueChange,
}

/// Change of the last derived value versus the one before it.
///
/// Returns `None` for series shorter than two points.
#[must_use]
pub fn latest_change(series: &[DailyPoint]) -> Option<ValueChange> {
    match series {
        [.., prev, last] => Some(ValueChange::between(last.derived_value, prev.derived_value)),
        _ => None,
    }
}

/// Compare the point on `date` with the latest point.
///
/// Returns `None` when `date` is not covered. `series` must be sorted
/// ascending.
#[must_use]
pub fn compare_to_latest(series: &[DailyPoint], date: NaiveDate) -> Option<PointComparison> {
    let latest = *series.last()?;
    let i = series.binary_search_by_key(&date, |p| p.date).ok()?;
    let point = series[i];
    Some(PointComparison {
        point,
        latest,
        change: ValueChange::between(latest.derived_value, point.derived_value),
    })
}

/// First and last day of a sorted series.
#[must_use]
pub fn date_bounds(series: &[DailyPoint]) -> Option<(NaiveDate, NaiveDate)> {
    Some((series.first()?.date, series.last()?.date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_handles_zero_reference() {
        let c = ValueChange::between(10.0, 0.0);
        assert_eq!(c.absolute, 10.0);
        assert_eq!(c.percentage, 0.0);
        assert!(c.increased);
    }

    #[test]
    fn flat_change_is_not_an_increase() {
        let c = ValueChange::between(5.0, 5.0);
        assert_eq!(c.absolute, 0.0);
        assert!(!c.increased);
    }
}
