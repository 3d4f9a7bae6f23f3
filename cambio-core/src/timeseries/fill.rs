use chrono::NaiveDate;

use super::util::day_start_millis;
use crate::DailyPoint;

/// One of the three values tracked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `DailyPoint::rate_value`.
    Rate,
    /// `DailyPoint::index_value`.
    Index,
    /// `DailyPoint::derived_value`.
    Derived,
}

impl Field {
    /// Read this field from a point.
    #[must_use]
    pub const fn get(self, p: &DailyPoint) -> f64 {
        match self {
            Self::Rate => p.rate_value,
            Self::Index => p.index_value,
            Self::Derived => p.derived_value,
        }
    }
}

/// Produce one point for every calendar day between the first and last known
/// day, interpolating each field of the missing days independently.
///
/// - Fewer than two input points: returned unchanged.
/// - Points whose three values are all zero carry no data and are dropped
///   before anything else; the remaining points are the anchors.
/// - A day with an anchor reuses it as is (the first one when a day repeats).
/// - Any other day is interpolated from the nearest anchors strictly before
///   and after it, see [`interpolate_value`].
/// - Finally every point with a non-positive field is discarded, so the
///   output only holds fully populated days. An anchor known on one side
///   only (e.g. a rate without an index reading) is therefore used for
///   interpolation but does not itself survive.
///
/// The output is sorted ascending with no duplicate days.
#[must_use]
pub fn fill_missing_days(points: Vec<DailyPoint>) -> Vec<DailyPoint> {
    if points.len() < 2 {
        return points;
    }

    let mut anchors: Vec<DailyPoint> = points.into_iter().filter(|p| !p.is_blank()).collect();
    // Stable sort keeps the first of several same-day points in front.
    anchors.sort_by_key(|p| p.date);

    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return Vec::new();
    };
    let (start, end) = (first.date, last.date);
    let span = usize::try_from((end - start).num_days()).unwrap_or(0) + 1;

    let mut out: Vec<DailyPoint> = Vec::with_capacity(span);
    // Index of the first anchor dated on or after the current day.
    let mut cursor = 0usize;
    for day in start.iter_days().take_while(|d| *d <= end) {
        while anchors.get(cursor).is_some_and(|a| a.date < day) {
            cursor += 1;
        }
        let next = anchors.get(cursor);
        if let Some(exact) = next.filter(|a| a.date == day) {
            out.push(*exact);
            continue;
        }
        let prev = cursor.checked_sub(1).and_then(|i| anchors.get(i));
        out.push(interpolate_day(day, prev, next));
    }

    out.retain(DailyPoint::is_complete);
    out
}

fn interpolate_day(
    day: NaiveDate,
    prev: Option<&DailyPoint>,
    next: Option<&DailyPoint>,
) -> DailyPoint {
    DailyPoint::new(
        day,
        interpolate_value(day, prev, next, Field::Rate),
        interpolate_value(day, prev, next, Field::Index),
        interpolate_value(day, prev, next, Field::Derived),
    )
}

/// Estimate `field` on `day` from the surrounding anchors.
///
/// - No anchor on either side: 0.
/// - Anchor on one side only: that anchor's value (no extrapolation).
/// - Either anchor's value is exactly zero: the other anchor's value, since
///   a zero reading means "unknown" rather than a real level.
/// - Otherwise: linear interpolation by elapsed time,
///   `prev + (next - prev) * (t - t_prev) / (t_next - t_prev)`, with times
///   taken as milliseconds at the start of each day.
///
/// ```
/// use cambio_core::DailyPoint;
/// use cambio_core::timeseries::fill::{Field, interpolate_value};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let prev = DailyPoint::new(day(1), 100.0, 1.0, 100.0);
/// let next = DailyPoint::new(day(11), 200.0, 1.0, 200.0);
/// let v = interpolate_value(day(5), Some(&prev), Some(&next), Field::Rate);
/// assert!((v - 140.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn interpolate_value(
    day: NaiveDate,
    prev: Option<&DailyPoint>,
    next: Option<&DailyPoint>,
    field: Field,
) -> f64 {
    match (prev, next) {
        (None, None) => 0.0,
        (None, Some(n)) => field.get(n),
        (Some(p), None) => field.get(p),
        (Some(p), Some(n)) => {
            let (pv, nv) = (field.get(p), field.get(n));
            if pv == 0.0 {
                return nv;
            }
            if nv == 0.0 {
                return pv;
            }
            let t_prev = day_start_millis(p.date);
            let span = day_start_millis(n.date) - t_prev;
            if span <= 0 {
                return pv;
            }
            #[allow(clippy::cast_precision_loss)]
            let ratio = (day_start_millis(day) - t_prev) as f64 / span as f64;
            pv + (nv - pv) * ratio
        }
    }
}
