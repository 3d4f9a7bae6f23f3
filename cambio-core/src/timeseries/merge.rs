use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::DailyPoint;

/// Merge per-day exchange-rate and price-index values into a sparse series.
///
/// - Days are the union of both maps, ascending.
/// - A value missing on one side is 0 for that day.
/// - The baseline is the index value on the latest index day (0 when the
///   index map is empty), so every derived value is expressed at the most
///   recent price level.
/// - `derived_value` is 0 wherever the index value is 0.
///
/// The result still has gaps wherever neither source reported a day.
#[must_use]
pub fn merge_series(
    rates: &BTreeMap<NaiveDate, f64>,
    index: &BTreeMap<NaiveDate, f64>,
) -> Vec<DailyPoint> {
    let latest_index = index.last_key_value().map_or(0.0, |(_, v)| *v);
    let days: BTreeSet<NaiveDate> = rates.keys().chain(index.keys()).copied().collect();

    days.into_iter()
        .map(|day| {
            let rate = rates.get(&day).copied().unwrap_or(0.0);
            let idx = index.get(&day).copied().unwrap_or(0.0);
            DailyPoint::from_readings(day, rate, idx, latest_index)
        })
        .collect()
}
