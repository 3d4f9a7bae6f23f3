use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::util::parse_calendar_date;
use crate::{RawIndexPoint, RawRatePoint, SourceStats};

/// Per-day values extracted from one raw source, plus validation counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalized {
    /// Day to value; a later entry for the same day overwrites an earlier one.
    pub values: BTreeMap<NaiveDate, f64>,
    /// How many entries were kept and dropped.
    pub stats: SourceStats,
}

/// Validate exchange-rate entries, keyed by day with the sell quote as value.
///
/// Entries with a missing or unparseable date, or a sell quote that is not a
/// finite number strictly above zero, are dropped and counted.
#[must_use]
pub fn normalize_rates(points: &[RawRatePoint]) -> Normalized {
    normalize_entries(
        "rates",
        points.iter().map(|p| (p.date.as_deref(), p.sell)),
    )
}

/// Validate price-index entries, keyed by day. Same rules as [`normalize_rates`].
#[must_use]
pub fn normalize_index(points: &[RawIndexPoint]) -> Normalized {
    normalize_entries(
        "index",
        points.iter().map(|p| (p.date.as_deref(), p.value)),
    )
}

fn normalize_entries<'a, I>(source: &'static str, entries: I) -> Normalized
where
    I: IntoIterator<Item = (Option<&'a str>, Option<f64>)>,
{
    let mut out = Normalized::default();
    for (position, (date, value)) in entries.into_iter().enumerate() {
        match validate(date, value) {
            Ok((day, v)) => {
                out.values.insert(day, v);
                out.stats.kept += 1;
            }
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(source, position, reason, ?date, ?value, "dropping raw entry");
                #[cfg(not(feature = "tracing"))]
                let _ = (source, position, reason);
                out.stats.dropped += 1;
            }
        }
    }
    out
}

fn validate(date: Option<&str>, value: Option<f64>) -> Result<(NaiveDate, f64), &'static str> {
    let raw_date = date.ok_or("missing date")?;
    let day = parse_calendar_date(raw_date).ok_or("unparseable date")?;
    let v = value.ok_or("missing value")?;
    if !v.is_finite() || v <= 0.0 {
        return Err("non-positive value");
    }
    Ok((day, v))
}
