//! Raw and normalized observation types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exchange-rate observation as reported by a rate source.
///
/// Every field is optional so that a malformed entry survives decoding and is
/// rejected later by the normalizer, where it is counted. Only `date` and
/// `sell` take part in the computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRatePoint {
    /// Calendar date in the source's ISO-8601 format.
    pub date: Option<String>,
    /// Buy-side quote.
    pub buy: Option<f64>,
    /// Sell-side quote; must be strictly positive to be usable.
    pub sell: Option<f64>,
    /// Source-specific identifier of the quoting market (e.g. "bolsa").
    pub source_id: Option<String>,
}

impl RawRatePoint {
    /// Convenience constructor for a dated sell quote.
    pub fn new(date: impl Into<String>, sell: f64) -> Self {
        Self {
            date: Some(date.into()),
            sell: Some(sell),
            ..Self::default()
        }
    }
}

/// One price-index observation as reported by an index source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawIndexPoint {
    /// Calendar date in the source's ISO-8601 format.
    pub date: Option<String>,
    /// Index reading; must be strictly positive to be usable.
    pub value: Option<f64>,
}

impl RawIndexPoint {
    /// Convenience constructor for a dated index reading.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: Some(date.into()),
            value: Some(value),
        }
    }
}

/// One calendar day of the merged series.
///
/// `derived_value` is the rate re-expressed at the latest index level:
/// `rate_value / index_value * latest_index` when `index_value > 0`, else 0.
/// Gap-filled days carry independently interpolated fields instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Calendar day (no time component).
    pub date: NaiveDate,
    /// Exchange rate (0 when unknown).
    pub rate_value: f64,
    /// Price index (0 when unknown).
    pub index_value: f64,
    /// Index-deflated rate expressed at the latest index level.
    pub derived_value: f64,
}

impl DailyPoint {
    /// Build a point from explicit field values.
    #[must_use]
    pub const fn new(date: NaiveDate, rate_value: f64, index_value: f64, derived_value: f64) -> Self {
        Self {
            date,
            rate_value,
            index_value,
            derived_value,
        }
    }

    /// Build a point from raw readings, deriving the deflated value against
    /// `latest_index`.
    #[must_use]
    pub fn from_readings(date: NaiveDate, rate_value: f64, index_value: f64, latest_index: f64) -> Self {
        let derived_value = if index_value > 0.0 {
            (rate_value / index_value) * latest_index
        } else {
            0.0
        };
        Self::new(date, rate_value, index_value, derived_value)
    }

    /// True when every tracked value is zero, i.e. the day carries no data.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rate_value == 0.0 && self.index_value == 0.0 && self.derived_value == 0.0
    }

    /// True when every tracked value is strictly positive.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rate_value > 0.0 && self.index_value > 0.0 && self.derived_value > 0.0
    }
}
