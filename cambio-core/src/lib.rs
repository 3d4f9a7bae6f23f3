//! cambio-core
//!
//! Core types, traits, and the time-series engine shared across the cambio
//! workspace.
//!
//! - `types`: re-exported data transfer objects from `cambio-types`.
//! - `connector`: the `CambioConnector` trait and capability provider traits.
//! - `timeseries`: normalization, merging, gap filling, windowing, and
//!   moving averages over daily series.
//! - `analytics`: point-to-point comparisons over a finished series.
//!
//! The engine is synchronous and allocation-light; every operation is a pure
//! function of its inputs. Only the connector traits are async.
#![warn(missing_docs)]

/// Comparisons between points of a finished daily series.
pub mod analytics;
/// Connector capability traits and the primary `CambioConnector` interface.
pub mod connector;
/// Time-series engine: normalize, merge, fill, window, average.
pub mod timeseries;
pub mod types;

pub use analytics::{PointComparison, ValueChange, compare_to_latest, date_bounds, latest_change};
pub use connector::{CambioConnector, IndexProvider, RateProvider};
pub use timeseries::fill::fill_missing_days;
pub use timeseries::merge::merge_series;
pub use timeseries::normalize::{Normalized, normalize_index, normalize_rates};
pub use timeseries::pipeline::{DailySeries, build_daily_series};
pub use timeseries::sma::{SmoothedPoint, moving_average, smoothed};
pub use timeseries::window::filter_by_window;
pub use types::*;
