//! Time-series engine over daily observations.
//!
//! Modules include:
//! - `normalize`: validate raw entries into per-day value maps
//! - `merge`: union two value maps into a sparse daily series
//! - `fill`: interpolate every missing calendar day
//! - `window`: trailing lookback selection
//! - `sma`: trailing simple moving average
//! - `pipeline`: the raw-to-complete composition of the above
/// Gap filling by per-field linear interpolation.
pub mod fill;
/// Merge two per-day value maps into a sparse series.
pub mod merge;
/// Validation of raw entries into per-day value maps.
pub mod normalize;
/// End-to-end composition from raw payloads to a complete daily series.
pub mod pipeline;
/// Trailing simple moving average.
pub mod sma;
/// Calendar-day helpers shared by the engine.
pub mod util;
/// Named lookback window selection.
pub mod window;
