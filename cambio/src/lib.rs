//! Cambio fetches an exchange rate and a price index and turns them into one
//! continuous daily series of the index-adjusted rate.
//!
//! Overview
//! - Resolves one connector per series from the registered `cambio_core`
//!   connectors (first capable one, or an explicitly pinned one).
//! - Fetches both series concurrently and joins them; any failure aborts the
//!   load with a single error.
//! - Runs the `cambio_core` pipeline: normalize, merge, fill every calendar
//!   day, sanitize. Dropped source entries are reported as counts.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use cambio::{Cambio, Window};
//! use cambio_argentinadatos::ArgentinaDatosConnector;
//!
//! let cambio = Cambio::builder()
//!     .with_connector(Arc::new(ArgentinaDatosConnector::new_default()?))
//!     .default_window(Window::Y1)
//!     .build()?;
//!
//! let series = cambio.load().await?;
//! let last_year = series.window_today(Window::Y1);
//! let smoothed = cambio.default_smoothing(&series)?;
//! ```
//!
//! See the `demos` crate for runnable end-to-end programs.
#![warn(missing_docs)]

pub(crate) mod core;
mod load;

pub use core::{Cambio, CambioBuilder, tag_err};

// Re-export core types for convenience
pub use cambio_core::{
    CambioConfig, CambioConnector, CambioError, Capability, ConnectorKey, DailyPoint,
    DailySeries, ImportReport, IndexProvider, PointComparison, RateProvider, RawIndexPoint,
    RawRatePoint, SmoothedPoint, SourceStats, ValueChange, Window,
};
