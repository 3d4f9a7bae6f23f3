//! Cambio-specific data transfer objects and configuration primitives.
//!
//! Every crate in the workspace speaks these types: connectors produce the raw
//! points, the engine in `cambio-core` turns them into [`DailyPoint`] series,
//! and the orchestrator reports through [`ImportReport`] and [`CambioError`].
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod points;
mod reports;
mod window;

pub use capability::Capability;
pub use config::CambioConfig;
pub use connector::ConnectorKey;
pub use error::CambioError;
pub use points::{DailyPoint, RawIndexPoint, RawRatePoint};
pub use reports::{ImportReport, SourceStats};
pub use window::{ParseWindowError, Window};
