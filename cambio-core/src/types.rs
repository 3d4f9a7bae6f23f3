//! Re-export of foundational types from `cambio-types`.
// Consolidated re-exports so downstream crates can depend on `cambio-core` only

pub use cambio_types::{CambioConfig, CambioError, Capability, ConnectorKey};
pub use cambio_types::{DailyPoint, RawIndexPoint, RawRatePoint};
pub use cambio_types::{ImportReport, SourceStats};
pub use cambio_types::{ParseWindowError, Window};
