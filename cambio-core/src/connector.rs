use async_trait::async_trait;

use crate::{CambioError, RawIndexPoint, RawRatePoint};
pub use cambio_types::ConnectorKey;

/// Focused role trait for connectors that provide daily exchange-rate quotes.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the full exchange-rate history.
    ///
    /// Implementations return every entry the source reported, including
    /// malformed ones; validation happens in the normalizer. A response that
    /// is not a list of entries must be reported as an error.
    async fn rates(&self) -> Result<Vec<RawRatePoint>, CambioError>;
}

/// Focused role trait for connectors that provide daily price-index readings.
#[async_trait]
pub trait IndexProvider: Send + Sync {
    /// Fetch the full price-index history.
    async fn index(&self) -> Result<Vec<RawIndexPoint>, CambioError>;
}

/// Main connector trait implemented by data sources.
///
/// Capabilities are discovered through the `as_*_provider` accessors; a
/// connector may serve one or both series.
pub trait CambioConnector: Send + Sync {
    /// A stable identifier used in errors and logs (e.g. "cambio-argentinadatos").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise exchange-rate capability by returning a usable trait object reference when supported.
    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        None
    }

    /// Advertise price-index capability by returning a usable trait object reference when supported.
    fn as_index_provider(&self) -> Option<&dyn IndexProvider> {
        None
    }
}
