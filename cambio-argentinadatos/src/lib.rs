//! cambio-argentinadatos
//!
//! Public connector that implements `CambioConnector` on top of the public
//! ArgentinaDatos REST API. Serves the "bolsa" exchange rate and the UVA
//! price index.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Builder for the production connector.
pub mod builder;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{AdIndex, AdRates, RealAdapter};
use async_trait::async_trait;
use cambio_core::connector::{CambioConnector, ConnectorKey, IndexProvider, RateProvider};
use cambio_core::{CambioError, RawIndexPoint, RawRatePoint};

pub use builder::ArgentinaDatosBuilder;

pub(crate) const NAME: &str = "cambio-argentinadatos";

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type RatesAdapter = Arc<dyn AdRates>;
#[cfg(not(feature = "test-adapters"))]
type RatesAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type IndexAdapter = Arc<dyn AdIndex>;
#[cfg(not(feature = "test-adapters"))]
type IndexAdapter = AdapterArc;

/// Public connector type. Production users will construct with `ArgentinaDatosConnector::builder()`.
pub struct ArgentinaDatosConnector {
    rates: RatesAdapter,
    index: IndexAdapter,
}

impl ArgentinaDatosConnector {
    /// Static connector key for pinning capabilities in the orchestrator.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    fn normalize_error(e: CambioError) -> CambioError {
        match e {
            CambioError::Other(msg) => CambioError::connector(NAME, msg),
            CambioError::Connector { connector, msg } if connector != NAME => {
                CambioError::connector(NAME, format!("{connector}: {msg}"))
            }
            other => other,
        }
    }

    /// Build from a provided `reqwest::Client` and an API base URL.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` does not parse or cannot carry a path.
    pub fn try_new_with_reqwest_client(
        http: reqwest::Client,
        base_url: &str,
    ) -> Result<Self, CambioError> {
        let base = builder::parse_base_url(base_url)?;
        Ok(Self::from_adapter(&RealAdapter::new(http, base)))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            rates: adapter.clone_arc_rates(),
            index: adapter.clone_arc_index(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            rates: Arc::clone(&shared),
            index: shared,
        }
    }
}

impl CambioConnector for ArgentinaDatosConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "ArgentinaDatos"
    }

    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        Some(self as &dyn RateProvider)
    }

    fn as_index_provider(&self) -> Option<&dyn IndexProvider> {
        Some(self as &dyn IndexProvider)
    }
}

#[async_trait]
impl RateProvider for ArgentinaDatosConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio_argentinadatos::rates", skip(self), err)
    )]
    async fn rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
        self.rates.fetch_rates().await.map_err(Self::normalize_error)
    }
}

#[async_trait]
impl IndexProvider for ArgentinaDatosConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio_argentinadatos::index", skip(self), err)
    )]
    async fn index(&self) -> Result<Vec<RawIndexPoint>, CambioError> {
        self.index.fetch_index().await.map_err(Self::normalize_error)
    }
}
