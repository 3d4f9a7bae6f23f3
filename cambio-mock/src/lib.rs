//! cambio-mock
//!
//! Deterministic connectors for tests and demos.
//!
//! - [`MockConnector`] serves a fixed two-and-a-half-week history of both
//!   series, including a few malformed entries, and can be told to fail one
//!   capability or to respond slowly.
//! - [`DynamicMockConnector`] defers every call to a [`DynamicMockController`]
//!   so tests can script returns, failures, and hangs per capability.
use std::time::Duration;

use async_trait::async_trait;
use cambio_core::connector::{CambioConnector, IndexProvider, RateProvider};
use cambio_core::{CambioError, Capability, RawIndexPoint, RawRatePoint};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

const NAME: &str = "cambio-mock";

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    rates: Option<Vec<RawRatePoint>>,
    index: Option<Vec<RawIndexPoint>>,
    fail: Option<Capability>,
    delay: Option<Duration>,
}

impl MockConnector {
    /// Connector serving the built-in fixtures.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rates: None,
            index: None,
            fail: None,
            delay: None,
        }
    }

    /// Replace the exchange-rate fixture with `rates`.
    #[must_use]
    pub fn with_rates(mut self, rates: Vec<RawRatePoint>) -> Self {
        self.rates = Some(rates);
        self
    }

    /// Replace the price-index fixture with `index`.
    #[must_use]
    pub fn with_index(mut self, index: Vec<RawIndexPoint>) -> Self {
        self.index = Some(index);
        self
    }

    /// Make every call for `capability` fail with a connector error.
    #[must_use]
    pub const fn failing(mut self, capability: Capability) -> Self {
        self.fail = Some(capability);
        self
    }

    /// Sleep for `delay` before answering any call.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The built-in exchange-rate fixture, malformed rows included.
    #[must_use]
    pub fn fixture_rates() -> Vec<RawRatePoint> {
        fixtures::rates::all()
    }

    /// The built-in price-index fixture, malformed rows included.
    #[must_use]
    pub fn fixture_index() -> Vec<RawIndexPoint> {
        fixtures::index::all()
    }

    async fn maybe_fail_or_wait(&self, capability: Capability) -> Result<(), CambioError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail == Some(capability) {
            return Err(CambioError::connector(
                NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl CambioConnector for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        Some(self as &dyn RateProvider)
    }

    fn as_index_provider(&self) -> Option<&dyn IndexProvider> {
        Some(self as &dyn IndexProvider)
    }
}

#[async_trait]
impl RateProvider for MockConnector {
    async fn rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
        self.maybe_fail_or_wait(Capability::Rates).await?;
        Ok(self.rates.clone().unwrap_or_else(fixtures::rates::all))
    }
}

#[async_trait]
impl IndexProvider for MockConnector {
    async fn index(&self) -> Result<Vec<RawIndexPoint>, CambioError> {
        self.maybe_fail_or_wait(Capability::Index).await?;
        Ok(self.index.clone().unwrap_or_else(fixtures::index::all))
    }
}
