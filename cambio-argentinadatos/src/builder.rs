use std::time::Duration;

use cambio_core::CambioError;
use url::Url;

use crate::ArgentinaDatosConnector;
use crate::adapter::RealAdapter;

/// Public API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.argentinadatos.com/v1";
/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("cambio/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ArgentinaDatosConnector`].
///
/// Timeouts live here rather than in the orchestrator: a stalled request
/// fails with a `Connector` error after `timeout`.
#[derive(Debug, Clone)]
pub struct ArgentinaDatosBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ArgentinaDatosBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ArgentinaDatosBuilder {
    /// Point the connector at another API root (mirrors, local test servers).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable base URL or a zero timeout, and
    /// `Other` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ArgentinaDatosConnector, CambioError> {
        if self.timeout.is_zero() {
            return Err(CambioError::InvalidArg("timeout must be non-zero".into()));
        }
        let base = parse_base_url(&self.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| CambioError::Other(e.to_string()))?;
        Ok(ArgentinaDatosConnector::from_adapter(&RealAdapter::new(
            http, base,
        )))
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, CambioError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CambioError::InvalidArg(format!("invalid base url {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(CambioError::InvalidArg(format!(
            "base url cannot carry a path: {raw:?}"
        )));
    }
    Ok(url)
}

impl ArgentinaDatosConnector {
    /// Returns a builder preconfigured for the public API.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn builder() -> ArgentinaDatosBuilder {
        ArgentinaDatosBuilder::default()
    }

    /// Connector for the public API with default settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, CambioError> {
        Self::builder().build()
    }
}
