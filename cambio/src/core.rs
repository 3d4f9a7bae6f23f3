use std::sync::Arc;

use cambio_core::connector::ConnectorKey;
use cambio_core::{CambioConnector, CambioError, Capability};
use cambio_types::{CambioConfig, Window};

/// Orchestrator that fetches both source series and runs the daily pipeline.
pub struct Cambio {
    pub(crate) rates: Arc<dyn CambioConnector>,
    pub(crate) index: Arc<dyn CambioConnector>,
    pub(crate) cfg: CambioConfig,
}

/// Builder for constructing a `Cambio` orchestrator with custom configuration.
pub struct CambioBuilder {
    connectors: Vec<Arc<dyn CambioConnector>>,
    rates_from: Option<ConnectorKey>,
    index_from: Option<ConnectorKey>,
    cfg: CambioConfig,
}

impl Default for CambioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CambioBuilder {
    /// Create a new builder with default settings.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via [`with_connector`].
    /// - Defaults match the interactive chart: a five-year view and a 5-day
    ///   moving average.
    ///
    /// [`with_connector`]: CambioBuilder::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            rates_from: None,
            index_from: None,
            cfg: CambioConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Each capability is served by the first registered connector offering
    ///   it, unless pinned with [`rates_from`] or [`index_from`].
    /// - Duplicates are not deduplicated; avoid registering the same connector twice.
    ///
    /// [`rates_from`]: CambioBuilder::rates_from
    /// [`index_from`]: CambioBuilder::index_from
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CambioConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Pin the exchange-rate series to the connector registered under `key`.
    #[must_use]
    pub const fn rates_from(mut self, key: ConnectorKey) -> Self {
        self.rates_from = Some(key);
        self
    }

    /// Pin the price-index series to the connector registered under `key`.
    #[must_use]
    pub const fn index_from(mut self, key: ConnectorKey) -> Self {
        self.index_from = Some(key);
        self
    }

    /// Window used by [`Cambio::default_view`].
    #[must_use]
    pub const fn default_window(mut self, window: Window) -> Self {
        self.cfg.default_window = window;
        self
    }

    /// Period used by [`Cambio::default_smoothing`]. Must be positive.
    #[must_use]
    pub const fn moving_average_period(mut self, period: usize) -> Self {
        self.cfg.moving_average_period = period;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub const fn config(mut self, cfg: CambioConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Cambio` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no connectors are registered, a pinned key names no
    ///   registered connector, or the moving-average period is zero.
    /// - `Unsupported` if no suitable connector serves one of the two series.
    pub fn build(self) -> Result<Cambio, CambioError> {
        if self.connectors.is_empty() {
            return Err(CambioError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.moving_average_period == 0 {
            return Err(CambioError::InvalidArg(
                "moving average period must be positive".to_string(),
            ));
        }

        let rates = resolve(&self.connectors, Capability::Rates, self.rates_from, |c| {
            c.as_rate_provider().is_some()
        })?;
        let index = resolve(&self.connectors, Capability::Index, self.index_from, |c| {
            c.as_index_provider().is_some()
        })?;

        Ok(Cambio {
            rates,
            index,
            cfg: self.cfg,
        })
    }
}

fn resolve(
    connectors: &[Arc<dyn CambioConnector>],
    capability: Capability,
    pinned: Option<ConnectorKey>,
    serves: impl Fn(&dyn CambioConnector) -> bool,
) -> Result<Arc<dyn CambioConnector>, CambioError> {
    let found = match pinned {
        Some(key) => {
            let c = connectors
                .iter()
                .find(|c| key.names(c.name()))
                .ok_or_else(|| {
                    CambioError::InvalidArg(format!(
                        "{capability} pinned to unregistered connector {key}"
                    ))
                })?;
            serves(c.as_ref()).then_some(c)
        }
        None => connectors.iter().find(|c| serves(c.as_ref())),
    };
    found
        .cloned()
        .ok_or_else(|| CambioError::unsupported(capability.as_str()))
}

/// Attribute a fetch failure to the connector that produced it.
///
/// Errors that already identify their origin pass through; payload problems
/// keep their kind with the connector name prefixed.
pub fn tag_err(connector: &str, e: CambioError) -> CambioError {
    match e {
        e @ (CambioError::NotFound { .. } | CambioError::Connector { .. }) => e,
        CambioError::Data(msg) => CambioError::Data(format!("{connector}: {msg}")),
        other => CambioError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Cambio {
    /// Start building a new `Cambio` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use cambio_argentinadatos::ArgentinaDatosConnector;
    ///
    /// let ad = Arc::new(ArgentinaDatosConnector::new_default()?);
    /// let cambio = cambio::Cambio::builder()
    ///     .with_connector(ad)
    ///     .default_window(cambio::Window::Y1)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CambioBuilder {
        CambioBuilder::new()
    }

    /// The configuration this orchestrator was built with.
    #[must_use]
    pub const fn config(&self) -> &CambioConfig {
        &self.cfg
    }

    /// Names of the connectors serving the exchange-rate and price-index series.
    #[must_use]
    pub fn sources(&self) -> (&'static str, &'static str) {
        (self.rates.name(), self.index.name())
    }
}
