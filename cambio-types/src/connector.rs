//! Naming of registered data sources.

use core::fmt;

/// Name under which a data source is registered with the orchestrator.
///
/// Used to pin the exchange-rate or price-index series to one source when
/// several registered sources could serve it. The key is compared against
/// `CambioConnector::name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(&'static str);

impl ConnectorKey {
    /// Key for the source registered as `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The registered source name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// True when this key names the source registered as `name`.
    #[must_use]
    pub fn names(self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
