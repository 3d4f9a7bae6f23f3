use core::fmt;
use serde::{Deserialize, Serialize};

/// The two series a connector can serve; used for discovery, errors, and telemetry.
///
/// Exhaustive; downstream crates match on it without a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Daily exchange-rate quotes.
    Rates,
    /// Daily price-index readings.
    Index,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rates => "rates",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
