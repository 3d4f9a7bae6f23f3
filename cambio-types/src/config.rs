//! Configuration shared by the orchestrator and its callers.

use serde::{Deserialize, Serialize};

use crate::Window;

/// Global configuration for the `Cambio` orchestrator.
///
/// Retrieval timeouts are deliberately absent; they are configured on the
/// connectors that perform the network calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CambioConfig {
    /// Lookback window used by views that do not name one explicitly.
    pub default_window: Window,
    /// Trailing window (in points) for the moving average view.
    pub moving_average_period: usize,
}

impl CambioConfig {
    /// Moving-average periods offered to users, shortest first.
    pub const SMA_PRESETS: [usize; 4] = [5, 10, 20, 50];
}

impl Default for CambioConfig {
    fn default() -> Self {
        Self {
            default_window: Window::Y5,
            moving_average_period: Self::SMA_PRESETS[0],
        }
    }
}
