//! Named lookback windows over a daily series.

use core::fmt;
use core::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named trailing window used to select the tail of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Window {
    /// One month.
    #[serde(rename = "1M")]
    M1,
    /// Three months.
    #[serde(rename = "3M")]
    M3,
    /// Six months.
    #[serde(rename = "6M")]
    M6,
    /// One year.
    #[serde(rename = "1Y")]
    Y1,
    /// Two years.
    #[serde(rename = "2Y")]
    Y2,
    /// Five years.
    #[serde(rename = "5Y")]
    Y5,
    /// The whole series.
    #[default]
    #[serde(rename = "ALL")]
    All,
}

/// Returned by [`Window::from_str`] for tokens outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window token: {0:?}")]
pub struct ParseWindowError(pub String);

impl Window {
    /// Every window, narrowest first.
    pub const ALL_WINDOWS: [Self; 7] = [
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Y2,
        Self::Y5,
        Self::All,
    ];

    /// Token as shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1M",
            Self::M3 => "3M",
            Self::M6 => "6M",
            Self::Y1 => "1Y",
            Self::Y2 => "2Y",
            Self::Y5 => "5Y",
            Self::All => "ALL",
        }
    }

    /// Parse a token, mapping anything unrecognized to [`Window::All`].
    #[must_use]
    pub fn parse_lenient(token: &str) -> Self {
        token.parse().unwrap_or(Self::All)
    }

    /// Lookback length in months, or `None` for [`Window::All`].
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::M1 => Some(1),
            Self::M3 => Some(3),
            Self::M6 => Some(6),
            Self::Y1 => Some(12),
            Self::Y2 => Some(24),
            Self::Y5 => Some(60),
            Self::All => None,
        }
    }

    /// First day included by this window when evaluated on `today`.
    ///
    /// Month arithmetic clamps to the last valid day (March 31 minus one month
    /// is February 28/29). Returns `None` when the window has no lower bound.
    #[must_use]
    pub fn start_boundary(self, today: NaiveDate) -> Option<NaiveDate> {
        self.months()
            .and_then(|m| today.checked_sub_months(Months::new(m)))
    }
}

impl FromStr for Window {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL_WINDOWS
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseWindowError(s.to_string()))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
