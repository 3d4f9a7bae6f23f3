//! Report envelopes produced by the normalizer and the orchestrator.

use serde::{Deserialize, Serialize};

/// Outcome of validating one raw source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceStats {
    /// Entries that passed validation (before duplicate dates collapse).
    pub kept: usize,
    /// Entries rejected for a missing/unparseable date or a non-positive value.
    pub dropped: usize,
}

impl SourceStats {
    /// Total entries seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.kept + self.dropped
    }
}

/// Summary of a full import of both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportReport {
    /// Exchange-rate source.
    pub rates: SourceStats,
    /// Price-index source.
    pub index: SourceStats,
}

impl ImportReport {
    /// Total entries dropped across both sources.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.rates.dropped + self.index.dropped
    }
}
