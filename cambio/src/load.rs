use chrono::NaiveDate;

use cambio_core::{CambioError, DailyPoint, DailySeries, SmoothedPoint, build_daily_series};

use crate::core::{Cambio, tag_err};

impl Cambio {
    /// Fetch both series concurrently and build the daily adjusted series.
    ///
    /// Behavior and trade-offs:
    /// - The two fetches run concurrently and are joined at a single point;
    ///   the pipeline starts only once both have completed.
    /// - The first failure aborts the load: the other fetch is dropped and no
    ///   partial series is returned.
    /// - No timeout is applied here; connectors bound their own requests.
    /// - Every call starts from fresh data. Nothing is cached between loads.
    ///
    /// # Errors
    /// Returns the first fetch error, tagged with the connector that produced it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::load",
            skip(self),
            fields(rates = self.rates.name(), index = self.index.name()),
        )
    )]
    pub async fn load(&self) -> Result<DailySeries, CambioError> {
        let rates = async {
            let provider = self
                .rates
                .as_rate_provider()
                .ok_or_else(|| CambioError::unsupported("rates"))?;
            let rows = provider
                .rates()
                .await
                .map_err(|e| tag_err(self.rates.name(), e))?;
            Ok::<_, CambioError>(rows)
        };
        let index = async {
            let provider = self
                .index
                .as_index_provider()
                .ok_or_else(|| CambioError::unsupported("index"))?;
            let rows = provider
                .index()
                .await
                .map_err(|e| tag_err(self.index.name(), e))?;
            Ok::<_, CambioError>(rows)
        };

        let (rates, index) = match futures::future::try_join(rates, index).await {
            Ok(both) => both,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "load aborted; no series published");
                return Err(e);
            }
        };

        let series = build_daily_series(&rates, &index);
        #[cfg(feature = "tracing")]
        tracing::info!(
            days = series.len(),
            dropped = series.report.dropped(),
            "daily series ready"
        );
        Ok(series)
    }

    /// Trailing slice of `series` for the configured default window.
    #[must_use]
    pub fn default_view<'a>(
        &self,
        series: &'a DailySeries,
        today: NaiveDate,
    ) -> &'a [DailyPoint] {
        series.window(self.cfg.default_window, today)
    }

    /// `series` paired with its moving average over the configured period.
    ///
    /// # Errors
    /// Never fails for an orchestrator built through [`crate::CambioBuilder`],
    /// which rejects a zero period.
    pub fn default_smoothing(
        &self,
        series: &DailySeries,
    ) -> Result<Vec<SmoothedPoint>, CambioError> {
        series.smoothed(self.cfg.moving_average_period)
    }
}
