use async_trait::async_trait;
use cambio_core::connector::{CambioConnector, ConnectorKey, RateProvider};
use cambio_core::{CambioError, RawRatePoint};

struct RatesOnly;

impl CambioConnector for RatesOnly {
    fn name(&self) -> &'static str {
        "rates-only"
    }

    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        Some(self as &dyn RateProvider)
    }
}

#[async_trait]
impl RateProvider for RatesOnly {
    async fn rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
        Ok(vec![RawRatePoint::new("2024-01-01", 1.0)])
    }
}

#[tokio::test]
async fn capabilities_default_to_absent() {
    let c = RatesOnly;
    assert_eq!(c.key(), ConnectorKey::new("rates-only"));
    assert_eq!(c.vendor(), "unknown");
    assert!(c.as_index_provider().is_none());

    let rates = c.as_rate_provider().expect("rates").rates().await.unwrap();
    assert_eq!(rates.len(), 1);
}
