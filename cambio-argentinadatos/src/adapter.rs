#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use cambio_core::{CambioError, RawIndexPoint, RawRatePoint};

/// Path of the exchange-rate endpoint, relative to the API base.
pub const RATES_PATH: &str = "cotizaciones/dolares/bolsa";
/// Path of the price-index endpoint, relative to the API base.
pub const INDEX_PATH: &str = "finanzas/indices/uva";

/// Exchange-rate abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait AdRates: Send + Sync {
    /// Fetch every exchange-rate entry the source publishes.
    async fn fetch_rates(&self) -> Result<Vec<RawRatePoint>, CambioError>;
}

/// Price-index abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait AdIndex: Send + Sync {
    /// Fetch every price-index entry the source publishes.
    async fn fetch_index(&self) -> Result<Vec<RawIndexPoint>, CambioError>;
}

/// Production adapter: a `reqwest` client pointed at an API base URL.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base: Url,
}

impl RealAdapter {
    /// Wrap an existing client and base URL.
    #[must_use]
    pub const fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    /// The base URL every endpoint is resolved against.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` below the base URL, keeping any path prefix the base carries.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL cannot carry a path.
    pub fn endpoint(&self, path: &str) -> Result<Url, CambioError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CambioError::InvalidArg(format!("base url cannot be a base: {}", self.base))
            })?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    async fn get_json(&self, path: &str, context: &str) -> Result<Value, CambioError> {
        let url = self.endpoint(path)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_http_err(&e, context))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(map_status(status, context));
        }
        let body = resp.bytes().await.map_err(|e| map_http_err(&e, context))?;
        serde_json::from_slice(&body)
            .map_err(|e| CambioError::connector(crate::NAME, format!("decode {context}: {e}")))
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> CambioError {
    if e.is_timeout() {
        CambioError::connector(crate::NAME, format!("timeout: {context}"))
    } else if e.is_connect() {
        CambioError::connector(crate::NAME, format!("connect: {context}: {e}"))
    } else {
        CambioError::connector(crate::NAME, format!("{context}: {e}"))
    }
}

fn map_status(status: reqwest::StatusCode, context: &str) -> CambioError {
    if status == reqwest::StatusCode::NOT_FOUND {
        CambioError::not_found(context.to_string())
    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        CambioError::connector(crate::NAME, format!("rate limit: {context}"))
    } else if status.is_server_error() {
        CambioError::connector(crate::NAME, format!("server error {status}: {context}"))
    } else {
        CambioError::connector(crate::NAME, format!("status {status}: {context}"))
    }
}

fn entries<'a>(body: &'a Value, context: &str) -> Result<&'a [Value], CambioError> {
    body.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| {
            CambioError::Data(format!("invalid {context} received: expected a JSON array"))
        })
}

fn text_field(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

// Numbers occasionally arrive quoted; accept both forms.
fn number_field(entry: &Value, key: &str) -> Option<f64> {
    match entry.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode an exchange-rate body: `[{casa, compra, venta, fecha}, ...]`.
///
/// Entries are mapped leniently; a missing or mistyped field becomes `None`
/// and is left for the normalizer to reject. Only the outer shape is checked.
///
/// # Errors
/// Returns `Data` when the body is not a JSON array.
pub fn decode_rates(body: &Value) -> Result<Vec<RawRatePoint>, CambioError> {
    Ok(entries(body, "rate data")?
        .iter()
        .map(|e| RawRatePoint {
            date: text_field(e, "fecha"),
            buy: number_field(e, "compra"),
            sell: number_field(e, "venta"),
            source_id: text_field(e, "casa"),
        })
        .collect())
}

/// Decode a price-index body: `[{fecha, valor}, ...]`.
///
/// # Errors
/// Returns `Data` when the body is not a JSON array.
pub fn decode_index(body: &Value) -> Result<Vec<RawIndexPoint>, CambioError> {
    Ok(entries(body, "index data")?
        .iter()
        .map(|e| RawIndexPoint {
            date: text_field(e, "fecha"),
            value: number_field(e, "valor"),
        })
        .collect())
}

#[async_trait]
impl AdRates for RealAdapter {
    async fn fetch_rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
        let body = self.get_json(RATES_PATH, "rate data").await?;
        decode_rates(&body)
    }
}

#[async_trait]
impl AdIndex for RealAdapter {
    async fn fetch_index(&self) -> Result<Vec<RawIndexPoint>, CambioError> {
        let body = self.get_json(INDEX_PATH, "index data").await?;
        decode_index(&body)
    }
}

#[cfg(feature = "test-adapters")]
impl dyn AdRates {
    /// Build an `AdRates` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn AdRates>
    where
        F: Send + Sync + 'static + Fn() -> Result<Vec<RawRatePoint>, CambioError>,
    {
        struct FnRates<F>(F);
        #[async_trait]
        impl<F> AdRates for FnRates<F>
        where
            F: Send + Sync + 'static + Fn() -> Result<Vec<RawRatePoint>, CambioError>,
        {
            async fn fetch_rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
                (self.0)()
            }
        }
        Arc::new(FnRates(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn AdIndex {
    /// Build an `AdIndex` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn AdIndex>
    where
        F: Send + Sync + 'static + Fn() -> Result<Vec<RawIndexPoint>, CambioError>,
    {
        struct FnIndex<F>(F);
        #[async_trait]
        impl<F> AdIndex for FnIndex<F>
        where
            F: Send + Sync + 'static + Fn() -> Result<Vec<RawIndexPoint>, CambioError>,
        {
            async fn fetch_index(&self) -> Result<Vec<RawIndexPoint>, CambioError> {
                (self.0)()
            }
        }
        Arc::new(FnIndex(f))
    }
}

/// Hand out shared adapter handles; tests override only what they need.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn AdRates>`.
    fn clone_arc_rates(&self) -> Arc<dyn AdRates> {
        <dyn AdRates>::from_fn(|| Err(CambioError::unsupported("rates")))
    }
    /// Clone as `Arc<dyn AdIndex>`.
    fn clone_arc_index(&self) -> Arc<dyn AdIndex> {
        <dyn AdIndex>::from_fn(|| Err(CambioError::unsupported("index")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_rates(&self) -> Arc<dyn AdRates> {
        Arc::new(self.clone()) as Arc<dyn AdRates>
    }
    fn clone_arc_index(&self) -> Arc<dyn AdIndex> {
        Arc::new(self.clone()) as Arc<dyn AdIndex>
    }
}
