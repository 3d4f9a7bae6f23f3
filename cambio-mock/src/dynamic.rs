use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cambio_core::connector::{CambioConnector, IndexProvider, RateProvider};
use cambio_core::{CambioError, Capability, RawIndexPoint, RawRatePoint};

/// Instruction for how a method should behave on its next calls.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CambioError),
    /// Hang indefinitely (simulate a stalled source).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rates_rule: Option<MockBehavior<Vec<RawRatePoint>>>,
    index_rule: Option<MockBehavior<Vec<RawIndexPoint>>>,
    rate_calls: usize,
    index_calls: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `rates` calls.
    pub async fn set_rates_behavior(&self, behavior: MockBehavior<Vec<RawRatePoint>>) {
        let mut guard = self.state.lock().await;
        guard.rates_rule = Some(behavior);
    }

    /// Set the behavior for `index` calls.
    pub async fn set_index_behavior(&self, behavior: MockBehavior<Vec<RawIndexPoint>>) {
        let mut guard = self.state.lock().await;
        guard.index_rule = Some(behavior);
    }

    /// Number of calls received so far for `capability`.
    pub async fn calls(&self, capability: Capability) -> usize {
        let guard = self.state.lock().await;
        match capability {
            Capability::Rates => guard.rate_calls,
            Capability::Index => guard.index_calls,
        }
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Capabilities without a configured behavior answer `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CambioConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn CambioConnector>, controller)
    }
}

async fn resolve<T>(
    behavior: Option<MockBehavior<T>>,
    capability: Capability,
) -> Result<T, CambioError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(CambioError::unsupported(capability.as_str())),
    }
}

impl CambioConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        Some(self as &dyn RateProvider)
    }

    fn as_index_provider(&self) -> Option<&dyn IndexProvider> {
        Some(self as &dyn IndexProvider)
    }
}

#[async_trait]
impl RateProvider for DynamicMockConnector {
    async fn rates(&self) -> Result<Vec<RawRatePoint>, CambioError> {
        // Snapshot the rule without holding the lock across the await below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.rate_calls += 1;
            guard.rates_rule.clone()
        };
        resolve(behavior, Capability::Rates).await
    }
}

#[async_trait]
impl IndexProvider for DynamicMockConnector {
    async fn index(&self) -> Result<Vec<RawIndexPoint>, CambioError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.index_calls += 1;
            guard.index_rule.clone()
        };
        resolve(behavior, Capability::Index).await
    }
}
