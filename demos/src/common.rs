use std::sync::Arc;

use cambio_core::{CambioConnector, CambioError};

/// Return a connector for demos.
///
/// Uses the offline mock when `CAMBIO_DEMOS_USE_MOCK` is set (CI), otherwise
/// the public ArgentinaDatos API.
///
/// # Errors
/// Returns an error if the HTTP connector cannot be constructed.
pub fn get_connector() -> Result<Arc<dyn CambioConnector>, CambioError> {
    if std::env::var("CAMBIO_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(cambio_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(
            cambio_argentinadatos::ArgentinaDatosConnector::new_default()?,
        ))
    }
}
