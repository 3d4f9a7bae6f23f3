use std::time::Duration;

use cambio_argentinadatos::ArgentinaDatosConnector;
use cambio_core::connector::{CambioConnector, IndexProvider, RateProvider};
use cambio_core::{CambioError, build_daily_series};
use httpmock::prelude::*;
use serde_json::json;

fn connector(server: &MockServer) -> ArgentinaDatosConnector {
    ArgentinaDatosConnector::builder()
        .base_url(server.url("/v1"))
        .timeout(Duration::from_secs(2))
        .build()
        .expect("connector builds")
}

#[tokio::test]
async fn rates_are_fetched_from_the_bolsa_endpoint() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/cotizaciones/dolares/bolsa");
            then.status(200).json_body(json!([
                {"casa": "bolsa", "compra": 1000.0, "venta": 1010.0, "fecha": "2024-01-02"},
                {"casa": "bolsa", "compra": 1005.0, "venta": 1015.0, "fecha": "2024-01-03"}
            ]));
        })
        .await;

    let got = connector(&server).rates().await.expect("rates ok");
    m.assert_async().await;
    assert_eq!(got.len(), 2);
    assert_eq!(got[1].date.as_deref(), Some("2024-01-03"));
    assert_eq!(got[1].sell, Some(1015.0));
}

#[tokio::test]
async fn index_is_fetched_from_the_uva_endpoint() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finanzas/indices/uva");
            then.status(200)
                .json_body(json!([{"fecha": "2024-01-02", "valor": 467.92}]));
        })
        .await;

    let got = connector(&server).index().await.expect("index ok");
    m.assert_async().await;
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].value, Some(467.92));
}

#[tokio::test]
async fn non_array_body_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finanzas/indices/uva");
            then.status(200).json_body(json!({"message": "maintenance"}));
        })
        .await;

    let err = connector(&server).index().await.unwrap_err();
    assert!(matches!(err, CambioError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_endpoint_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/cotizaciones/dolares/bolsa");
            then.status(404);
        })
        .await;

    let err = connector(&server).rates().await.unwrap_err();
    assert!(matches!(err, CambioError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_tagged_with_connector_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/cotizaciones/dolares/bolsa");
            then.status(503);
        })
        .await;

    match connector(&server).rates().await.unwrap_err() {
        CambioError::Connector { connector, msg } => {
            assert_eq!(connector, "cambio-argentinadatos");
            assert!(msg.contains("503"), "msg = {msg}");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_in_the_connector() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finanzas/indices/uva");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!([]));
        })
        .await;

    let slow = ArgentinaDatosConnector::builder()
        .base_url(server.url("/v1"))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    match slow.index().await.unwrap_err() {
        CambioError::Connector { msg, .. } => assert!(msg.starts_with("timeout"), "msg = {msg}"),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_entries_survive_decoding_and_are_counted_downstream() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/cotizaciones/dolares/bolsa");
            then.status(200).json_body(json!([
                {"casa": "bolsa", "venta": 800.0, "fecha": "2024-01-01"},
                {"casa": "bolsa", "venta": null, "fecha": "2024-01-02"},
                {"casa": "bolsa", "venta": 820.0, "fecha": "2024-01-03"}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finanzas/indices/uva");
            then.status(200).json_body(json!([
                {"fecha": "2024-01-01", "valor": 100.0},
                {"fecha": "2024-01-03", "valor": 100.0},
                {"fecha": "garbage", "valor": 100.0}
            ]));
        })
        .await;

    let c = connector(&server);
    let rates = c.as_rate_provider().unwrap().rates().await.unwrap();
    let index = c.as_index_provider().unwrap().index().await.unwrap();
    assert_eq!((rates.len(), index.len()), (3, 3));

    let series = build_daily_series(&rates, &index);
    assert_eq!(series.report.rates.dropped, 1);
    assert_eq!(series.report.index.dropped, 1);
    assert_eq!(series.len(), 3);
    assert!((series.points[1].rate_value - 810.0).abs() < 1e-9);
}
