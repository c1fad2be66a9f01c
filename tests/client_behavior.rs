//! Behavior-driven tests for the data access client.
//!
//! All traffic goes through a scripted in-memory transport, so these tests
//! describe what the client sends and how it interprets what comes back.

mod support;

use std::sync::Arc;

use jstdata_core::{
    Client, ClientConfig, ClientError, CountriesRequest, HttpClient, MetricsRequest,
    ObservationsRequest, Ordering, Page, SeriesRequest, Value,
};
use support::ScriptedHttpClient;

const BASE_URL: &str = "https://api.example.test";

fn config() -> ClientConfig {
    ClientConfig::new("test-key").with_base_url(BASE_URL)
}

fn client_over(http: &Arc<ScriptedHttpClient>) -> Client {
    let transport: Arc<dyn HttpClient> = http.clone();
    Client::new(config(), transport).expect("credential present")
}

// =============================================================================
// Construction and credentials
// =============================================================================

#[test]
fn constructing_without_a_credential_fails() {
    // Given: no API key was configured
    let http = ScriptedHttpClient::new();

    // When: the client is built
    let result = Client::new(ClientConfig::default(), http.clone());

    // Then: construction fails before any request is sent
    assert!(matches!(result, Err(ClientError::CredentialMissing)));
    assert!(http.requests().is_empty());
}

#[test]
fn blank_credential_counts_as_missing() {
    let result = Client::new(ClientConfig::new("   "), ScriptedHttpClient::new());
    assert!(matches!(result, Err(ClientError::CredentialMissing)));
}

#[tokio::test]
async fn reqwest_connect_checks_the_credential_before_any_request() {
    let result = Client::connect_with_reqwest(
        ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_credential_check(true),
    )
    .await;

    assert!(matches!(result, Err(ClientError::CredentialMissing)));
}

#[tokio::test]
async fn connect_skips_heartbeat_unless_asked() {
    let http = ScriptedHttpClient::new();

    let client = Client::connect(config(), http.clone()).await;

    assert!(client.is_ok());
    assert!(http.requests().is_empty(), "no liveness call by default");
}

#[tokio::test]
async fn connect_with_verification_accepts_ok_heartbeat() {
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"status":"ok"}"#);

    Client::connect(config().with_credential_check(true), http.clone())
        .await
        .expect("heartbeat ok");

    let request = http.last_request();
    assert_eq!(request.url, format!("{BASE_URL}/heartbeat"));
    assert_eq!(request.query_value("api-key"), Some("test-key"));
}

#[tokio::test]
async fn connect_with_verification_rejects_non_ok_heartbeat() {
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"status":"invalid key"}"#);

    let error = Client::connect(config().with_credential_check(true), http.clone())
        .await
        .expect_err("non-ok status");

    match error {
        ClientError::InvalidCredential { status } => assert_eq!(status, "invalid key"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_heartbeat_is_an_invalid_credential() {
    let http = ScriptedHttpClient::new();
    http.respond(401, "unauthorized");

    let error = client_over(&http).heartbeat().await.expect_err("401");

    assert!(matches!(error, ClientError::InvalidCredential { .. }));
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn every_request_carries_the_api_key_and_forwarded_params() {
    // Given: a metrics listing with explicit paging and ordering
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"records":[]}"#);
    let request = MetricsRequest {
        page: Page::new(2, 0),
        ordering: Ordering::new("last_updated", "desc"),
    };

    // When: the client lists metrics
    client_over(&http).metrics(&request).await.expect("ok");

    // Then: the GET targets the metric endpoint with verbatim params
    let sent = http.last_request();
    assert_eq!(sent.url, format!("{BASE_URL}/metric"));
    assert_eq!(sent.query_value("limit"), Some("2"));
    assert_eq!(sent.query_value("offset"), Some("0"));
    assert_eq!(sent.query_value("order_by"), Some("last_updated"));
    assert_eq!(sent.query_value("sort_order"), Some("desc"));
    assert_eq!(sent.query_value("api-key"), Some("test-key"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"records":[]}"#);
    let client = Client::new(
        ClientConfig::new("test-key").with_base_url("https://api.example.test/"),
        http.clone(),
    )
    .expect("credential present");

    client
        .countries(&CountriesRequest::default())
        .await
        .expect("ok");

    assert_eq!(
        http.last_request().url,
        "https://api.example.test/reference/geo/countries"
    );
}

#[tokio::test]
async fn observations_send_each_series_and_normalized_dates() {
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"records":[]}"#);
    let request = ObservationsRequest::new(["US.GDP", "DE.GDP"])
        .with_start("2020")
        .expect("valid start");

    client_over(&http).observations(&request).await.expect("ok");

    let sent = http.last_request();
    assert_eq!(sent.url, format!("{BASE_URL}/metric/observations"));
    let series: Vec<&str> = sent
        .query
        .iter()
        .filter(|(name, _)| name == "series")
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(series, vec!["US.GDP", "DE.GDP"]);
    assert_eq!(sent.query_value("start"), Some("2020-01-01"));
    assert_eq!(sent.query_value("end"), None);
}

#[tokio::test]
async fn metric_show_and_dimensions_pass_the_slug() {
    let http = ScriptedHttpClient::new();
    http.respond(200, r#"{"records":[{"slug":"gdp"}]}"#)
        .respond(200, r#"{"records":[{"geography":"US"}]}"#);
    let client = client_over(&http);

    client.metric("gdp").await.expect("ok");
    client.metric_dimensions("gdp").await.expect("ok");

    let requests = http.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/metric"));
    assert_eq!(requests[1].url, format!("{BASE_URL}/metric/dimensions"));
    assert!(requests.iter().all(|r| r.query_value("metric") == Some("gdp")));
}

// =============================================================================
// Response handling
// =============================================================================

#[tokio::test]
async fn metrics_are_returned_in_provider_order() {
    // Given: the provider returns two metrics, deliberately not alphabetical
    let http = ScriptedHttpClient::new();
    http.respond(
        200,
        r#"{"records":[
            {"slug":"unemployment","last_updated":"2024-05-13T00:00:00Z"},
            {"slug":"cpi","last_updated":"2024-05-01T00:00:00Z"}
        ],"limit":2,"offset":0}"#,
    );
    let request = MetricsRequest {
        page: Page::new(2, 0),
        ordering: Ordering::new("last_updated", "desc"),
    };

    // When: the caller lists metrics with limit=2, offset=0, sort_order=desc
    let metrics = client_over(&http).metrics(&request).await.expect("ok");

    // Then: records are exactly as returned, unsorted locally
    let slugs: Vec<&str> = metrics
        .iter()
        .filter_map(|record| record.get("slug").and_then(Value::as_str))
        .collect();
    assert_eq!(slugs, vec!["unemployment", "cpi"]);

    // And: the pagination echo is the requested page
    assert_eq!(metrics.limit, Some(2));
    assert_eq!(metrics.offset, Some(0));
}

#[tokio::test]
async fn not_found_series_is_invalid_input_with_status() {
    // Given: the provider does not know the metric
    let http = ScriptedHttpClient::new();
    http.respond(404, r#"{"detail":"metric not found"}"#);

    // When: series for that metric are requested
    let error = client_over(&http)
        .metric_series(&SeriesRequest::new("no-such-metric"))
        .await
        .expect_err("404");

    // Then: the error names the endpoint and wraps the status
    match &error {
        ClientError::InvalidInput {
            endpoint, status, ..
        } => {
            assert_eq!(*endpoint, "metric/series");
            assert_eq!(*status, 404);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn server_errors_are_invalid_input_too() {
    let http = ScriptedHttpClient::new();
    http.respond(503, "maintenance");

    let error = client_over(&http)
        .countries(&CountriesRequest::default())
        .await
        .expect_err("503");

    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn missing_response_is_a_transport_error() {
    let http = ScriptedHttpClient::new();
    http.fail("connection refused");

    let error = client_over(&http)
        .metrics(&MetricsRequest::default())
        .await
        .expect_err("no response");

    match error {
        ClientError::Transport { endpoint, source } => {
            assert_eq!(endpoint, "metric");
            assert_eq!(source.message(), "connection refused");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn envelope_without_records_is_malformed() {
    for body in [
        r#"{"data":[]}"#,
        r#"[{"slug":"gdp"}]"#,
        r#"{"records":{"slug":"gdp"}}"#,
        r#"{"records":[1,2]}"#,
        "<html>oops</html>",
    ] {
        let http = ScriptedHttpClient::new();
        http.respond(200, body);

        let error = client_over(&http)
            .metrics(&MetricsRequest::default())
            .await
            .expect_err("malformed envelope");

        assert!(
            matches!(error, ClientError::MalformedResponse { endpoint: "metric", .. }),
            "body {body:?} gave {error:?}"
        );
    }
}

#[tokio::test]
async fn unimplemented_operations_report_not_implemented() {
    let http = ScriptedHttpClient::new();
    let client = client_over(&http);

    let results = [
        client.tickers(Page::default()).await,
        client.financials("AAPL", Page::default()).await,
        client.prices("AAPL", Page::default()).await,
        client.ticker_series_by_concept("AAPL", "Revenues").await,
    ];

    for result in results {
        assert!(matches!(result, Err(ClientError::NotImplemented { .. })));
    }
    assert!(http.requests().is_empty(), "stubs never hit the network");
}
