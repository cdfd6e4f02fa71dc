//! Integration tests for `DocumentClient` using wiremock HTTP mocks.

use plumbsite_data::{DocumentClient, FetchError, FetchOutcome};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DocumentClient {
    DocumentClient::new(base_url, 5, "plumbsite-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_document_returns_json_body() {
    let server = MockServer::start().await;
    let body = json!({"basic_info": {"name": "Acme Plumbing"}});

    Mock::given(method("GET"))
        .and(path("/businesses/acme.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/businesses", server.uri()));
    let outcome = client.fetch_document("acme").await.expect("fetch");
    assert_eq!(outcome, FetchOutcome::Found(body));
}

#[tokio::test]
async fn fetch_document_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/businesses", server.uri()));
    let outcome = client.fetch_document("missing").await.expect("404 is not an error");
    assert_eq!(outcome, FetchOutcome::NotFound);
}

#[tokio::test]
async fn fetch_document_reports_other_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_document("acme").await.unwrap_err();
    assert!(
        matches!(err, FetchError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got {err:?}"
    );
}

#[tokio::test]
async fn fetch_document_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_document("acme").await.unwrap_err();
    assert!(matches!(err, FetchError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn fetch_document_surfaces_transport_errors() {
    // Nothing listens on port 1.
    let uri = "http://127.0.0.1:1";

    let client = test_client(uri);
    let err = client.fetch_document("acme").await.unwrap_err();
    assert!(matches!(err, FetchError::Http(_)), "got {err:?}");
}
