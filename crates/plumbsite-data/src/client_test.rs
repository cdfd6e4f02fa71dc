use super::*;

fn test_client(base_url: &str) -> DocumentClient {
    DocumentClient::new(base_url, 5, "plumbsite-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn document_url_appends_site_id_json() {
    let client = test_client("https://raw.example.com/org/repo/main/data/businesses");
    let url = client.document_url("acme-plumbing").unwrap();
    assert_eq!(
        url.as_str(),
        "https://raw.example.com/org/repo/main/data/businesses/acme-plumbing.json"
    );
}

#[test]
fn document_url_tolerates_trailing_slash() {
    let client = test_client("https://raw.example.com/businesses/");
    let url = client.document_url("acme").unwrap();
    assert_eq!(url.as_str(), "https://raw.example.com/businesses/acme.json");
}

#[test]
fn document_url_keeps_site_id_in_one_segment() {
    let client = test_client("https://raw.example.com/businesses");
    let url = client.document_url("../secrets").unwrap();
    assert_eq!(
        url.path(),
        "/businesses/..%2Fsecrets.json",
        "slashes in a site id must not create new path segments"
    );
}

#[test]
fn document_url_encodes_spaces_and_query_characters() {
    let client = test_client("https://raw.example.com/businesses");
    let url = client.document_url("a b?c").unwrap();
    assert!(url.query().is_none(), "site id must not open a query: {url}");
    assert!(url.path().ends_with("/a%20b%3Fc.json"), "got {url}");
}

#[test]
fn new_rejects_relative_base_url() {
    let result = DocumentClient::new("businesses/", 5, "plumbsite-test/0.1");
    assert!(matches!(result, Err(FetchError::InvalidBaseUrl { .. })));
}

#[test]
fn new_rejects_non_http_scheme() {
    let result = DocumentClient::new("ftp://example.com/businesses", 5, "plumbsite-test/0.1");
    assert!(matches!(result, Err(FetchError::InvalidBaseUrl { .. })));
}

#[test]
fn connect_timeout_never_exceeds_request_timeout() {
    assert_eq!(connect_timeout(3), Duration::from_secs(3));
    assert_eq!(connect_timeout(30), Duration::from_secs(10));
}
