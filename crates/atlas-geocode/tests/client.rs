//! Integration tests for `GeoSearchClient` using wiremock HTTP mocks.

use atlas_geocode::{GeoSearchClient, GeocodeError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeoSearchClient {
    GeoSearchClient::with_base_url(30, "atlas-bridge/test", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_returns_parsed_hits() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "NAMN": "Testplatsen",
            "TYPE": "platser",
            "GEOM": "POINT(13.0 55.6)"
        },
        {
            "adress": "Testgatan 2",
            "x": 13.01,
            "y": 55.61
        }
    ]);

    Mock::given(method("GET"))
        .and(query_param("q", "Testplatsen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hits = client.search("Testplatsen").await.expect("should parse hits");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].namn.as_deref(), Some("Testplatsen"));
    assert_eq!(hits[0].geom.as_deref(), Some("POINT(13.0 55.6)"));
    assert_eq!(hits[1].adress.as_deref(), Some("Testgatan 2"));
    assert_eq!(hits[1].x, Some(13.01));
}

#[tokio::test]
async fn search_percent_encodes_the_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Östra Förstadsgatan 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hits = client
        .search("Östra Förstadsgatan 1")
        .await
        .expect("encoded query should reach the mock");

    assert!(hits.is_empty());
}

#[tokio::test]
async fn empty_array_is_a_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hits = client.search("Ingenstansgatan 99").await.expect("empty is ok");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_the_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search("Amiralsgatan 20")
        .await
        .expect_err("500 should be an error");

    assert!(err.to_string().contains("500"));
    match err {
        GeocodeError::UnexpectedStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search("Amiralsgatan 20")
        .await
        .expect_err("garbage body should be an error");

    assert!(matches!(err, GeocodeError::Deserialize { .. }));
}
