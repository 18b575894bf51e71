use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use poe2_leagues::{
    constants::relay::SPOOFED_USER_AGENT,
    data_fetcher::create_http_client,
    relay::{RelayState, router},
};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header as header_matcher, method, path, query_param},
};

const UPSTREAM_BODY: &str = r#"{"leagues":[{"name":"Dawn of the Hunt","url":"dawn"}],"classes":[]}"#;

fn relay_for(server: &MockServer) -> axum::Router {
    let client = create_http_client(Some(5)).unwrap();
    router(RelayState::new(
        client,
        format!("{}/api/data/builds?game=poe2", server.uri()),
    ))
}

fn listing_request() -> Request<Body> {
    Request::builder()
        .uri("/poe2-leagues")
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_relays_upstream_body_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/builds"))
        .and(query_param("game", "poe2"))
        .and(header_matcher("user-agent", SPOOFED_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(UPSTREAM_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = relay_for(&mock_server)
        .oneshot(listing_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_string(response).await, UPSTREAM_BODY);
}

#[tokio::test]
async fn test_allows_cross_origin_reads() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let response = relay_for(&mock_server)
        .oneshot(listing_request())
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_upstream_error_becomes_fixed_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let response = relay_for(&mock_server)
        .oneshot(listing_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Failed to fetch PoE2 Ninja data" })
    );
}

/// Upstream rate limiting is not passed through; it is one more failure
#[tokio::test]
async fn test_upstream_rate_limit_becomes_fixed_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = relay_for(&mock_server)
        .oneshot(listing_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.headers().contains_key(header::RETRY_AFTER));
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Failed to fetch PoE2 Ninja data" })
    );
}

#[tokio::test]
async fn test_invalid_upstream_json_becomes_fixed_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let response = relay_for(&mock_server)
        .oneshot(listing_request())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("Failed to fetch PoE2 Ninja data"));
    assert!(!body.contains("not json"));
}

#[tokio::test]
async fn test_unreachable_upstream_becomes_fixed_envelope() {
    let client = create_http_client(Some(5)).unwrap();
    let app = router(RelayState::new(client, "http://127.0.0.1:1/api/data/builds"));

    let response = app.oneshot(listing_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// Each inbound request makes its own upstream call
#[tokio::test]
async fn test_no_caching_between_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/builds"))
        .respond_with(ResponseTemplate::new(200).set_body_string(UPSTREAM_BODY))
        .expect(2)
        .mount(&mock_server)
        .await;

    let app = relay_for(&mock_server);
    for _ in 0..2 {
        let response = app.clone().oneshot(listing_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_relayed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let request = Request::builder()
        .uri("/poe2-other")
        .body(Body::empty())
        .unwrap();
    let response = relay_for(&mock_server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
