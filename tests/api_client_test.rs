use puzzle_cli::api_client::{ApiResponse, PuzzleApiClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The client is deliberately blocking, so calls run on a blocking-friendly
// thread while the mock server lives on the test runtime.
async fn fetch(base_url: String, username: &str) -> ApiResponse {
    let username = username.to_string();
    tokio::task::spawn_blocking(move || {
        let client = PuzzleApiClient::new(&base_url);
        client
            .fetch_puzzle_for_user(&username)
            .expect("fetch request failed")
    })
    .await
    .expect("fetch task panicked")
}

async fn generate(base_url: String, count: u32) -> ApiResponse {
    tokio::task::spawn_blocking(move || {
        let client = PuzzleApiClient::new(&base_url);
        client.generate_puzzles(count).expect("generate request failed")
    })
    .await
    .expect("generate task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_decoded_json_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fetch-puzzle-for-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"puzzle": "X"})))
        .mount(&server)
        .await;

    let response = fetch(server.uri(), "ansel").await;
    assert_eq!(response, ApiResponse::Json(json!({"puzzle": "X"})));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_formats_non_200_as_error_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fetch-puzzle-for-user"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = fetch(server.uri(), "nobody").await;
    assert!(response.is_error());
    assert_eq!(response.to_string(), "Error: 404");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_sends_exact_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fetch-puzzle-for-user"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"username": "ansel"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = fetch(server.uri(), "ansel").await;
    assert_eq!(response, ApiResponse::Json(json!({})));

    // MockServer verifies the expectation on drop
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_always_sends_count_10() {
    let server = MockServer::start().await;

    // Regression guard: the wire payload stays pinned to 10 no matter
    // what the caller passes
    Mock::given(method("POST"))
        .and(path("/api/generate-puzzles"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"count": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generated": 10})))
        .expect(3)
        .mount(&server)
        .await;

    for count in [1, 10, 999] {
        let response = generate(server.uri(), count).await;
        assert_eq!(response, ApiResponse::Json(json!({"generated": 10})));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_fetch_yields_identical_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fetch-puzzle-for-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "grid": "..."})))
        .expect(2)
        .mount(&server)
        .await;

    let first = fetch(server.uri(), "ansel").await;
    let second = fetch(server.uri(), "ansel").await;

    assert_eq!(first, ApiResponse::Json(json!({"id": 1, "grid": "..."})));
    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn client_tolerates_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fetch-puzzle-for-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"puzzle": "X"})))
        .mount(&server)
        .await;

    let response = fetch(format!("{}/", server.uri()), "ansel").await;
    assert_eq!(response, ApiResponse::Json(json!({"puzzle": "X"})));
}
