use crate::api_client::{ApiResponse, FetchPuzzleRequest, GeneratePuzzlesRequest};
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn fetch_request_serializes_to_exact_wire_shape() {
    let request = FetchPuzzleRequest {
        username: "ansel".to_string(),
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, json!({"username": "ansel"}));
}

#[test]
fn generate_request_serializes_to_exact_wire_shape() {
    let request = GeneratePuzzlesRequest { count: 10 };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, json!({"count": 10}));
}

#[test]
fn error_response_carries_the_status_code() {
    let response = ApiResponse::from_status(StatusCode::NOT_FOUND);

    assert!(response.is_error());
    assert_eq!(response.to_string(), "Error: 404");

    let response = ApiResponse::from_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.to_string(), "Error: 500");
}

#[test]
fn json_response_displays_the_decoded_body() {
    let response = ApiResponse::Json(json!({"puzzle": "X"}));

    assert!(!response.is_error());
    assert_eq!(response.to_string(), r#"{"puzzle":"X"}"#);
}
