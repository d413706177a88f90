use anyhow::Result;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct FetchPuzzleRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePuzzlesRequest {
    pub count: u32,
}

/// Outcome of a puzzle API call: the decoded body on HTTP 200, or the
/// status descriptor for any other response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Error(String),
}

impl ApiResponse {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        ApiResponse::Error(format!("Error: {}", status.as_u16()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Json(value) => write!(f, "{}", value),
            ApiResponse::Error(message) => write!(f, "{}", message),
        }
    }
}

#[derive(Clone)]
pub struct PuzzleApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl PuzzleApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Ask the service for the next puzzle assigned to `username`.
    ///
    /// The username is not validated locally; the server rejects unknown
    /// users with a non-200 status, which comes back as `ApiResponse::Error`.
    pub fn fetch_puzzle_for_user(&self, username: &str) -> Result<ApiResponse> {
        let request = FetchPuzzleRequest {
            username: username.to_string(),
        };
        self.post("/api/fetch-puzzle-for-user", &request)
    }

    /// Ask the service to generate a batch of puzzles.
    ///
    /// The `count` argument is currently ignored: the service expects a
    /// fixed batch size, so the wire payload is always `{"count": 10}`.
    /// TODO: pass `count` through once the server accepts arbitrary batch
    /// sizes.
    pub fn generate_puzzles(&self, _count: u32) -> Result<ApiResponse> {
        let request = GeneratePuzzlesRequest { count: 10 };
        self.post("/api/generate-puzzles", &request)
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send()?;

        let status = response.status();
        debug!("{} responded {}", url, status);

        // Only an exact 200 counts as success; transport and decode
        // failures bubble up through `?`.
        if status == StatusCode::OK {
            Ok(ApiResponse::Json(response.json()?))
        } else {
            Ok(ApiResponse::from_status(status))
        }
    }
}
