//! REST API Wrappers
//!
//! Frontend bindings to the storefront backend, organized by resource.

mod products;
mod auth;
mod user;
mod orders;
mod notifications;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

// Re-export all public items
pub use products::*;
pub use auth::*;
pub use user::*;
pub use orders::*;
pub use notifications::*;

/// Header carrying the logged-in user's id
pub const USER_ID_HEADER: &str = "X-User-Id";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin client over `reqwest` bound to a base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Absolute URL for an API path such as `/products`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }
}

/// Attach the user id header
pub(crate) fn as_user(request: RequestBuilder, user_id: u32) -> RequestBuilder {
    request.header(USER_ID_HEADER, user_id.to_string())
}

/// Send a request and decode a JSON body, accepting only `expected` statuses
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    expected: &[StatusCode],
) -> ApiResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if !expected.contains(&status) {
        return Err(status_error(status, response).await);
    }
    response.json::<T>().await.map_err(ApiError::from)
}

async fn status_error(status: StatusCode, response: Response) -> ApiError {
    let text = response.text().await.unwrap_or_default();
    ApiError::Status {
        status: status.as_u16(),
        message: error_message(status, &text),
    }
}

/// Message from a `{"error": ...}` body, or the canonical status text
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
