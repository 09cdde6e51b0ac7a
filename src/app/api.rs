//! HTTP helpers for JSON APIs with consistent timeouts and error handling. Feature
//! clients use these helpers to avoid duplicating request setup and to enforce a
//! predictable timeout policy. The helpers never log request bodies because they
//! carry passwords.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// Failure payload returned by the auth API.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// JSON client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client for the configured base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the base URL is not configured or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = config.api_base()?;
        Self::new(base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Builds a client with an explicit base URL and per-request timeout.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to initialize HTTP client: {err}")))?;

        Ok(Self { client, base_url })
    }

    /// Posts JSON and ignores the body of a successful response.
    ///
    /// # Errors
    /// Returns `AppError::Http` on a non-success status, or a transport error.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let response = self.send_post(path, body).await?;
        handle_empty_response(response).await
    }

    /// Posts JSON and decodes the JSON body of a successful response.
    ///
    /// # Errors
    /// Returns `AppError::Http` on a non-success status, `AppError::Parse` if
    /// the body does not decode, or a transport error.
    pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send_post(path, body).await?;
        handle_json_response(response).await
    }

    async fn send_post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, AppError> {
        let url = build_url_with_base(self.base_url.as_str(), path);
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        let span = info_span!("api.request", http.method = "POST", url = %url);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        debug!(status = response.status().as_u16(), "response received");

        Ok(response)
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_decode() {
        AppError::Parse(format!("Failed to decode response: {err}"))
    } else {
        AppError::Network("Unable to reach the server. Please try again.".to_string())
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        let bytes = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles responses whose success body is irrelevant.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: error_message(&body),
    }
}

/// Extracts the optional `message` field of an error body, sanitized for display.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed.message.and_then(|message| sanitize_message(&message))
}

/// Trims and truncates server text; blank messages count as absent.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
