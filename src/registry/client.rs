//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer token authorization
//! - Status code mapping (not found, rate limit, other failures)
//!
//! Requests are not retried: a failed lookup is final for the current run.

use crate::error::RegistryError;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header (GitHub rejects requests without one)
const DEFAULT_USER_AGENT: &str = concat!("geobuild-update/", env!("CARGO_PKG_VERSION"));

/// Media type recommended by the GitHub REST API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Header GitHub uses to report the remaining request quota
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// HTTP client wrapper carrying the optional API token
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with the default User-Agent and a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            token: None,
        })
    }

    /// Attach a bearer token; blank tokens are ignored
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    /// Returns true if requests will carry an Authorization header
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Perform a GET request and map failure statuses to errors
    pub async fn get_with_context(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<Response, RegistryError> {
        debug!(url, authenticated = self.has_token(), "GET");

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(repository, registry)
            } else {
                RegistryError::network_error(repository, registry, e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown");
        warn!(
            "Request for {} failed: {} {}",
            url,
            status.as_u16(),
            reason
        );

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::repository_not_found(repository, registry));
        }

        if is_rate_limited(&response) {
            return Err(RegistryError::rate_limit_exceeded(registry));
        }

        Err(RegistryError::HttpError {
            url: url.to_string(),
            status: status.as_u16(),
            reason: reason.to_string(),
        })
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, repository, registry).await?;

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                repository,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

/// GitHub signals an exhausted quota with 429, or with 403 plus a zero
/// remaining-requests header.
fn is_rate_limited(response: &Response) -> bool {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => true,
        StatusCode::FORBIDDEN => response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false),
        _ => false,
    }
}
