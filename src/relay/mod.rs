//! HTTP delivery of role updates to the Haven API.

use reqwest::{header, StatusCode};

use crate::{config::Config, error::relay::RelayError, model::roles::RoleUpdateRequest};

/// Client for the Haven role-update endpoint.
///
/// Holds a stock `reqwest::Client` (default connection pooling, no explicit
/// timeout) plus the base URL and bearer token from configuration.
/// Constructed once at startup and shared by the event handlers.
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RelayClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.haven_api_base_url.clone(),
            token: config.haven_api_token.clone(),
        }
    }

    /// Delivers one role update synchronously.
    ///
    /// Success is HTTP 200 exactly; every other status, other 2xx codes
    /// included, maps to `RelayError::Api` with no status-specific
    /// handling. There is no retry; callers decide whether a failure is
    /// fatal (startup sync) or logged and dropped (live events).
    pub async fn send(&self, request: &RoleUpdateRequest) -> Result<(), RelayError> {
        let body = serde_json::to_vec(request)?;

        let response = self
            .http
            .post(format!("{}/guild-roles", self.base_url))
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.token)
            .body(body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(RelayError::Api {
                status: response.status(),
            });
        }

        Ok(())
    }
}
