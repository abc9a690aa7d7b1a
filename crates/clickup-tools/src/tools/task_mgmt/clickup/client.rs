//! Low-level request helper for the ClickUp v2 API

use std::time::Duration;

use clickup_core::{ClickUpError, ClickUpResult};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

/// Base path of the ClickUp v2 REST API
pub const BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Fixed per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response bodies in error messages are capped at this many bytes
const BODY_EXCERPT_LEN: usize = 400;

/// Minimal ClickUp API client.
///
/// Holds an immutable token and base URL; every call is a single
/// request/response round trip with no retries. Non-success statuses map to
/// a [`ClickUpError::Remote`] carrying the status code and a truncated body
/// excerpt, so the caller sees a concise diagnostic.
#[derive(Debug, Clone)]
pub struct ClickUpClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ClickUpClient {
    pub fn new(token: &str) -> ClickUpResult<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(token: &str, base_url: &str) -> ClickUpResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("clickup-agent-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClickUpError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Issue one API request and return the parsed JSON response body.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> ClickUpResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "issuing ClickUp API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClickUpError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClickUpError::transport(e.to_string()))?;

        if status >= 400 {
            return Err(ClickUpError::remote(status, truncate_body(&body)));
        }

        serde_json::from_str(&body).map_err(ClickUpError::from)
    }
}

/// Cap a response body for inclusion in an error message, respecting UTF-8
/// character boundaries.
fn truncate_body(body: &str) -> &str {
    if body.len() <= BODY_EXCERPT_LEN {
        return body;
    }
    let mut end = BODY_EXCERPT_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
