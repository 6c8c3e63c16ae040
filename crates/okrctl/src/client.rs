//! HTTP client for the OKR backend API.

use okr_common::OkrFilter;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// API client errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {0}")]
    Http(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Client for the OKR endpoint. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct OkrClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl OkrClient {
    /// Build a client against a base URL (e.g. `https://host/api`).
    pub fn new(base_url: &str, api_token: Option<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("okrctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    /// Fetch the OKR payload for a filter set. The payload shape is not
    /// interpreted here; the response adapter owns that.
    pub async fn fetch_okrs(&self, filter: &OkrFilter) -> Result<Value, ApiError> {
        let url = format!("{}/okrs", self.base_url);
        debug!("GET {} ({} filter params)", url, filter.to_query_pairs().len());

        let mut request = self.http.get(&url).query(&filter.to_query_pairs());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Http(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
