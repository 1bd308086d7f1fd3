//! Typed HTTP client for the maintainer API.
//!
//! The remote service is an opaque collaborator; this module owns the three
//! requests the portal issues (company directory, application submission,
//! status lookup) and the error taxonomy the flows interpret.

use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::flows::apply::domain::ApplicationPayload;

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server refused the submission and explained why. The message is
    /// surfaced to the user verbatim.
    #[error("{message}")]
    Rejected { message: String },

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// One maintainer match in a status lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaintainerStatus {
    pub status: String,
    #[serde(default)]
    pub review: Option<String>,
}

/// Status lookup response body. The server answers either with a
/// `maintainer` match list or with a bare `message`; both fields default so
/// either shape deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub maintainer: Vec<MaintainerStatus>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompaniesResponse {
    companies: Vec<String>,
}

/// HTTP client for the maintainer API endpoints.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client with default transport settings, pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the company directory used for autocomplete suggestions.
    pub async fn companies(&self) -> Result<Vec<String>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint("/maintainers/companies"))
            .send()
            .await?;
        let resp = Self::accepted(resp).await?;
        let body: CompaniesResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("companies response: {e}")))?;
        Ok(body.companies)
    }

    /// Submit an application payload.
    ///
    /// A rejection is an HTTP 403, or a success response whose JSON body
    /// embeds `status: 403` (the server emits both forms), and carries a
    /// `message` to show verbatim. Every other non-success status is a
    /// transport-level failure. A success body that is empty or not JSON
    /// is still a success.
    pub async fn submit(&self, payload: &ApplicationPayload) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.endpoint("/maintainers/apply"))
            .json(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body: Value = resp.json().await.unwrap_or(Value::Null);

        let embedded = body.get("status").and_then(Value::as_u64);
        if status == 403 || embedded == Some(403) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Application rejected")
                .to_string();
            return Err(ApiError::Rejected { message });
        }

        if !(200..300).contains(&status) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());
            return Err(ApiError::Server { status, message });
        }

        Ok(())
    }

    /// Look up the status of a previously submitted application.
    pub async fn status(&self, id: &str) -> Result<StatusResponse, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&format!("/maintainers/status/{id}")))
            .send()
            .await?;
        let resp = Self::accepted(resp).await?;
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(format!("status response: {e}")))
    }

    async fn accepted(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: code,
                message,
            });
        }
        Ok(resp)
    }
}
