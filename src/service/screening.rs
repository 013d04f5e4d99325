//! Screening service client
//!
//! Typed access to the external AI screening service. Everything crossing
//! this boundary is deserialized into the schema in `model::report` and
//! structurally validated; malformed bodies are failures, never data.

use async_trait::async_trait;
use reqwest::{multipart, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::model::form::ScreeningRequest;
use crate::model::report::{ResultSummary, ScreeningResult};
use crate::model::validate::validate_screening_result;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Screening service unreachable: {0}")]
    Transport(String),

    #[error("Screening service returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Response does not match the screening result schema: {0}")]
    Schema(String),
}

// Stringified so stub backends in tests can construct the variant; real
// transport failures still convert via this impl.
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport(err.to_string())
    }
}

/// Verbatim upstream health payload plus the status it arrived with.
#[derive(Debug, Clone)]
pub struct UpstreamHealth {
    pub status: u16,
    pub body: Value,
}

/// The operations the gateway needs from the screening service.
#[async_trait]
pub trait ScreeningBackend: Send + Sync {
    /// Upstream base URL, for error payloads and logs.
    fn target(&self) -> &Url;

    /// Relay the upstream health payload with its status code.
    async fn health(&self) -> Result<UpstreamHealth, BackendError>;

    /// Submit one validated screening request. One call per submission; no
    /// retries.
    async fn screen(&self, request: ScreeningRequest) -> Result<ScreeningResult, BackendError>;

    /// Fetch the stored-results index.
    async fn list_results(&self) -> Result<Vec<ResultSummary>, BackendError>;

    /// Fetch one stored result; unknown ids are a distinct NotFound.
    async fn get_result(&self, id: &str) -> Result<ScreeningResult, BackendError>;

    /// Fetch a development fixture instead of running the real pipeline.
    async fn mock_result(&self, example: Option<&str>) -> Result<ScreeningResult, BackendError>;
}

/// HTTP client for the screening service
pub struct ScreeningServiceClient {
    client: Client,
    base_url: Url,
}

impl ScreeningServiceClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::builder()
                .user_agent("screening-gateway/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Shared handling for endpoints that return one screening result
    async fn read_result(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<ScreeningResult, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let result: ScreeningResult = serde_json::from_str(&body)
            .map_err(|e| BackendError::Schema(format!("{context}: {e}")))?;

        let validation = validate_screening_result(&result);
        for warning in &validation.warnings {
            tracing::warn!(context, warning = %warning, "Screening result inconsistency");
        }
        if !validation.is_valid {
            return Err(BackendError::Schema(format!(
                "{context}: {}",
                validation.errors.join("; ")
            )));
        }

        Ok(result)
    }
}

#[async_trait]
impl ScreeningBackend for ScreeningServiceClient {
    fn target(&self) -> &Url {
        &self.base_url
    }

    async fn health(&self) -> Result<UpstreamHealth, BackendError> {
        let url = self.endpoint("health");
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        // Non-JSON health bodies relay as an empty object.
        let body = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Ok(UpstreamHealth { status, body })
    }

    async fn screen(&self, request: ScreeningRequest) -> Result<ScreeningResult, BackendError> {
        let url = self.endpoint("screening/screen");
        tracing::debug!(article = %request.url, has_dob = request.date_of_birth.is_some(), "Submitting screening request");

        let mut form = multipart::Form::new()
            .text("url", request.url.to_string())
            .text("first_name", request.first_name)
            .text("last_name", request.last_name);
        if let Some(middle_names) = request.middle_names {
            form = form.text("middle_names", middle_names);
        }
        if let Some(date_of_birth) = request.date_of_birth {
            form = form.text("date_of_birth", date_of_birth);
        }

        let response = self.client.post(&url).multipart(form).send().await?;
        let result = self.read_result(response, "screen").await?;

        tracing::debug!(
            matches = result.matching.matches.len(),
            has_primary = result.matching.primary_match.is_some(),
            "Screening completed"
        );
        Ok(result)
    }

    async fn list_results(&self) -> Result<Vec<ResultSummary>, BackendError> {
        let url = self.endpoint("screening/results");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Schema(format!("result list: {e}")))
    }

    async fn get_result(&self, id: &str) -> Result<ScreeningResult, BackendError> {
        let url = self.endpoint(&format!("screening/results/{id}"));
        tracing::debug!(id = %id, "Fetching stored screening result");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_string()));
        }

        self.read_result(response, "result fetch").await
    }

    async fn mock_result(&self, example: Option<&str>) -> Result<ScreeningResult, BackendError> {
        let url = self.endpoint("test/mock-result");
        let response = self
            .client
            .get(&url)
            .query(&[("example", example)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(
                example.unwrap_or("default").to_string(),
            ));
        }

        self.read_result(response, "mock result").await
    }
}
