//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::form::SubmissionError;
use crate::service::namescan::NameScanError;
use crate::service::screening::BackendError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Submission rejected before any upstream call (400)
    #[error("Invalid request: {0}")]
    Validation(#[from] SubmissionError),

    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Stored result or fixture not found (404)
    #[error("Result not found: {0}")]
    ResultNotFound(String),

    /// Screening service answered with a failure status (502)
    #[error("Screening service returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Screening service could not be reached (502)
    #[error("Screening service unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Screening service answered with a body outside the schema (502)
    #[error("Screening service response did not match the expected schema: {0}")]
    SchemaMismatch(String),

    /// Name scan refused by host policy (403)
    #[error("URL blocked by scan policy: {0}")]
    Blocked(String),

    /// Name scan page fetch failed (502)
    #[error("Name scan failed: {0}")]
    ScanFailed(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ResultNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Blocked(_) => StatusCode::FORBIDDEN,
            ApiError::UpstreamStatus { .. }
            | ApiError::UpstreamUnreachable(_)
            | ApiError::SchemaMismatch(_)
            | ApiError::ScanFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::Validation(_) => "invalid_request",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::ResultNotFound(_) => "result_not_found",
            ApiError::UpstreamStatus { .. } => "upstream_error",
            ApiError::UpstreamUnreachable(_) => "upstream_unreachable",
            ApiError::SchemaMismatch(_) => "upstream_schema_mismatch",
            ApiError::Blocked(_) => "scan_blocked",
            ApiError::ScanFailed(_) => "scan_failed",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Transport(msg) => ApiError::UpstreamUnreachable(msg),
            BackendError::UpstreamStatus { status, body } => {
                ApiError::UpstreamStatus { status, body }
            }
            BackendError::NotFound(id) => ApiError::ResultNotFound(id),
            BackendError::Schema(msg) => ApiError::SchemaMismatch(msg),
        }
    }
}

impl From<NameScanError> for ApiError {
    fn from(err: NameScanError) -> Self {
        match err {
            NameScanError::Blocked(url) => ApiError::Blocked(url),
            NameScanError::HttpError(e) => ApiError::ScanFailed(e.to_string()),
            NameScanError::Status { status, url } => {
                ApiError::ScanFailed(format!("status {status} fetching {url}"))
            }
        }
    }
}
