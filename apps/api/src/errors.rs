use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const RATE_LIMITED_MESSAGE: &str = "You've reached Gemini's rate limit (about 2 requests per minute). \
    Please wait 30-60 seconds and try again.";
pub const INPUT_TOO_LARGE_MESSAGE: &str = "Your manuscript is too long for this model. \
    Try uploading a shorter version or splitting it into sections.";
pub const UPSTREAM_FALLBACK_MESSAGE: &str =
    "Gemini returned an unexpected error. Try again or adjust your prompt.";
pub const TRANSPORT_FALLBACK_MESSAGE: &str =
    "Unexpected server error. Please try again or check your connection.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Missing prompt")]
    MissingPrompt,

    #[error("Missing GEMINI_API_KEY")]
    MissingCredential,

    #[error("No manuscript uploaded")]
    NoManuscript,

    #[error("Upstream rate limit: {0}")]
    RateLimited(String),

    #[error("Upstream rejected input size: {0}")]
    InputTooLarge(String),

    #[error("Upstream error (status {status}): {message:?}")]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, sent alongside the human-readable message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            AppError::MissingPrompt => "MISSING_PROMPT",
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::NoManuscript => "NO_MANUSCRIPT",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::InputTooLarge(_) => "INPUT_TOO_LARGE",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            AppError::UnsupportedMediaType(media_type) => {
                tracing::warn!("Rejected upload with media type {media_type}");
                (
                    StatusCode::BAD_REQUEST,
                    "Only PDF and TXT supported".to_string(),
                )
            }
            AppError::ExtractionFailed(detail) => {
                tracing::error!("Text extraction failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "File processing failed".to_string(),
                )
            }
            AppError::MissingPrompt => (StatusCode::BAD_REQUEST, "Missing prompt".to_string()),
            AppError::MissingCredential => {
                tracing::error!("GEMINI_API_KEY is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing GEMINI_API_KEY".to_string(),
                )
            }
            AppError::NoManuscript => (
                StatusCode::BAD_REQUEST,
                "No book uploaded yet. Please upload a file first.".to_string(),
            ),
            AppError::RateLimited(upstream) => {
                tracing::warn!("Upstream rate limited: {upstream}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    RATE_LIMITED_MESSAGE.to_string(),
                )
            }
            AppError::InputTooLarge(upstream) => {
                tracing::warn!("Upstream rejected input size: {upstream}");
                (StatusCode::BAD_REQUEST, INPUT_TOO_LARGE_MESSAGE.to_string())
            }
            AppError::Upstream { status, message } => {
                tracing::warn!("Upstream returned {status}: {message:?}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    message
                        .clone()
                        .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
                )
            }
            AppError::Transport(detail) => {
                tracing::error!("Upstream transport error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    TRANSPORT_FALLBACK_MESSAGE.to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential => AppError::MissingCredential,
            LlmError::Http(e) => AppError::Transport(e.to_string()),
            LlmError::Parse(e) => AppError::Transport(format!("unreadable upstream body: {e}")),
        }
    }
}

/// Keeps body rejections in the JSON error shape instead of axum's plain-text default.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_propagated() {
        let response = AppError::Upstream {
            status: 403,
            message: Some("API key not valid".to_string()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let response = AppError::Upstream {
            status: 1000,
            message: None,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_rate_limited_is_429() {
        let response = AppError::RateLimited("RESOURCE_EXHAUSTED".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let error: AppError = anyhow::anyhow!("worker pool shut down").into();
        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_credential_is_500() {
        assert_eq!(
            AppError::MissingCredential.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
