//! API error types with structured JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::calculators::CalculatorError;
use crate::ports::ExplainError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("AI service is not configured")]
    AiNotConfigured,
    #[error("AI service unavailable: {0}")]
    AiUnavailable(String),
    #[error("AI quota exceeded")]
    QuotaExceeded,
    #[error("AI upstream error: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                errors.join("; "),
            ),
            ApiError::AiNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_NOT_CONFIGURED",
                "AI service is not configured. Please add your Gemini API key to environment variables.".to_string(),
            ),
            ApiError::AiUnavailable(detail) => {
                tracing::warn!(detail, "AI service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AI_UNAVAILABLE",
                    "AI analysis service is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            ApiError::QuotaExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "QUOTA_EXCEEDED",
                "API quota exceeded. Please try again later.".to_string(),
            ),
            ApiError::Upstream(detail) => {
                tracing::warn!(detail, "AI upstream error");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_ERROR",
                    "AI service returned an unusable response".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExplainError> for ApiError {
    fn from(err: ExplainError) -> Self {
        match err {
            ExplainError::NotConfigured => ApiError::AiNotConfigured,
            ExplainError::Unavailable(detail) => ApiError::AiUnavailable(detail),
            ExplainError::QuotaExceeded => ApiError::QuotaExceeded,
            e @ (ExplainError::InvalidCredentials | ExplainError::EmptyResponse) => {
                ApiError::Upstream(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096)
            .await
            .expect("Should read body");
        serde_json::from_slice(&body).expect("Should be JSON")
    }

    #[tokio::test]
    async fn test_validation_returns_400_with_all_messages() {
        let response = ApiError::Validation(vec![
            "age must be between 1 and 120".into(),
            "sex must be 0 or 1".into(),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(
            json["error"]["message"],
            "age must be between 1 and 120; sex must be 0 or 1"
        );
    }

    #[tokio::test]
    async fn test_explain_errors_map_to_statuses() {
        let cases = [
            (ExplainError::NotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (
                ExplainError::Unavailable("timeout".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ExplainError::QuotaExceeded, StatusCode::TOO_MANY_REQUESTS),
            (ExplainError::InvalidCredentials, StatusCode::BAD_GATEWAY),
            (ExplainError::EmptyResponse, StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[tokio::test]
    async fn test_not_configured_message() {
        let json = body_json(ApiError::AiNotConfigured.into_response()).await;
        assert_eq!(json["error"]["code"], "AI_NOT_CONFIGURED");
        assert_eq!(
            json["error"]["message"],
            "AI service is not configured. Please add your Gemini API key to environment variables."
        );
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let response = ApiError::Internal("worker panicked".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_calculator_error_is_bad_request() {
        let err: ApiError = CalculatorError::NonPositive("height").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
