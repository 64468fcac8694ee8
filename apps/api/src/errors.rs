use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The scoring engine itself never produces these — scorers are total
/// functions. Everything here belongs to the request/storage layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate submission: {0}")]
    DuplicateSubmission(String),

    #[error("Text extraction unavailable: {0}")]
    ExtractionUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::DuplicateSubmission(msg) => (
                StatusCode::BAD_REQUEST,
                "DUPLICATE_SUBMISSION",
                msg.clone(),
            ),
            AppError::ExtractionUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXTRACTION_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("No resume text provided".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_submission_maps_to_400() {
        let resp = AppError::DuplicateSubmission("UTR already used".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_extraction_unavailable_maps_to_500() {
        let resp = AppError::ExtractionUnavailable("no OCR engine".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = AppError::NotFound("Payment abc not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
