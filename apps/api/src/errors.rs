use axum::{
    extract::multipart::MultipartError,
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response body: `{ "error": "<message>", "code": "<CODE>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat { .. } => AppError::Validation(err.to_string()),
            ExtractError::Aborted(_) => AppError::Internal(anyhow::Error::new(err)),
            _ => AppError::UnprocessableEntity(err.to_string()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
        }
    }
}

impl AppError {
    /// Maps an extractor rejection onto the JSON error body, keeping its status class.
    fn from_rejection(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(detail),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::UnprocessableEntity(detail),
            _ => AppError::Validation(detail),
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Failed to customize resume.".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to generate PDF.".to_string(),
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
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_string_error() {
        let (status, body) = body_json(AppError::Validation("missing".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_llm_error_hides_details() {
        let (status, body) = body_json(AppError::Llm("quota exceeded for key abc".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to customize resume.");
    }

    #[tokio::test]
    async fn test_render_error_maps_to_500() {
        let err = AppError::Render(RenderError::Io(std::io::Error::other("disk")));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate PDF.");
    }

    #[test]
    fn test_rejection_status_class_is_kept() {
        assert!(matches!(
            AppError::from_rejection(StatusCode::UNPROCESSABLE_ENTITY, "missing field".into()),
            AppError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            AppError::from_rejection(StatusCode::PAYLOAD_TOO_LARGE, "too big".into()),
            AppError::PayloadTooLarge(_)
        ));
        assert!(matches!(
            AppError::from_rejection(StatusCode::UNSUPPORTED_MEDIA_TYPE, "no content type".into()),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_unsupported_format_is_validation() {
        let err: AppError = ExtractError::UnsupportedFormat {
            file_name: "resume.txt".into(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unreadable_document_is_unprocessable() {
        let err: AppError = ExtractError::Pdf("bad xref".into()).into();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
