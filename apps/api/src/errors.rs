#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::builder::UnknownTemplate;
use crate::export::ExportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("An export is already in progress")]
    ExportInFlight,

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<UnknownTemplate> for AppError {
    fn from(err: UnknownTemplate) -> Self {
        AppError::UnknownTemplate(err.0)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownTemplate(key) => (
                StatusCode::NOT_FOUND,
                "UNKNOWN_TEMPLATE",
                format!("No template registered under '{key}'"),
            ),
            AppError::ExportInFlight => (
                StatusCode::CONFLICT,
                "EXPORT_IN_FLIGHT",
                "An export is already in progress".to_string(),
            ),
            AppError::Export(err) => export_response(err),
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

/// Each export failure mode keeps its own code and human-readable message so
/// callers can present distinct, actionable notifications.
fn export_response(err: &ExportError) -> (StatusCode, &'static str, String) {
    match err {
        ExportError::RootNotFound => (
            StatusCode::NOT_FOUND,
            "RESUME_ROOT_NOT_FOUND",
            err.to_string(),
        ),
        ExportError::ZeroDimensions => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "ZERO_DIMENSION_ELEMENT",
            err.to_string(),
        ),
        ExportError::EmptyRaster => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "EMPTY_RASTER_OUTPUT",
            err.to_string(),
        ),
        ExportError::Raster(_) | ExportError::ImageEncoding(_) => {
            tracing::error!("Export image stage failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IMAGE_CONVERSION_FAILED",
                err.to_string(),
            )
        }
        ExportError::PdfWrite(_) | ExportError::Io(_) => {
            tracing::error!("Export serialization failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_FAILED",
                err.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_errors_map_to_distinct_codes() {
        let (status, code, _) = export_response(&ExportError::RootNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "RESUME_ROOT_NOT_FOUND");

        let (status, code, _) = export_response(&ExportError::ZeroDimensions);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "ZERO_DIMENSION_ELEMENT");

        let (_, code, _) = export_response(&ExportError::EmptyRaster);
        assert_eq!(code, "EMPTY_RASTER_OUTPUT");

        let (_, code, _) = export_response(&ExportError::PdfWrite("boom".into()));
        assert_eq!(code, "EXPORT_FAILED");
    }
}
