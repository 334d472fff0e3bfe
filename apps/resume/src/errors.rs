use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to render page: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to generate PDF: {0}")]
    Pdf(#[from] PdfError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Template(e) => tracing::error!("Template error: {e}"),
            AppError::Pdf(e) => tracing::error!("PDF error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
