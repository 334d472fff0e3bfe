use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::errors::AppError;
use crate::render::{render_html, render_pdf};
use crate::state::AppState;

pub const EXPORT_PDF_PATH: &str = "/export-pdf";

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_html(&state.resume, Some(EXPORT_PDF_PATH))?;
    Ok(Html(html))
}

/// GET /export-pdf
/// Layout and PDF encoding are CPU-bound, so they run on the blocking pool.
pub async fn handle_export_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = Arc::clone(&state.resume);
    let backend = Arc::clone(&state.pdf_backend);

    let bytes = tokio::task::spawn_blocking(move || render_pdf(&resume, backend.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF task panicked: {e}")))??;

    let filename = pdf_filename(Local::now().naive_local());
    info!(bytes = bytes.len(), %filename, "Serving PDF export");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// `resume_YYYYMMDD_HHMMSS.pdf` for the given local time.
pub fn pdf_filename(at: NaiveDateTime) -> String {
    at.format("resume_%Y%m%d_%H%M%S.pdf").to_string()
}
