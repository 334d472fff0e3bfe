use std::sync::Arc;

use crate::config::Config;
use crate::models::ResumeData;
use crate::render::PdfBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub resume: Arc<ResumeData>,
    /// Pluggable PDF backend. Default: `PrintPdfBackend` on A4.
    pub pdf_backend: Arc<dyn PdfBackend>,
    pub config: Config,
}

impl AppState {
    pub fn new(resume: ResumeData, pdf_backend: Arc<dyn PdfBackend>, config: Config) -> Self {
        AppState {
            resume: Arc::new(resume),
            pdf_backend,
            config,
        }
    }
}
