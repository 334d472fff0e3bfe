use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::ResumeData;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    pub resume: ResumeSummary,
    /// Whether the configured static directory exists; `/static/*` answers 404 otherwise.
    pub static_assets: bool,
}

/// Entry counts of the loaded résumé, per section.
#[derive(Debug, Serialize)]
pub struct ResumeSummary {
    pub name: String,
    pub experience: usize,
    pub education: usize,
    pub skills: usize,
    pub languages: usize,
    pub projects: usize,
}

impl From<&ResumeData> for ResumeSummary {
    fn from(resume: &ResumeData) -> Self {
        ResumeSummary {
            name: resume.personal.name.clone(),
            experience: resume.experience.len(),
            education: resume.education.len(),
            skills: resume.skills.iter().map(|group| group.items.len()).sum(),
            languages: resume.languages.len(),
            projects: resume.projects.len(),
        }
    }
}

/// GET /health
/// Reports the service version and what was loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: "resume",
        resume: ResumeSummary::from(state.resume.as_ref()),
        static_assets: state.config.static_dir.is_dir(),
    })
}
