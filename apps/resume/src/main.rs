use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use resume::config::Config;
use resume::loader::load_resume;
use resume::render::PrintPdfBackend;
use resume::routes::build_router;
use resume::state::AppState;
use resume::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.rust_log)?;

    info!("Starting resume server v{}", env!("CARGO_PKG_VERSION"));

    let resume = match load_resume(&config.resume_path) {
        Ok(resume) => resume,
        Err(e) => {
            error!("Failed to load resume: {e}");
            return Err(e.into());
        }
    };
    info!(
        path = %config.resume_path.display(),
        experience = resume.experience.len(),
        projects = resume.projects.len(),
        "Resume loaded"
    );

    let pdf_backend = Arc::new(PrintPdfBackend::default());
    let state = AppState::new(resume, pdf_backend, config.clone());

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
