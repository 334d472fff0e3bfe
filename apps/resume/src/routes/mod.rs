pub mod health;
pub mod pages;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::handle_index))
        .route(pages::EXPORT_PDF_PATH, get(pages::handle_export_pdf))
        .route("/health", get(health::health_handler))
        .nest_service("/static", static_files)
        .with_state(state)
}
