pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::customize::handlers::handle_customize_resume;
use crate::errors::AppError;
use crate::extract::handlers::handle_extract_text;
use crate::render::handlers::handle_preview;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/customize-resume", post(handle_customize_resume))
        .route("/api/extract-text", post(handle_extract_text))
        .route("/api/preview", post(handle_preview))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
