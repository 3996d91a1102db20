mod config;
mod customize;
mod errors;
mod extract;
mod llm_client;
mod render;
mod routes;
mod segmenter;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::customize::rewriter::LlmResumeRewriter;
use crate::llm_client::{LlmClient, LlmSettings};
use crate::render::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeFit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(LlmSettings {
        api_key: config.api_key.clone(),
        api_base: config.llm_api_base.clone(),
        model: config.llm_model.clone(),
        timeout: Duration::from_secs(config.llm_timeout_secs),
    })?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.llm_timeout_secs
    );

    // US letter, 1" margins, Helvetica 12pt body
    let page_config = default_page_config();
    info!(
        "PDF page config: {}x{}pt, body {}pt",
        page_config.page_width_pt, page_config.page_height_pt, page_config.body_size_pt
    );

    // Build app state
    let state = AppState {
        rewriter: Arc::new(LlmResumeRewriter::new(llm)),
        config: config.clone(),
        page_config,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
