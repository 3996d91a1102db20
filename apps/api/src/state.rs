use std::sync::Arc;

use crate::config::Config;
use crate::customize::rewriter::ResumeRewriter;
use crate::render::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; each request owns its upload and outputs.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable rewriter. Default: LlmResumeRewriter.
    pub rewriter: Arc<dyn ResumeRewriter>,
    pub config: Config,
    /// Page geometry and type sizes for PDF export.
    pub page_config: PageConfig,
}
