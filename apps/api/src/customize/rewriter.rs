//! Resume rewriting behind a pluggable trait in front of the model.
//!
//! Default: `LlmResumeRewriter` (the generative model via `LlmClient`).
//! `AppState` holds an `Arc<dyn ResumeRewriter>` so handlers can be driven
//! without network access.

use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use crate::customize::prompts::{build_customize_prompt, customize_system_prompt};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    /// Returns the customized resume as plain text.
    async fn rewrite(&self, resume_text: &str, job_description: &str) -> Result<String, AppError>;
}

pub struct LlmResumeRewriter {
    llm: LlmClient,
    system: String,
}

impl LlmResumeRewriter {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: customize_system_prompt(),
        }
    }
}

#[async_trait]
impl ResumeRewriter for LlmResumeRewriter {
    async fn rewrite(&self, resume_text: &str, job_description: &str) -> Result<String, AppError> {
        let prompt = build_customize_prompt(resume_text, job_description);
        let started = Instant::now();

        let text = self
            .llm
            .call_text(&prompt, &self.system)
            .await
            .map_err(|e| AppError::Llm(format!("Resume customization failed: {e}")))?;

        info!(
            model = self.llm.model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = text.len(),
            "Customized resume generated"
        );
        Ok(text)
    }
}
