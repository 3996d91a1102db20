//! Customization pipeline: validate → rewrite → segment → render.

use anyhow::anyhow;
use tracing::info;

use crate::customize::rewriter::ResumeRewriter;
use crate::errors::AppError;
use crate::render::{PdfRenderer, RenderTarget};
use crate::segmenter::{segment, LineKind};

#[derive(Debug)]
pub struct CustomizedResume {
    pub text: String,
    pub pdf: Vec<u8>,
}

/// Runs one customization. Fails with `Validation` if either input is blank,
/// `Llm` if the model call fails, `Render` if the PDF cannot be produced.
pub async fn customize_resume(
    rewriter: &dyn ResumeRewriter,
    renderer: PdfRenderer,
    resume_text: &str,
    job_description: &str,
) -> Result<CustomizedResume, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text cannot be empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation("Job description cannot be empty".to_string()));
    }

    let text = rewriter.rewrite(resume_text, job_description).await?;
    if text.trim().is_empty() {
        return Err(AppError::Llm("model returned an empty resume".to_string()));
    }

    let document = segment(&text);
    info!(
        lines = document.len(),
        sections = document.count(LineKind::SectionHeader),
        bullets = document.count(LineKind::Bullet),
        "Customized resume segmented"
    );

    let pdf = tokio::task::spawn_blocking(move || renderer.render(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF render task failed: {e}")))??;

    Ok(CustomizedResume { text, pdf })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::default_page_config;
    use crate::test_support::StubRewriter;

    fn renderer() -> PdfRenderer {
        PdfRenderer::new(default_page_config())
    }

    #[tokio::test]
    async fn test_success_returns_text_and_pdf() {
        let stub = StubRewriter::replying("EXPERIENCE\n• Led a team of 5\nJohn Smith");
        let out = customize_resume(&stub, renderer(), "Jane Doe\nEngineer", "Rust role")
            .await
            .unwrap();

        assert_eq!(out.text, "EXPERIENCE\n• Led a team of 5\nJohn Smith");
        assert!(out.pdf.starts_with(b"%PDF"));
        assert_eq!(
            stub.calls(),
            vec![("Jane Doe\nEngineer".to_string(), "Rust role".to_string())]
        );
    }

    #[tokio::test]
    async fn test_blank_job_description_is_rejected_before_model_call() {
        let stub = StubRewriter::replying("unused");
        let err = customize_resume(&stub, renderer(), "Jane Doe", "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_resume_is_rejected() {
        let stub = StubRewriter::replying("unused");
        let err = customize_resume(&stub, renderer(), "\n\n", "Rust role")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let stub = StubRewriter::failing();
        let err = customize_resume(&stub, renderer(), "Jane Doe", "Rust role")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_empty_model_output_is_an_llm_error() {
        let stub = StubRewriter::replying("  \n ");
        let err = customize_resume(&stub, renderer(), "Jane Doe", "Rust role")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
