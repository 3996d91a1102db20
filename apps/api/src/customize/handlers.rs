//! Axum route handlers for the customization API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::customize::service::customize_resume;
use crate::errors::AppError;
use crate::extract::extract_upload;
use crate::extract::upload::UploadForm;
use crate::render::PdfRenderer;
use crate::state::AppState;

const MISSING_FIELDS_MESSAGE: &str = "Both resume and job description are required.";

#[derive(Debug, Serialize)]
pub struct CustomizeResponse {
    #[serde(rename = "customizedResume")]
    pub customized_resume: String,
    #[serde(rename = "base64PDF")]
    pub base64_pdf: String,
}

/// POST /api/customize-resume
///
/// Multipart fields: `resume` (PDF or DOCX file), `jobDescription` (text).
/// Returns the customized resume text and the rendered PDF as base64.
pub async fn handle_customize_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CustomizeResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let form = UploadForm::read(multipart?).await?;
    let (resume, job_description) = match (form.resume, form.job_description) {
        (Some(resume), Some(job_description)) => (resume, job_description),
        _ => return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    };

    info!(
        %request_id,
        file_name = %resume.file_name,
        size = resume.bytes.len(),
        "Customization requested"
    );
    let extracted = extract_upload(resume).await?;

    let renderer = PdfRenderer::new(state.page_config.clone());
    let customized = customize_resume(
        state.rewriter.as_ref(),
        renderer,
        &extracted.text,
        &job_description,
    )
    .await?;

    info!(%request_id, pdf_bytes = customized.pdf.len(), "Customization complete");
    Ok(Json(CustomizeResponse {
        customized_resume: customized.text,
        base64_pdf: STANDARD.encode(&customized.pdf),
    }))
}
