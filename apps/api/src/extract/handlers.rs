//! Axum route handlers for the text extraction API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};

use crate::errors::AppError;
use crate::extract::upload::UploadForm;
use crate::extract::{extract_upload, ExtractedDocument};

/// POST /api/extract-text
///
/// Returns the raw text of an uploaded PDF or DOCX (`resume` field), so a
/// client can preview the original resume before customizing it.
pub async fn handle_extract_text(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractedDocument>, AppError> {
    let form = UploadForm::read(multipart?).await?;
    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("A resume file is required.".to_string()))?;

    let extracted = extract_upload(resume).await?;
    Ok(Json(extracted))
}
