//! Multipart form reading shared by the upload endpoints.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Form field carrying the resume document.
pub const RESUME_FIELD: &str = "resume";
/// Form field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// An uploaded file held in memory for the lifetime of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    /// `None` when the field is absent or the file is empty.
    pub resume: Option<UploadedFile>,
    /// `None` when the field is absent or blank.
    pub job_description: Option<String>,
}

impl UploadForm {
    /// Drains the multipart stream. Unknown fields are skipped; a repeated
    /// field keeps its last value.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                RESUME_FIELD => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.resume = (!bytes.is_empty()).then_some(UploadedFile { file_name, bytes });
                }
                JOB_DESCRIPTION_FIELD => {
                    let text = field.text().await?;
                    form.job_description = (!text.trim().is_empty()).then_some(text);
                }
                other => debug!(field = other, "Ignoring unknown multipart field"),
            }
        }

        Ok(form)
    }
}
