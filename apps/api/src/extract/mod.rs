//! Text extraction: turns an uploaded PDF or DOCX into raw resume text.
//!
//! Extraction is CPU-bound; `extract_upload` runs it on the blocking pool
//! so a pathological document never stalls the async workers.

pub mod docx;
pub mod handlers;
pub mod upload;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::extract::upload::UploadedFile;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format. Please upload a PDF or DOCX file.")]
    UnsupportedFormat { file_name: String },

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("No text could be extracted from '{file_name}'")]
    Empty { file_name: String },

    #[error("Text extraction aborted: {0}")]
    Aborted(String),
}

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(ExtractError::UnsupportedFormat {
                file_name: file_name.to_string(),
            }),
        }
    }

    /// The unreadable-document error for this format.
    pub fn parse_failure(self, reason: String) -> ExtractError {
        match self {
            DocumentKind::Pdf => ExtractError::Pdf(reason),
            DocumentKind::Docx => ExtractError::Docx(reason),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub format: DocumentKind,
    pub text: String,
}

/// Extracts trimmed text from document bytes of a known kind.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractError> {
    let text = match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| kind.parse_failure(e.to_string()))?
        }
        DocumentKind::Docx => {
            docx::extract_docx_text(data).map_err(|e| kind.parse_failure(format!("{e:#}")))?
        }
    };
    Ok(text.trim().to_string())
}

/// Validates the upload's format, then extracts its text on the blocking pool.
///
/// The upload's bytes are moved into the task and dropped when it ends,
/// whatever the outcome.
pub async fn extract_upload(file: UploadedFile) -> Result<ExtractedDocument, ExtractError> {
    let format = DocumentKind::from_file_name(&file.file_name)?;
    let UploadedFile { file_name, bytes } = file;
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || extract_text(format, &bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                format.parse_failure("document parser crashed on this file".to_string())
            } else {
                ExtractError::Aborted(e.to_string())
            }
        })??;

    if text.is_empty() {
        return Err(ExtractError::Empty { file_name });
    }

    debug!(file_name = %file_name, size, chars = text.len(), ?format, "Extracted document text");
    Ok(ExtractedDocument { format, text })
}
