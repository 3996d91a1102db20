// Render targets for classified resumes.
// Both targets consume the same `ClassifiedDocument` from the segmenter.
// PDF layout and encoding are CPU-bound; callers run them inside spawn_blocking.

pub mod handlers;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod preview;

use thiserror::Error;

use crate::segmenter::ClassifiedDocument;

pub use metrics::{default_page_config, PageConfig};
pub use pdf::PdfRenderer;
pub use preview::{PreviewNode, PreviewRenderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// A sink that turns a classified resume into a presentable artifact.
pub trait RenderTarget {
    type Output;

    fn render(&self, document: &ClassifiedDocument) -> Result<Self::Output, RenderError>;
}
