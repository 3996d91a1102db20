//! Axum route handlers for the preview API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::{PreviewNode, PreviewRenderer, RenderTarget};
use crate::segmenter::{segment, ClassifiedDocument};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub document: ClassifiedDocument,
    pub nodes: Vec<PreviewNode>,
}

/// POST /api/preview
///
/// Segments resume text and returns the screen presentation tree.
/// Empty text yields empty `document` and `nodes`.
pub async fn handle_preview(
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Json(request) = payload?;
    let document = segment(&request.text);
    let nodes = PreviewRenderer.render(&document)?;
    Ok(Json(PreviewResponse { document, nodes }))
}
