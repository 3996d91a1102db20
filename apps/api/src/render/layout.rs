//! Page layout pass: wraps classified lines and distributes them over pages.
//!
//! Pure and deterministic. Produces positioned text runs in PDF user space
//! (origin bottom-left, y grows upward); `pdf.rs` only encodes them.

use serde::Serialize;

use crate::render::metrics::{get_metrics, FontFace, PageConfig};
use crate::segmenter::{ClassifiedDocument, LineKind};

/// Bullet marker drawn in the hanging indent of every bullet block.
pub const BULLET_MARKER: &str = "•";

/// Visual treatment of one block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub face: FontFace,
    pub size_pt: f32,
    /// Text indent from the left margin.
    pub indent_pt: f32,
    /// Whether a bullet marker is drawn before the first line.
    pub marker: bool,
    /// Blank lines (in this block's line height) after the block.
    pub gap_lines: f32,
}

impl BlockStyle {
    pub fn for_kind(kind: LineKind, config: &PageConfig) -> Self {
        match kind {
            LineKind::SectionHeader => BlockStyle {
                face: FontFace::Bold,
                size_pt: config.heading_size_pt,
                indent_pt: 0.0,
                marker: false,
                gap_lines: 2.0,
            },
            LineKind::Bullet => BlockStyle {
                face: FontFace::Regular,
                size_pt: config.body_size_pt,
                indent_pt: config.bullet_indent_pt,
                marker: true,
                gap_lines: 1.0,
            },
            LineKind::NameTitle => BlockStyle {
                face: FontFace::Oblique,
                size_pt: config.body_size_pt,
                indent_pt: 0.0,
                marker: false,
                gap_lines: 1.0,
            },
            LineKind::Body => BlockStyle {
                face: FontFace::Regular,
                size_pt: config.body_size_pt,
                indent_pt: 0.0,
                marker: false,
                gap_lines: 1.0,
            },
        }
    }
}

/// A run of text placed at a baseline position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub face: FontFace,
    pub size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    pub runs: Vec<PlacedText>,
}

/// Lays out `document` top to bottom, breaking pages when the next line
/// would cross the bottom margin. Always returns at least one page.
pub fn layout_document(document: &ClassifiedDocument, config: &PageConfig) -> Vec<PageLayout> {
    let top = config.page_height_pt - config.margin_pt;
    let bottom = config.margin_pt;

    let mut pages = Vec::new();
    let mut page = PageLayout::default();
    let mut cursor = top;

    for line in document {
        let style = BlockStyle::for_kind(line.kind, config);
        let metrics = get_metrics(style.face);
        let leading = style.size_pt * config.line_spacing;
        let max_width_em = (config.text_width_pt() - style.indent_pt) / style.size_pt;

        let mut wrapped = metrics.wrap(&line.text, max_width_em);
        if wrapped.is_empty() {
            // Glyph-only bullet: still occupies one line for its marker.
            wrapped.push(String::new());
        }

        for (i, text) in wrapped.into_iter().enumerate() {
            if cursor - leading < bottom && !page.runs.is_empty() {
                pages.push(std::mem::take(&mut page));
                cursor = top;
            }

            let baseline = cursor - style.size_pt;
            let x = config.margin_pt + style.indent_pt;

            if i == 0 && style.marker {
                page.runs.push(PlacedText {
                    x: config.margin_pt + style.indent_pt / 3.0,
                    y: baseline,
                    face: style.face,
                    size_pt: style.size_pt,
                    text: BULLET_MARKER.to_string(),
                });
            }
            if !text.is_empty() {
                page.runs.push(PlacedText {
                    x,
                    y: baseline,
                    face: style.face,
                    size_pt: style.size_pt,
                    text,
                });
            }

            cursor -= leading;
        }

        cursor -= style.gap_lines * leading;
    }

    if !page.runs.is_empty() || pages.is_empty() {
        pages.push(page);
    }
    pages
}
