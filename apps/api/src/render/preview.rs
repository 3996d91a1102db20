//! Screen preview render target: one presentation node per classified line,
//! plus dividers between sections.

use serde::{Deserialize, Serialize};

use crate::render::{RenderError, RenderTarget};
use crate::segmenter::{ClassifiedDocument, ClassifiedLine, LineKind};

/// A block in the on-screen preview. Clients map each variant to a style:
/// heading, list item, italic subtitle, paragraph, horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreviewNode {
    Heading { text: String },
    ListItem { text: String },
    Subtitle { text: String },
    Paragraph { text: String },
    Divider,
}

impl From<&ClassifiedLine> for PreviewNode {
    fn from(line: &ClassifiedLine) -> Self {
        let text = line.text.clone();
        match line.kind {
            LineKind::SectionHeader => PreviewNode::Heading { text },
            LineKind::Bullet => PreviewNode::ListItem { text },
            LineKind::NameTitle => PreviewNode::Subtitle { text },
            LineKind::Body => PreviewNode::Paragraph { text },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewRenderer;

impl RenderTarget for PreviewRenderer {
    type Output = Vec<PreviewNode>;

    fn render(&self, document: &ClassifiedDocument) -> Result<Vec<PreviewNode>, RenderError> {
        let nodes = document.iter().map(PreviewNode::from).collect();
        Ok(insert_section_dividers(nodes))
    }
}

/// Inserts a `Divider` before every heading except the first one.
pub fn insert_section_dividers(nodes: Vec<PreviewNode>) -> Vec<PreviewNode> {
    let (out, _) = nodes.into_iter().fold(
        (Vec::new(), false),
        |(mut out, seen_heading), node| {
            let is_heading = matches!(node, PreviewNode::Heading { .. });
            if is_heading && seen_heading {
                out.push(PreviewNode::Divider);
            }
            out.push(node);
            (out, seen_heading || is_heading)
        },
    );
    out
}
