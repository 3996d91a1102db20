//! PDF render target. Encodes the layout pass output with `lopdf`.

use std::io::Write;

use chrono::Utc;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::render::layout::{layout_document, PageLayout};
use crate::render::metrics::{FontFace, PageConfig};
use crate::render::{RenderError, RenderTarget};
use crate::segmenter::ClassifiedDocument;

const DOCUMENT_TITLE: &str = "Customized Resume";

/// Renders a classified resume into a paginated PDF byte stream.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    page: PageConfig,
}

impl PdfRenderer {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    fn encode_page(&self, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let mut content = Content { operations: vec![] };
        let mut active: Option<(FontFace, f32)> = None;

        content.operations.push(Operation::new("BT", vec![]));
        for run in &layout.runs {
            if active != Some((run.face, run.size_pt)) {
                content.operations.push(Operation::new(
                    "Tf",
                    vec![run.face.resource_name().into(), run.size_pt.into()],
                ));
                active = Some((run.face, run.size_pt));
            }
            // Tm sets an absolute position, so runs need no relative bookkeeping.
            content.operations.push(Operation::new(
                "Tm",
                vec![
                    1.into(),
                    0.into(),
                    0.into(),
                    1.into(),
                    run.x.into(),
                    run.y.into(),
                ],
            ));
            content.operations.push(Operation::new(
                "Tj",
                vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
            ));
        }
        content.operations.push(Operation::new("ET", vec![]));

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        Ok(encoder.finish()?)
    }

    fn add_fonts(document: &mut Document) -> ObjectId {
        let mut fonts = lopdf::Dictionary::new();
        for face in FontFace::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        document.add_object(dictionary! { "Font" => fonts })
    }
}

impl RenderTarget for PdfRenderer {
    type Output = Vec<u8>;

    fn render(&self, classified: &ClassifiedDocument) -> Result<Vec<u8>, RenderError> {
        let pages = layout_document(classified, &self.page);

        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let resources_id = Self::add_fonts(&mut document);

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for layout in &pages {
            let stream = Stream::new(
                dictionary! { "Filter" => "FlateDecode" },
                self.encode_page(layout)?,
            );
            let content_id = document.add_object(stream);
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.page.page_width_pt.into(),
                    self.page.page_height_pt.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = document.add_object(dictionary! {
            "Title" => Object::string_literal(DOCUMENT_TITLE),
            "Producer" => Object::string_literal(concat!("resumefit ", env!("CARGO_PKG_VERSION"))),
            "CreationDate" => Object::string_literal(format!("D:{}Z", Utc::now().format("%Y%m%d%H%M%S"))),
        });
        document.trailer.set("Root", catalog_id);
        document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;

        debug!(pages = pages.len(), bytes = bytes.len(), "PDF rendered");
        Ok(bytes)
    }
}

/// Maps text to WinAnsiEncoding bytes. Unmappable characters become `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::metrics::default_page_config;
    use crate::segmenter::segment;

    fn render(text: &str) -> Vec<u8> {
        PdfRenderer::new(default_page_config())
            .render(&segment(text))
            .unwrap()
    }

    #[test]
    fn test_output_has_pdf_signature() {
        let bytes = render("EXPERIENCE\n• Led a team of 5\nJohn Smith\nBuilt internal tools.");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_document_still_renders() {
        let bytes = render("");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_declares_all_font_faces() {
        let bytes = render("SKILLS\nRust");
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("Helvetica-Bold"));
        assert!(raw.contains("Helvetica-Oblique"));
        assert!(raw.contains("WinAnsiEncoding"));
    }

    #[test]
    fn test_page_count_matches_layout() {
        let text: String = (0..120).map(|i| format!("Line number {i}\n")).collect();
        let expected = layout_document(&segment(&text), &default_page_config()).len();
        let bytes = render(&text);
        let raw = String::from_utf8_lossy(&bytes);
        assert!(expected > 1);
        assert!(raw.contains(&format!("/Count {expected}")), "missing page count {expected}");
    }

    #[test]
    fn test_to_win_ansi_maps_typographic_glyphs() {
        assert_eq!(to_win_ansi("a•b–c"), vec![b'a', 0x95, b'b', 0x96, b'c']);
        assert_eq!(to_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_to_win_ansi_maps_accented_latin_in_0x80_range() {
        assert_eq!(to_win_ansi("Škoda"), vec![0x8A, b'k', b'o', b'd', b'a']);
        assert_eq!(to_win_ansi("Œuvre"), vec![0x8C, b'u', b'v', b'r', b'e']);
        assert_eq!(to_win_ansi("žŸƒ†‰"), vec![0x9E, 0x9F, 0x83, 0x86, 0x89]);
        // C1 control characters have no glyph.
        assert_eq!(to_win_ansi("\u{0081}"), b"?".to_vec());
    }
}
