//! DOCX text extraction: reads `word/document.xml` out of the zip container.
//!
//! One output line per non-blank `<w:p>` paragraph. Only `<w:t>` runs carry
//! text; `<w:tab/>` becomes a tab and `<w:br/>` / `<w:cr/>` a line break.

use std::io::{Cursor, Read};

use anyhow::Context;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

pub fn extract_docx_text(data: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).context("not a DOCX container")?;

    let mut document_file = archive
        .by_name("word/document.xml")
        .context("missing word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    paragraphs_from_xml(&xml)
}

fn paragraphs_from_xml(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    flush_paragraph(&mut current, &mut lines);
                    in_paragraph = false;
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) if in_paragraph => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_paragraph && in_text => {
                current.push_str(&e.xml_content()?);
            }
            Event::GeneralRef(e) if in_paragraph && in_text => {
                if let Some(ch) = e.resolve_char_ref()? {
                    current.push(ch);
                } else if let Some(resolved) = resolve_predefined_entity(&e.decode()?) {
                    current.push_str(resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    Ok(lines.join("\n"))
}

fn flush_paragraph(current: &mut String, lines: &mut Vec<String>) {
    let text = current.trim();
    if !text.is_empty() {
        lines.push(text.to_string());
    }
    current.clear();
}
