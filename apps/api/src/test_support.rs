//! Shared fixtures for unit and router tests.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};

use crate::config::Config;
use crate::customize::rewriter::ResumeRewriter;
use crate::errors::AppError;
use crate::render::default_page_config;
use crate::state::AppState;

const BOUNDARY: &str = "resumefit-test-boundary";

/// Builds an in-memory zip archive from `(path, contents)` pairs.
pub fn zip_fixture(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (path, contents) in entries {
        writer
            .start_file(*path, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A minimal DOCX with one `<w:p>` per entry.
pub fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            let escaped = p
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            format!(r#"<w:p><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:p>"#)
        })
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    zip_fixture(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", &document),
    ])
}

pub enum Part {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: &'static str,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn text(name: &'static str, value: &str) -> Self {
        Part::Text {
            name,
            value: value.to_string(),
        }
    }

    pub fn file(name: &'static str, file_name: &'static str, bytes: Vec<u8>) -> Self {
        Part::File {
            name,
            file_name,
            bytes,
        }
    }
}

/// Encodes `parts` as a `multipart/form-data` POST to `uri`.
pub fn multipart_request(uri: &str, parts: Vec<Part>) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Records every call and answers with a fixed reply, or fails like a
/// model outage when built with `failing()`.
#[derive(Clone)]
pub struct StubRewriter {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubRewriter {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResumeRewriter for StubRewriter {
    async fn rewrite(&self, resume_text: &str, job_description: &str) -> Result<String, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((resume_text.to_string(), job_description.to_string()));
        self.reply
            .clone()
            .ok_or_else(|| AppError::Llm("API error (status 503): overloaded".to_string()))
    }
}

pub fn test_state(rewriter: StubRewriter) -> AppState {
    AppState {
        rewriter: Arc::new(rewriter),
        config: Config::for_tests(),
        page_config: default_page_config(),
    }
}
