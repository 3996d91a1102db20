//! Resume segmenter: classifies free resume text into typed lines.
//!
//! One implementation feeds both the PDF export and the on-screen preview.
//! Classification is a pure function of a single trimmed line; no state is
//! carried between lines.
//!
//! Rule order (first match wins):
//! 1. `SectionHeader` : only ASCII uppercase letters and whitespace, more than 2 chars
//! 2. `Bullet`        : starts with "•" or "–"; the glyph is stripped
//! 3. `NameTitle`     : exactly two capitalized words ("John Smith")
//! 4. `Body`          : everything else
//!
//! An all-caps two-word line ("JOHN SMITH") is therefore a `SectionHeader`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());
static NAME_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s[A-Z][a-z]+$").unwrap());

/// Glyphs that open a bullet line. Accepted by every render target.
pub const BULLET_GLYPHS: [char; 2] = ['•', '–'];

/// Minimum length (exclusive) of an all-caps line to count as a section header.
const SECTION_HEADER_MIN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    SectionHeader,
    Bullet,
    NameTitle,
    Body,
}

/// A single non-blank input line after classification.
///
/// `text` is trimmed; for `Bullet` lines the leading glyph is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered classified lines, one per non-blank input line.
///
/// Read-only once built; renderers only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassifiedDocument {
    lines: Vec<ClassifiedLine>,
}

impl ClassifiedDocument {
    pub fn lines(&self) -> &[ClassifiedLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines of the given kind.
    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a ClassifiedDocument {
    type Item = &'a ClassifiedLine;
    type IntoIter = std::slice::Iter<'a, ClassifiedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Splits `text` on newlines and classifies every non-blank line.
///
/// Empty input yields an empty document.
pub fn segment(text: &str) -> ClassifiedDocument {
    let lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect();

    ClassifiedDocument { lines }
}

/// Classifies one already-trimmed, non-blank line.
pub fn classify_line(line: &str) -> ClassifiedLine {
    if is_section_header(line) {
        return ClassifiedLine {
            kind: LineKind::SectionHeader,
            text: line.to_string(),
        };
    }

    if let Some(rest) = strip_bullet_glyph(line) {
        return ClassifiedLine {
            kind: LineKind::Bullet,
            text: rest.trim().to_string(),
        };
    }

    let kind = if NAME_TITLE_RE.is_match(line) {
        LineKind::NameTitle
    } else {
        LineKind::Body
    };

    ClassifiedLine {
        kind,
        text: line.to_string(),
    }
}

fn is_section_header(line: &str) -> bool {
    line.chars().count() > SECTION_HEADER_MIN_LEN && SECTION_HEADER_RE.is_match(line)
}

fn strip_bullet_glyph(line: &str) -> Option<&str> {
    BULLET_GLYPHS
        .iter()
        .find_map(|glyph| line.strip_prefix(*glyph))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(kind: LineKind, text: &str) -> ClassifiedLine {
        ClassifiedLine {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_segment_mixed_resume_scenario() {
        let doc = segment("EXPERIENCE\n• Led a team of 5\nJohn Smith\nBuilt internal tools.");
        assert_eq!(
            doc.lines(),
            &[
                line(LineKind::SectionHeader, "EXPERIENCE"),
                line(LineKind::Bullet, "Led a team of 5"),
                line(LineKind::NameTitle, "John Smith"),
                line(LineKind::Body, "Built internal tools."),
            ]
        );
    }

    #[test]
    fn test_segment_empty_input_is_empty() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_segment_drops_blank_and_whitespace_lines() {
        let doc = segment("\n   \nSUMMARY\n\t\n\r\nSeasoned engineer\n\n");
        assert_eq!(doc.len(), 2);
        assert!(doc.iter().all(|l| !l.text.trim().is_empty()));
    }

    #[test]
    fn test_segment_trims_and_handles_crlf() {
        let doc = segment("  SKILLS  \r\n   Rust, Go   \r\n");
        assert_eq!(
            doc.lines(),
            &[
                line(LineKind::SectionHeader, "SKILLS"),
                line(LineKind::Body, "Rust, Go"),
            ]
        );
    }

    #[test]
    fn test_section_header_requires_more_than_two_chars() {
        assert_eq!(classify_line("AB").kind, LineKind::Body);
        assert_eq!(classify_line("ABC").kind, LineKind::SectionHeader);
        assert_eq!(classify_line("WORK HISTORY").kind, LineKind::SectionHeader);
    }

    #[test]
    fn test_section_header_rejects_digits_and_punctuation() {
        assert_eq!(classify_line("EXPERIENCE:").kind, LineKind::Body);
        assert_eq!(classify_line("TOP 10").kind, LineKind::Body);
    }

    #[test]
    fn test_all_caps_two_words_is_section_header_not_name() {
        assert_eq!(classify_line("JOHN SMITH").kind, LineKind::SectionHeader);
    }

    #[test]
    fn test_bullet_accepts_both_glyphs() {
        assert_eq!(classify_line("• Shipped v2"), line(LineKind::Bullet, "Shipped v2"));
        assert_eq!(classify_line("– Shipped v3"), line(LineKind::Bullet, "Shipped v3"));
        assert_eq!(classify_line("•No space"), line(LineKind::Bullet, "No space"));
    }

    #[test]
    fn test_bullet_glyph_only_yields_empty_bullet() {
        assert_eq!(classify_line("•"), line(LineKind::Bullet, ""));
    }

    #[test]
    fn test_hyphen_is_not_a_bullet() {
        assert_eq!(classify_line("- Shipped v2").kind, LineKind::Body);
    }

    #[test]
    fn test_bullet_after_first_position_is_body() {
        assert_eq!(classify_line("Led • things").kind, LineKind::Body);
    }

    #[test]
    fn test_name_title_requires_exactly_two_capitalized_words() {
        assert_eq!(classify_line("Jane Doe").kind, LineKind::NameTitle);
        // Known false positive: two-word job titles look like names.
        assert_eq!(classify_line("Software Engineer").kind, LineKind::NameTitle);
        assert_eq!(classify_line("Jane Q Doe").kind, LineKind::Body);
        assert_eq!(classify_line("Jane doe").kind, LineKind::Body);
        assert_eq!(classify_line("McDonald Smith").kind, LineKind::Body);
        assert_eq!(classify_line("Jane  Doe").kind, LineKind::Body);
    }

    #[test]
    fn test_classification_is_position_independent() {
        let doc = segment("Jane Doe\nSUMMARY\nJane Doe\n• Jane Doe\nJane Doe");
        let kinds: Vec<_> = doc.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::NameTitle,
                LineKind::SectionHeader,
                LineKind::NameTitle,
                LineKind::Bullet,
                LineKind::NameTitle,
            ]
        );
    }

    #[test]
    fn test_segment_is_idempotent() {
        let input = "EDUCATION\n– BSc Computer Science\nAda Lovelace\nLondon, 1843";
        let first = serde_json::to_vec(&segment(input)).unwrap();
        let second = serde_json::to_vec(&segment(input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_reconstructs_non_blank_lines() {
        let input = "PROJECTS\n\n  •  Built a compiler  \nWrote docs\n– Ran CI\nJane Doe";
        let doc = segment(input);

        let expected: Vec<String> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                strip_bullet_glyph(l)
                    .map(|rest| rest.trim().to_string())
                    .unwrap_or_else(|| l.to_string())
            })
            .collect();
        let actual: Vec<String> = doc.iter().map(|l| l.text.clone()).collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_count_by_kind() {
        let doc = segment("SKILLS\n• Rust\n• Go\nMisc");
        assert_eq!(doc.count(LineKind::Bullet), 2);
        assert_eq!(doc.count(LineKind::SectionHeader), 1);
        assert_eq!(doc.count(LineKind::NameTitle), 0);
    }

    #[test]
    fn test_serializes_kind_as_snake_case() {
        let json = serde_json::to_value(segment("EXPERIENCE")).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "kind": "section_header", "text": "EXPERIENCE" }])
        );
    }
}
