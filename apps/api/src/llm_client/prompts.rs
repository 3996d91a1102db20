// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Output format the resume segmenter understands: ALL CAPS section titles,
/// "•" bullets, one item per line, no markdown.
pub const RESUME_FORMAT_INSTRUCTION: &str = "\
    Respond with the resume as plain text only. \
    Write every section title on its own line in ALL CAPITAL LETTERS with no punctuation \
    (for example: SUMMARY, SKILLS, EXPERIENCE, EDUCATION). \
    Start every bullet point with the character \"•\" followed by a space. \
    Put each heading, bullet, and paragraph on its own line. \
    Do NOT use markdown syntax such as #, *, ** or code fences. \
    Do NOT add commentary before or after the resume.";
