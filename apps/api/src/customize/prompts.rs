// LLM prompt constants for resume customization.
// Reuses the cross-cutting format fragment from llm_client::prompts.

use crate::llm_client::prompts::RESUME_FORMAT_INSTRUCTION;

/// System prompt for customization. The format fragment is appended at runtime.
pub const CUSTOMIZE_SYSTEM_PREAMBLE: &str = "You are an expert resume writer and career coach. \
    You tailor an existing resume to a specific job description while keeping the candidate's \
    identity, contact details, employers, and education intact.";

/// Customization prompt template.
/// Replace: {resume}, {job_description}
pub const CUSTOMIZE_PROMPT_TEMPLATE: &str = r#"Analyze the provided master resume and job description and generate a customized resume that positions the candidate as the ideal fit for the specified role.

**Master Resume:**
{resume}

**Job Description:**
{job_description}

**Instructions:**
1. Use the core details from the master resume such as the candidate's **name**, **contact information**, **experience**, and **education** as the foundation.
2. Modify and rephrase the **Summary**, **Skills**, and **Experience** sections based on the job description to emphasize the candidate's relevant strengths.
3. Reorganize bullet points, add new responsibilities, and highlight relevant accomplishments that directly align with the key requirements and qualifications mentioned in the job description.
4. Ensure that the customized resume addresses the primary responsibilities and required skills of the job description, while also demonstrating how the candidate's past experience and achievements make them a strong candidate for the role.
5. If any relevant skills or projects are missing from the master resume but are crucial for the job, creatively integrate these into the customized resume.
6. Maintain a professional format and language throughout the resume, ensuring it is concise, clear, and impactful."#;

pub fn customize_system_prompt() -> String {
    format!("{CUSTOMIZE_SYSTEM_PREAMBLE} {RESUME_FORMAT_INSTRUCTION}")
}

/// Fills the template. The job description is substituted first so that a
/// literal "{job_description}" inside the resume is left untouched.
pub fn build_customize_prompt(resume: &str, job_description: &str) -> String {
    CUSTOMIZE_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replacen("{resume}", resume, 1)
}
