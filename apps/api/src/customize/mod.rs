// Resume customization: prompt the model with resume + job description,
// segment its answer, render the PDF.
// All model calls go through llm_client via the ResumeRewriter seam.

pub mod handlers;
pub mod prompts;
pub mod rewriter;
pub mod service;
