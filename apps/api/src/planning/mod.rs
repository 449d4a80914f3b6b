// Planning: email text → job records → completeness → reply, summary and briefing texts.
// All LLM calls go through llm_client; the extractor is the only caller.

pub mod completeness;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod templates;
