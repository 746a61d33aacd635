// Product copy generation: form options, prompt building, the single LLM call,
// output parsing, and the per-submission store behind regenerate/download.
// All LLM calls go through llm_client.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod length;
pub mod parser;
pub mod prompts;
pub mod store;
pub mod tone;
