// Interview engine: question generation, answer scoring, final aggregation.
// All LLM calls go through llm_client; each component has its own fallback.

pub mod finalize;
pub mod handlers;
pub mod prompts;
pub mod question_bank;
pub mod questions;
pub mod scoring;
