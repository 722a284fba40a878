// Profile & CV analysis engine.
// Implements: sector taxonomy, local keyword scoring, canned content
// generation, remote-first orchestration with local fallback.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod content;
pub mod engine;
pub mod handlers;
pub mod remote;
pub mod scorer;
pub mod skills;
pub mod taxonomy;
