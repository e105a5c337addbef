// AI mentor endpoints: chat, startup ideas, skill analysis, resume review.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod cache;
pub mod handlers;
pub mod prompts;
