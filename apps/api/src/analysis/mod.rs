// Resume analysis pipeline: skill extraction, matching, scoring, feedback,
// ranking. All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod feedback;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod ranker;
pub mod scoring;
pub mod skills;
