// Proposal Generation Engine
// Implements: structure filtering, prompt construction, floor-area extraction,
// cost estimation, and the sequential per-structure generation loop.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
