// Feedback generation: section catalog, prompt composition, the manuscript-bound
// proxy to upstream, and classification of what upstream sends back.
// All upstream calls go through llm_client; nothing here talks HTTP directly.

pub mod catalog;
pub mod classify;
pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod proxy;
