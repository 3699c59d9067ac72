// Text polishing: template selection, deterministic fallback, grammar edits,
// and the request pipeline that ties them to the external services.
// All completion calls go through llm_client; grammar calls through grammar_client.

pub mod edits;
pub mod fallback;
pub mod handlers;
pub mod mode;
pub mod prompts;
pub mod service;
