use std::sync::Arc;

use crate::config::Config;
use crate::grammar_client::GrammarChecker;
use crate::llm_client::Completer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient` against the configured endpoint.
    pub completer: Arc<dyn Completer>,
    /// Grammar backend for rule-based rewrites. Default: `LanguageToolClient`.
    pub grammar: Arc<dyn GrammarChecker>,
    pub config: Config,
}
