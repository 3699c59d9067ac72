//! In-process stand-ins for the external services.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{Config, RewriteEngine};
use crate::grammar_client::{GrammarChecker, GrammarError};
use crate::llm_client::{Completer, LlmError};
use crate::polish::edits::Edit;
use crate::state::AppState;

/// Scripted completion outcome.
#[derive(Debug, Clone)]
pub enum Scripted {
    Text(&'static str),
    Empty,
    Status(u16),
    Malformed,
}

pub struct FakeCompleter {
    outcome: Scripted,
    last_system: Mutex<Option<String>>,
}

impl FakeCompleter {
    pub fn new(outcome: Scripted) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            last_system: Mutex::new(None),
        })
    }

    pub fn last_system(&self) -> Option<String> {
        self.last_system.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completer for FakeCompleter {
    async fn complete(&self, system: &str, _text: &str) -> Result<Option<String>, LlmError> {
        *self.last_system.lock().unwrap() = Some(system.to_string());
        match &self.outcome {
            Scripted::Text(t) => Ok(Some(t.to_string())),
            Scripted::Empty => Ok(None),
            Scripted::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream unavailable".to_string(),
            }),
            Scripted::Malformed => Err(LlmError::Parse(
                serde_json::from_str::<serde_json::Value>("{not json").unwrap_err(),
            )),
        }
    }
}

pub enum FakeGrammar {
    Edits(Vec<Edit>),
    Down,
}

#[async_trait]
impl GrammarChecker for FakeGrammar {
    async fn check(&self, _text: &str) -> Result<Vec<Edit>, GrammarError> {
        match self {
            FakeGrammar::Edits(edits) => Ok(edits.clone()),
            FakeGrammar::Down => Err(GrammarError::Api {
                status: 503,
                message: "maintenance".to_string(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        groq_api_key: "test-key".to_string(),
        completion_api_url: "http://completion.invalid".to_string(),
        completion_model: "test-model".to_string(),
        grammar_api_url: "http://grammar.invalid".to_string(),
        rewrite_engine: RewriteEngine::Grammar,
        fallback_on_service_error: true,
        http_timeout_secs: 1,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(completer: Arc<FakeCompleter>, grammar: FakeGrammar) -> AppState {
    AppState {
        completer,
        grammar: Arc::new(grammar),
        config: test_config(),
    }
}
