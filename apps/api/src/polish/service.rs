//! Polish pipeline: validate → route by mode → external call → fallback.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::RewriteEngine;
use crate::errors::AppError;
use crate::grammar_client::GrammarChecker;
use crate::llm_client::{Completer, LlmError};
use crate::polish::edits::apply_edits;
use crate::polish::fallback::basic_polish;
use crate::polish::mode::{Mode, Tone};
use crate::polish::prompts::system_prompt;
use crate::state::AppState;

/// Maximum accepted input, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

#[derive(Debug, Default, Deserialize)]
pub struct PolishRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PolishResponse {
    pub result: String,
}

/// Rejects missing, blank, or oversized text. Returns the text untouched.
pub fn validate_text(text: Option<&str>) -> Result<&str, AppError> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(AppError::Validation("Text is required".to_string())),
    };
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::Validation("Text too long".to_string()));
    }
    Ok(text)
}

pub async fn polish_text(
    state: &AppState,
    request: PolishRequest,
) -> Result<PolishResponse, AppError> {
    let text = validate_text(request.text.as_deref())?;
    let mode = Mode::from_param(request.mode.as_deref());
    let tone = Tone::from_param(request.tone.as_deref());

    let result = match (mode, state.config.rewrite_engine) {
        (Mode::Rewrite, RewriteEngine::Grammar) => {
            rewrite_with_grammar(state.grammar.as_ref(), text).await
        }
        (Mode::Rewrite, RewriteEngine::Completion) => {
            complete(state.completer.as_ref(), mode, tone, text, true).await?
        }
        _ => {
            complete(
                state.completer.as_ref(),
                mode,
                tone,
                text,
                state.config.fallback_on_service_error,
            )
            .await?
        }
    };

    Ok(PolishResponse { result })
}

/// Rule-based rewrite. Never fails: a grammar-service error yields the fallback.
pub async fn rewrite_with_grammar(grammar: &dyn GrammarChecker, text: &str) -> String {
    match grammar.check(text).await {
        Ok(edits) => apply_edits(text, &edits),
        Err(e) => {
            warn!("Grammar check failed, using fallback polish: {e}");
            basic_polish(text)
        }
    }
}

/// Calls the completion service with the mode's directive.
///
/// Absent content always falls back. Call errors fall back when `degrade` is
/// set, otherwise they map to a 500.
async fn complete(
    completer: &dyn Completer,
    mode: Mode,
    tone: Tone,
    text: &str,
    degrade: bool,
) -> Result<String, AppError> {
    let system = system_prompt(mode, tone);

    match completer.complete(&system, text).await {
        Ok(Some(completion)) => Ok(completion),
        Ok(None) => {
            info!("Completion for mode '{}' was empty, using fallback polish", mode.as_str());
            Ok(basic_polish(text))
        }
        Err(e) if degrade => {
            warn!("Completion for mode '{}' failed, using fallback polish: {e}", mode.as_str());
            Ok(basic_polish(text))
        }
        Err(LlmError::Api { status, message }) => {
            Err(AppError::AiService(format!("status {status}: {message}")))
        }
        Err(e) => Err(AppError::AiProcessing(e.to_string())),
    }
}
