//! Grammar client — positional corrections from a LanguageTool-compatible service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::polish::edits::Edit;

/// Language tag sent with every check.
pub const LANGUAGE: &str = "en-US";

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Carried in `AppState` as `Arc<dyn GrammarChecker>`.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Returns one edit per match that carries at least one suggestion.
    async fn check(&self, text: &str) -> Result<Vec<Edit>, GrammarError>;
}

#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    pub matches: Vec<GrammarMatch>,
}

#[derive(Debug, Deserialize)]
pub struct GrammarMatch {
    /// UTF-16 code units from the start of the checked text.
    pub offset: usize,
    pub length: usize,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
pub struct Replacement {
    pub value: String,
}

impl CheckResponse {
    /// Keeps only the top-ranked suggestion of each match.
    pub fn into_edits(self) -> Vec<Edit> {
        self.matches
            .into_iter()
            .filter_map(|m| {
                let top = m.replacements.into_iter().next()?;
                Some(Edit {
                    offset: m.offset,
                    length: m.length,
                    replacement: top.value,
                })
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct LanguageToolClient {
    client: Client,
    api_url: String,
}

impl LanguageToolClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, GrammarError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
        })
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<Edit>, GrammarError> {
        let response = self
            .client
            .post(&self.api_url)
            .form(&[("text", text), ("language", LANGUAGE)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Grammar API returned {}: {}", status, body);
            return Err(GrammarError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CheckResponse = serde_json::from_str(&body)?;
        debug!("Grammar check returned {} match(es)", parsed.matches.len());

        Ok(parsed.into_edits())
    }
}
