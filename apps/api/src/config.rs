use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_COMPLETION_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_GRAMMAR_API_URL: &str = "https://api.languagetool.org/v2/check";

/// Which external service backs rewrite mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RewriteEngine {
    /// Positional corrections from the grammar service, applied locally.
    #[default]
    Grammar,
    /// The completion service with the tone-aware rewrite template.
    Completion,
}

impl FromStr for RewriteEngine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grammar" => Ok(RewriteEngine::Grammar),
            "completion" => Ok(RewriteEngine::Completion),
            other => bail!("REWRITE_ENGINE must be 'grammar' or 'completion', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub completion_api_url: String,
    pub completion_model: String,
    pub grammar_api_url: String,
    pub rewrite_engine: RewriteEngine,
    /// When false, completion-service errors surface as 500s instead of fallback text.
    pub fallback_on_service_error: bool,
    pub http_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            completion_api_url: env_or("COMPLETION_API_URL", DEFAULT_COMPLETION_API_URL),
            completion_model: env_or("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            grammar_api_url: env_or("GRAMMAR_API_URL", DEFAULT_GRAMMAR_API_URL),
            rewrite_engine: env_or("REWRITE_ENGINE", "grammar").parse()?,
            fallback_on_service_error: parse_bool(&env_or("FALLBACK_ON_SERVICE_ERROR", "true"))
                .context("FALLBACK_ON_SERVICE_ERROR must be true or false")?,
            http_timeout_secs: env_or("HTTP_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}
