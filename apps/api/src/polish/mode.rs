//! Request selectors: which template to use and, for rewrites, which register.

use serde::Serialize;

/// Output style requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Rewrite,
    #[default]
    Prompt,
    Resume,
    LinkedIn,
    Email,
}

impl Mode {
    #[allow(dead_code)]
    pub const ALL: [Mode; 5] = [
        Mode::Rewrite,
        Mode::Prompt,
        Mode::Resume,
        Mode::LinkedIn,
        Mode::Email,
    ];

    /// Total parse: missing, empty, or unrecognized values select `Prompt`.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "rewrite" => Mode::Rewrite,
            "resume" => Mode::Resume,
            "linkedin" => Mode::LinkedIn,
            "email" => Mode::Email,
            _ => Mode::Prompt,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Rewrite => "rewrite",
            Mode::Prompt => "prompt",
            Mode::Resume => "resume",
            Mode::LinkedIn => "linkedin",
            Mode::Email => "email",
        }
    }
}

/// Word-choice register. Only consulted in rewrite mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Formal,
    Polite,
    #[default]
    Neutral,
}

impl Tone {
    /// Total parse: missing, empty, or unrecognized values select `Neutral`.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "casual" => Tone::Casual,
            "formal" => Tone::Formal,
            "polite" => Tone::Polite,
            _ => Tone::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Polite => "polite",
            Tone::Neutral => "neutral",
        }
    }
}
