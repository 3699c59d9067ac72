#![allow(dead_code)]

// System directives for the completion service, one per mode.

use std::borrow::Cow;

use crate::polish::mode::{Mode, Tone};

/// Rewrite directive. Replace `{tone}` before sending.
pub const REWRITE_TEMPLATE: &str = r#"You are a text improvement assistant.

Rules (STRICT):
- Fix grammar and spelling ONLY.
- Keep the EXACT meaning and sentence structure.
- Do NOT rephrase or rewrite the sentence.
- Do NOT add new words unless fixing errors.
- Use a {tone} tone only for word choice adjustments.

Input: "create today's Status"
Output: "Create today's status."

Input: "the report need to be done by friday"
Output: "The report needs to be done by Friday."

Output ONLY the corrected text with NO explanations."#;

pub const RESUME_SYSTEM: &str = "Rewrite the text as a single strong resume bullet.
- Start with an action verb
- Be concise and professional
- Do NOT add explanations
Output ONLY the final sentence.";

pub const LINKEDIN_SYSTEM: &str = "Rewrite the text for LinkedIn.
- Professional and confident tone
- One short paragraph
- No emojis
Output ONLY the final text.";

pub const EMAIL_SYSTEM: &str = "Rewrite the text as a short, clear, professional email.
- Polite and confident
- No subject line
- No explanations
Output ONLY the email body.";

pub const PROMPT_SYSTEM: &str = r#"You are a prompt clarity assistant.

Rules (STRICT):
- Rewrite the input into a clear, reusable AI instruction.
- Preserve every name, piece of context, and the core intent exactly.
- Do NOT add assumptions, dates, subjects, or details that weren't implied.
- Do NOT generalize specific requests.
- If already clear, make minimal changes.

Examples:
Input: "create today's Status"
Output: "Create a status update for today."

Input: "write email about meeting"
Output: "Write an email about the meeting."

Input: "explain how to cook pasta"
Output: "Explain how to cook pasta."

Output ONLY the improved prompt with NO explanations."#;

/// Returns the system directive for a mode. `tone` only affects `Mode::Rewrite`.
pub fn system_prompt(mode: Mode, tone: Tone) -> Cow<'static, str> {
    match mode {
        Mode::Rewrite => Cow::Owned(REWRITE_TEMPLATE.replace("{tone}", tone.as_str())),
        Mode::Resume => Cow::Borrowed(RESUME_SYSTEM),
        Mode::LinkedIn => Cow::Borrowed(LINKEDIN_SYSTEM),
        Mode::Email => Cow::Borrowed(EMAIL_SYSTEM),
        Mode::Prompt => Cow::Borrowed(PROMPT_SYSTEM),
    }
}

/// String-keyed entry point: unknown modes get the prompt directive, unknown tones `neutral`.
pub fn select_template(mode: &str, tone: &str) -> Cow<'static, str> {
    system_prompt(Mode::from_param(Some(mode)), Tone::from_param(Some(tone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_a_directive() {
        for mode in Mode::ALL {
            assert!(
                !system_prompt(mode, Tone::Neutral).trim().is_empty(),
                "{} has an empty directive",
                mode.as_str()
            );
        }
    }

    #[test]
    fn test_unknown_mode_uses_prompt_directive() {
        assert_eq!(select_template("sonnet", "formal"), PROMPT_SYSTEM);
        assert_eq!(select_template("", ""), PROMPT_SYSTEM);
    }

    #[test]
    fn test_rewrite_contains_supplied_tone() {
        for tone in ["casual", "formal", "polite"] {
            let directive = select_template("rewrite", tone);
            assert!(
                directive.contains(&format!("Use a {tone} tone")),
                "rewrite directive missing tone '{tone}'"
            );
            assert!(!directive.contains("{tone}"));
        }
    }

    #[test]
    fn test_rewrite_carries_two_examples() {
        let directive = system_prompt(Mode::Rewrite, Tone::Casual);
        assert_eq!(directive.matches("Input: ").count(), 2);
        assert!(directive.contains("The report needs to be done by Friday."));
    }

    #[test]
    fn test_prompt_carries_three_examples() {
        assert_eq!(PROMPT_SYSTEM.matches("Input: ").count(), 3);
        assert_eq!(PROMPT_SYSTEM.matches("Output: ").count(), 3);
    }

    #[test]
    fn test_tone_ignored_outside_rewrite() {
        assert_eq!(
            system_prompt(Mode::Email, Tone::Casual),
            system_prompt(Mode::Email, Tone::Formal)
        );
    }

    #[test]
    fn test_mode_specific_constraints() {
        assert!(RESUME_SYSTEM.contains("action verb"));
        assert!(LINKEDIN_SYSTEM.contains("No emojis"));
        assert!(EMAIL_SYSTEM.contains("No subject line"));
    }
}
