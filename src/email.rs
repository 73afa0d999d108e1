// src/email.rs
//! Subject/body split of the raw email text the model returns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SUBJECT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^subject\s*:\s*(.*)").expect("invalid subject pattern"));

/// A generated outreach email, held only long enough to render.
#[derive(Debug, Clone, Serialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Split an optional leading `Subject: ...` line off the model output.
    /// Without one, the subject is derived from the role.
    pub fn from_model_output(raw: &str, role: &str) -> Self {
        let text = raw.trim();
        match SUBJECT_LINE.captures(text) {
            Some(caps) => {
                let subject = caps
                    .get(1)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                let body = match text.split_once('\n') {
                    Some((_, rest)) => rest.trim().to_string(),
                    None => String::new(),
                };
                Self { subject, body }
            }
            None => Self {
                subject: format!("Business Opportunity - {}", role),
                body: text.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_subject_line_is_split_off() {
        let raw = "Subject: Partnering on your platform team\n\nHello,\nWe build things.";
        let draft = EmailDraft::from_model_output(raw, "Platform Engineer");
        assert_eq!(draft.subject, "Partnering on your platform team");
        assert_eq!(draft.body, "Hello,\nWe build things.");
    }

    #[test]
    fn test_subject_match_is_case_insensitive() {
        let raw = "SUBJECT:  Quick note \nBody text";
        let draft = EmailDraft::from_model_output(raw, "Engineer");
        assert_eq!(draft.subject, "Quick note");
        assert_eq!(draft.body, "Body text");
    }

    #[test]
    fn test_default_subject_when_missing() {
        let draft = EmailDraft::from_model_output("Hello,\nPlain email body.", "Data Engineer");
        assert_eq!(draft.subject, "Business Opportunity - Data Engineer");
        assert_eq!(draft.body, "Hello,\nPlain email body.");
    }

    #[test]
    fn test_subject_only_mid_text_is_not_split() {
        let raw = "Hello,\nSubject: this is body content, not a header";
        let draft = EmailDraft::from_model_output(raw, "Engineer");
        assert_eq!(draft.subject, "Business Opportunity - Engineer");
        assert_eq!(draft.body, raw);
    }
}
