use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MESSAGE_MIN_CHARS: usize = 10;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
    })
}

/// Contact form contents as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A field-level message shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

/// Runs every rule and reports at most one error per field, in form order.
pub fn validate_contact(draft: &ContactDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if draft.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&draft.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    if draft.subject.trim().is_empty() {
        errors.push(FieldError::new("subject", "Subject is required"));
    }

    if draft.message.trim().is_empty() {
        errors.push(FieldError::new("message", "Message is required"));
    } else if draft.message.chars().count() < MESSAGE_MIN_CHARS {
        errors.push(FieldError::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
pub(crate) fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Remote role".to_string(),
        message: "Would love to chat about a data platform role.".to_string(),
    }
}
