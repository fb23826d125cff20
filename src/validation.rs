//! Field rules for the login form

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{INVALID_EMAIL_MESSAGE, PASSWORD_REQUIRED_MESSAGE};
use crate::types::{CredentialsDraft, FieldErrors, FieldName};

/// local-part "@" domain with at least one dot, no whitespace anywhere
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A single field's constraint and the message shown when it fails
pub struct FieldRule {
    pub field: FieldName,
    pub required: bool,
    pub pattern: Option<&'static LazyLock<Regex>>,
    pub message: &'static str,
}

impl FieldRule {
    pub fn check(&self, value: &str) -> Option<&'static str> {
        if self.required && value.is_empty() {
            return Some(self.message);
        }
        match self.pattern {
            Some(pattern) if !pattern.is_match(value) => Some(self.message),
            _ => None,
        }
    }
}

pub static RULES: [FieldRule; 2] = [
    FieldRule {
        field: FieldName::Email,
        required: true,
        pattern: Some(&EMAIL_REGEX),
        message: INVALID_EMAIL_MESSAGE,
    },
    FieldRule {
        field: FieldName::Password,
        required: true,
        pattern: None,
        message: PASSWORD_REQUIRED_MESSAGE,
    },
];

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check one field's value against its rules
pub fn validate_field(field: FieldName, value: &str) -> Option<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| rule.check(value))
}

/// Check every field of the draft in one pass
pub fn validate(draft: &CredentialsDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in FieldName::ALL {
        if let Some(message) = validate_field(field, draft.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}
