//! Form data types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Email,
    Password,
}

impl FieldName {
    pub const ALL: [FieldName; 2] = [FieldName::Email, FieldName::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress email/password pair held by the form.
///
/// Serializes to the body a login request would carry. `Debug` never
/// prints the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
}

impl CredentialsDraft {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
        }
    }
}

impl fmt::Debug for CredentialsDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-field validation messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FieldName, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    /// Replace or clear the message for one field
    pub fn set(&mut self, field: FieldName, message: Option<&'static str>) {
        match message {
            Some(message) => self.insert(field, message),
            None => self.remove(field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Identifies one submission so late completions can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(pub(crate) u64);

/// Where the form is in its submission lifecycle.
///
/// Validation runs synchronously inside a submit, so it never shows up here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting(SubmitTicket),
}

/// Why a submit did not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("The form is no longer mounted")]
    Unmounted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let draft = CredentialsDraft::new("user@example.com", "hunter2");
        let printed = format!("{:?}", draft);

        assert!(printed.contains("user@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_draft_serializes_as_login_body() {
        let draft = CredentialsDraft::new("user@example.com", "secret");
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "email": "user@example.com", "password": "secret" })
        );
    }

    #[test]
    fn test_field_names_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&FieldName::Email).unwrap(), "\"email\"");
        assert_eq!(FieldName::Password.to_string(), "password");
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Email, Some("bad"));
        assert_eq!(errors.get(FieldName::Email), Some("bad"));
        assert_eq!(errors.len(), 1);

        errors.set(FieldName::Email, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_rejection_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::Email, "bad");
        errors.insert(FieldName::Password, "missing");

        assert_eq!(
            SubmitRejected::Invalid(errors).to_string(),
            "Validation failed for 2 field(s)"
        );
        assert_eq!(
            SubmitRejected::InFlight.to_string(),
            "A submission is already in progress"
        );
    }
}
