//! Static form settings

use std::time::Duration;

/// How long the simulated login takes before the form returns to idle.
pub const SUBMIT_DELAY_MS: u64 = 2000;

pub const LOGIN_LABEL: &str = "Login";
pub const LOGGING_IN_LABEL: &str = "Logging in…";

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required.";

/// Settings for a [`LoginController`](crate::form::LoginController)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Delay of the simulated submission
    pub submit_delay: Duration,
}

impl FormConfig {
    pub fn with_submit_delay(submit_delay: Duration) -> Self {
        Self { submit_delay }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(FormConfig::default().submit_delay, Duration::from_secs(2));
    }
}
