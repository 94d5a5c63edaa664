//! Submission errors.
//!
//! Per-field validation problems are not errors here; they live in
//! [`crate::ValidationErrors`] and never reach the logs. Everything below is
//! an operator concern: it is logged with a stable code and shown to the
//! visitor only as [`crate::GENERIC_FAILURE_MESSAGE`].

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use crate::config::ConfigKey;

/// One or more provider identifiers are missing from the deployment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("provider configuration incomplete: missing {}", join_keys(.missing))]
pub struct ConfigurationError {
    pub missing: Vec<ConfigKey>,
}

fn join_keys(keys: &[ConfigKey]) -> String {
    keys.iter()
        .map(|k| k.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reported by a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailerError {
    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("provider request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("provider rejected message: status {status}")]
    Response { status: u16, body: String },
}

/// Why an accepted submission did not reach `Submitted`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Provider(#[from] MailerError),
}

impl SubmissionError {
    /// Stable code for logs and API consumers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "E_CONFIG_MISSING",
            Self::Provider(MailerError::Request(_)) => "E_PROVIDER_REQUEST",
            Self::Provider(MailerError::Response { .. }) => "E_PROVIDER_RESPONSE",
        }
    }

    /// Whether the visitor resubmitting could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            Self::Configuration(_) => false,
            Self::Provider(MailerError::Request(_)) => true,
            Self::Provider(MailerError::Response { status, .. }) => matches!(status, 429 | 500..=599),
        }
    }

    /// Text safe to show a visitor.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        crate::GENERIC_FAILURE_MESSAGE
    }
}
