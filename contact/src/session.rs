//! One contact form session: field values, errors and submission phase.
//!
//! DESIGN
//! ======
//! Every transition takes `&mut self`, so a session is driven from a single
//! task and needs no locking. `submit` runs the whole flow against a
//! [`Mailer`]; UI bindings that perform the provider call themselves use the
//! split API (`begin_submit` then `finish_success` / `finish_failure` /
//! `finish_rejected`), which enforces the same phase rules.
//!
//! ```text
//! Idle --valid submit--> Submitting --ok--> Submitted
//!                        Submitting --error--> Idle
//! ```

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::config::ProviderConfig;
use crate::error::SubmissionError;
use crate::input::{Field, FormInput};
use crate::mailer::{Mailer, SendFormRequest};
use crate::validate::{ValidationErrors, validate};

/// Submission lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Result of [`ContactForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Phase moved to `Submitting`; deliver this snapshot.
    Started(FormInput),
    /// Validation failed; errors are on the session.
    Invalid,
    /// A submission is already in flight.
    Busy,
    /// The session already delivered its message.
    Closed,
}

/// Non-error result of [`ContactForm::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Provider accepted the message; the session is `Submitted`.
    Sent,
    /// Validation failed; no provider call was made.
    Invalid,
    /// The session was `Submitting` or `Submitted`; nothing happened.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: FormInput,
    errors: ValidationErrors,
    phase: SubmissionPhase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an idle session pre-filled with `input`.
    #[must_use]
    pub fn with_input(input: FormInput) -> Self {
        Self { input, ..Self::default() }
    }

    #[must_use]
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Field-change handler. Clears the error for `field` only.
    ///
    /// Returns `false` (and changes nothing) once the session is `Submitted`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.input.set(field, value);
        self.errors.clear(field);
        true
    }

    /// Recompute all errors from the current input. Returns `true` when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.input);
        self.errors.is_empty()
    }

    /// Validate and, if valid, enter `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        match self.phase {
            SubmissionPhase::Submitting => return SubmitAttempt::Busy,
            SubmissionPhase::Submitted => return SubmitAttempt::Closed,
            SubmissionPhase::Idle => {}
        }
        if !self.validate() {
            return SubmitAttempt::Invalid;
        }
        self.phase = SubmissionPhase::Submitting;
        SubmitAttempt::Started(self.input.clone())
    }

    /// Provider accepted the message: `Submitting -> Submitted`, fields cleared.
    pub fn finish_success(&mut self) {
        if self.is_submitting() {
            self.phase = SubmissionPhase::Submitted;
            self.input = FormInput::default();
            self.errors = ValidationErrors::new();
        }
    }

    /// Delivery failed: `Submitting -> Idle`, fields kept for a retry.
    pub fn finish_failure(&mut self) {
        if self.is_submitting() {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// A remote validator refused the input: back to `Idle` with its errors.
    pub fn finish_rejected(&mut self, errors: ValidationErrors) {
        if self.is_submitting() {
            self.phase = SubmissionPhase::Idle;
            self.errors = errors;
        }
    }

    /// Begin a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, then deliver through `mailer` using `config`.
    ///
    /// Missing configuration fails before the provider is touched. Either
    /// failure leaves the session `Idle` with its input intact.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Configuration`] when a provider identifier
    /// is absent and [`SubmissionError::Provider`] when delivery fails.
    pub async fn submit(
        &mut self,
        config: &ProviderConfig,
        mailer: &dyn Mailer,
    ) -> Result<SubmitOutcome, SubmissionError> {
        let snapshot = match self.begin_submit() {
            SubmitAttempt::Started(snapshot) => snapshot,
            SubmitAttempt::Invalid => return Ok(SubmitOutcome::Invalid),
            SubmitAttempt::Busy | SubmitAttempt::Closed => return Ok(SubmitOutcome::Ignored),
        };

        let credentials = match config.resolve() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.finish_failure();
                let err = SubmissionError::from(e);
                tracing::error!(error = %err, code = err.error_code(), "contact provider not configured");
                return Err(err);
            }
        };

        match mailer.send_form(SendFormRequest::new(credentials, &snapshot)).await {
            Ok(()) => {
                self.finish_success();
                tracing::info!(template = credentials.template_id, "contact message delivered");
                Ok(SubmitOutcome::Sent)
            }
            Err(e) => {
                self.finish_failure();
                let err = SubmissionError::from(e);
                tracing::warn!(
                    error = %err,
                    code = err.error_code(),
                    retryable = err.retryable(),
                    "contact provider call failed"
                );
                Err(err)
            }
        }
    }
}
