//! Contact form model and submission flow shared by `client`, the server and
//! the CLI.
//!
//! This crate owns the field model, validation rules, the submission phase
//! machine and the wire types for `POST /api/contact`. It performs no I/O of
//! its own: delivery goes through the [`Mailer`] trait, implemented by the
//! server against the email provider and by tests with mocks.

pub mod config;
pub mod error;
pub mod input;
pub mod mailer;
pub mod session;
pub mod validate;
pub mod wire;

pub use config::{ConfigKey, ProviderConfig, ProviderCredentials};
pub use error::{ConfigurationError, MailerError, SubmissionError};
pub use input::{Field, FormInput};
pub use mailer::{Mailer, SendFormRequest};
pub use session::{ContactForm, SubmitAttempt, SubmitOutcome, SubmissionPhase};
pub use validate::{ValidationErrors, is_valid_email, validate};
pub use wire::{ContactResponse, ContactStatus};

/// Message shown to visitors for any submission failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
