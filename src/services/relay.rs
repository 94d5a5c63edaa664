//! Server-side contact relay.
//!
//! Runs one `ContactForm` session per request: validate, check the rate
//! limiter, then deliver through the configured mailer. Validation failures
//! are returned to the caller and never logged; delivery failures are logged
//! by the session itself.

use std::net::IpAddr;

use contact::{ContactForm, FormInput, SubmissionError, SubmitOutcome, ValidationErrors};
use tracing::Instrument;
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::state::AppState;

/// What happened to one relayed submission.
#[derive(Debug, PartialEq, Eq)]
pub enum RelayReply {
    Sent,
    Invalid(ValidationErrors),
    RateLimited(RateLimitError),
    Failed(SubmissionError),
}

/// Relay `input` from `client` to the provider.
pub async fn relay_contact(state: &AppState, client: IpAddr, input: FormInput) -> RelayReply {
    let span = tracing::info_span!("contact_relay", request_id = %Uuid::new_v4(), %client);
    relay_inner(state, client, input).instrument(span).await
}

async fn relay_inner(state: &AppState, client: IpAddr, input: FormInput) -> RelayReply {
    let mut form = ContactForm::with_input(input);
    if !form.validate() {
        return RelayReply::Invalid(form.errors().clone());
    }

    if let Err(e) = state.rate_limiter.check_and_record(client) {
        tracing::warn!(error = %e, "contact submission throttled");
        return RelayReply::RateLimited(e);
    }

    match form.submit(&state.provider, state.mailer.as_ref()).await {
        Ok(SubmitOutcome::Sent) => RelayReply::Sent,
        // A fresh session cannot be `Ignored`; both arms mean "not accepted".
        Ok(SubmitOutcome::Invalid | SubmitOutcome::Ignored) => RelayReply::Invalid(form.errors().clone()),
        Err(e) => RelayReply::Failed(e),
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
