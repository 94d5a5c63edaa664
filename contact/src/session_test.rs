use std::sync::Mutex;

use super::*;
use crate::config::ConfigKey;
use crate::error::MailerError;
use crate::validate::{EMAIL_INVALID, NAME_REQUIRED};

// =========================================================================
// MockMailer
// =========================================================================

struct MockMailer {
    calls: Mutex<Vec<(String, String, String, FormInput)>>,
    fail_with: Option<MailerError>,
}

impl MockMailer {
    fn ok() -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_with: None }
    }

    fn failing(err: MailerError) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_with: Some(err) }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send_form(&self, request: SendFormRequest<'_>) -> Result<(), MailerError> {
        self.calls.lock().unwrap().push((
            request.service_id.to_owned(),
            request.template_id.to_owned(),
            request.public_key.to_owned(),
            request.fields.clone(),
        ));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn config() -> ProviderConfig {
    ProviderConfig {
        service_id: Some("service_1".into()),
        template_id: Some("template_1".into()),
        public_key: Some("public_1".into()),
        private_key: None,
    }
}

fn filled() -> ContactForm {
    ContactForm::with_input(FormInput {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        subject: "Hello".into(),
        message: "Let's build something".into(),
    })
}

// =========================================================================
// field changes
// =========================================================================

#[test]
fn new_session_is_idle_and_empty() {
    let form = ContactForm::new();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.input().is_empty());
    assert!(form.errors().is_empty());
}

#[test]
fn changing_a_field_clears_only_its_error() {
    let mut form = ContactForm::new();
    assert!(!form.validate());
    assert_eq!(form.errors().len(), 3);

    assert!(form.set_field(Field::Email, "x"));
    assert!(form.error(Field::Email).is_none());
    assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
    assert!(form.error(Field::Message).is_some());
}

#[test]
fn changing_a_field_without_error_leaves_others() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Jo");
    form.validate();
    let before = form.errors().clone();
    form.set_field(Field::Subject, "anything");
    assert_eq!(form.errors(), &before);
}

#[test]
fn validate_recomputes_wholesale() {
    let mut form = ContactForm::new();
    form.validate();
    form.set_field(Field::Name, "Jo");
    form.set_field(Field::Email, "not-an-email");
    form.set_field(Field::Message, "hi");
    assert!(!form.validate());
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));
}

// =========================================================================
// split transitions
// =========================================================================

#[test]
fn invalid_form_never_enters_submitting() {
    let mut form = ContactForm::new();
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "hi");
    assert_eq!(form.begin_submit(), SubmitAttempt::Invalid);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
}

#[test]
fn begin_submit_snapshots_input() {
    let mut form = filled();
    let SubmitAttempt::Started(snapshot) = form.begin_submit() else {
        panic!("expected submission to start");
    };
    assert_eq!(&snapshot, form.input());
    assert!(form.is_submitting());
    assert_eq!(form.begin_submit(), SubmitAttempt::Busy);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut form = filled();
    form.finish_success();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(!form.input().is_empty());
}

#[test]
fn finish_rejected_restores_idle_with_errors() {
    let mut form = filled();
    form.begin_submit();
    let mut errors = ValidationErrors::new();
    errors.insert(Field::Email, EMAIL_INVALID);
    form.finish_rejected(errors);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(form.value(Field::Name), "Jo");
}

#[test]
fn submitted_session_is_closed_until_reset() {
    let mut form = filled();
    form.begin_submit();
    form.finish_success();
    assert_eq!(form.begin_submit(), SubmitAttempt::Closed);
    assert!(!form.set_field(Field::Name, "again"));

    form.reset();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.set_field(Field::Name, "again"));
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn scenario_a_blank_name_makes_no_call() {
    let mailer = MockMailer::ok();
    let mut form = ContactForm::with_input(FormInput {
        name: String::new(),
        email: "a@b.com".into(),
        subject: String::new(),
        message: "hi".into(),
    });

    let outcome = form.submit(&config(), &mailer).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn scenario_c_success_resets_fields() {
    let mailer = MockMailer::ok();
    let mut form = filled();

    let outcome = form.submit(&config(), &mailer).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.phase(), SubmissionPhase::Submitted);
    assert!(form.input().is_empty());

    let calls = mailer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (service, template, key, fields) = &calls[0];
    assert_eq!(service, "service_1");
    assert_eq!(template, "template_1");
    assert_eq!(key, "public_1");
    assert_eq!(fields.name, "Jo");
    assert_eq!(fields.subject, "Hello");
}

#[tokio::test]
async fn scenario_d_provider_failure_keeps_fields() {
    let mailer = MockMailer::failing(MailerError::Response { status: 500, body: "boom".into() });
    let mut form = filled();
    let before = form.input().clone();

    let err = form.submit(&config(), &mailer).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Provider(MailerError::Response { status: 500, .. })));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.input(), &before);
    assert_eq!(mailer.call_count(), 1);
}

#[tokio::test]
async fn failed_submission_can_be_retried() {
    let failing = MockMailer::failing(MailerError::Request("connection reset".into()));
    let working = MockMailer::ok();
    let mut form = filled();

    assert!(form.submit(&config(), &failing).await.is_err());
    assert_eq!(form.submit(&config(), &working).await.unwrap(), SubmitOutcome::Sent);
    assert_eq!(working.call_count(), 1);
}

#[tokio::test]
async fn scenario_e_missing_service_id_skips_provider() {
    let mailer = MockMailer::ok();
    let mut form = filled();
    let config = ProviderConfig { service_id: None, ..config() };

    let err = form.submit(&config, &mailer).await.unwrap_err();
    let SubmissionError::Configuration(cfg) = err else {
        panic!("expected configuration error");
    };
    assert_eq!(cfg.missing, vec![ConfigKey::ServiceId]);
    assert_eq!(mailer.call_count(), 0);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.value(Field::Name), "Jo");
}

#[tokio::test]
async fn submit_while_submitting_is_a_no_op() {
    let mailer = MockMailer::ok();
    let mut form = filled();
    assert!(matches!(form.begin_submit(), SubmitAttempt::Started(_)));

    let outcome = form.submit(&config(), &mailer).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(mailer.call_count(), 0);
    assert!(form.is_submitting());
}

#[tokio::test]
async fn submit_after_submitted_is_a_no_op() {
    let mailer = MockMailer::ok();
    let mut form = filled();
    form.submit(&config(), &mailer).await.unwrap();

    form.set_field(Field::Name, "ignored");
    let outcome = form.submit(&config(), &mailer).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(mailer.call_count(), 1);
}
