use contact::{FormInput, SubmissionPhase, ValidationErrors};

use super::*;

fn submitting_form() -> ContactForm {
    let mut form = ContactForm::with_input(FormInput {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: String::new(),
        message: "Hello".into(),
    });
    assert!(matches!(form.begin_submit(), SubmitAttempt::Started(_)));
    form
}

#[test]
fn sent_reply_closes_session() {
    let mut form = submitting_form();
    assert_eq!(settle_reply(&mut form, Ok(ContactResponse::sent())), None);
    assert_eq!(form.phase(), SubmissionPhase::Submitted);
    assert_eq!(form.input(), &FormInput::default());
}

#[test]
fn invalid_reply_restores_idle_with_server_errors() {
    let mut form = submitting_form();
    let mut errors = ValidationErrors::new();
    errors.insert(Field::Email, contact::validate::EMAIL_INVALID);

    assert_eq!(settle_reply(&mut form, Ok(ContactResponse::invalid(errors))), None);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.error(Field::Email), Some(contact::validate::EMAIL_INVALID));
    assert_eq!(form.value(Field::Name), "Ada");
}

#[test]
fn rate_limited_reply_shows_server_message_and_keeps_input() {
    let mut form = submitting_form();
    let notice = settle_reply(&mut form, Ok(ContactResponse::rate_limited("Too many messages.")));
    assert_eq!(notice.as_deref(), Some("Too many messages."));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.value(Field::Message), "Hello");
}

#[test]
fn failed_reply_without_message_uses_generic_notice() {
    let mut form = submitting_form();
    let reply = ContactResponse { message: None, ..ContactResponse::failed("x") };
    assert_eq!(settle_reply(&mut form, Ok(reply)).as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[test]
fn transport_error_fails_back_to_idle() {
    let mut form = submitting_form();
    let notice = settle_reply(&mut form, Err("network down".into()));
    assert_eq!(notice.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(matches!(form.begin_submit(), SubmitAttempt::Started(_)));
}
