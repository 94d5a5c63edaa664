use super::*;

#[test]
fn configuration_error_lists_env_vars() {
    let err = ConfigurationError { missing: vec![ConfigKey::ServiceId, ConfigKey::PublicKey] };
    assert_eq!(
        err.to_string(),
        "provider configuration incomplete: missing EMAILJS_SERVICE_ID, EMAILJS_PUBLIC_KEY"
    );
}

#[test]
fn codes_distinguish_configuration_from_provider() {
    let config = SubmissionError::from(ConfigurationError { missing: vec![ConfigKey::TemplateId] });
    let request = SubmissionError::from(MailerError::Request("timeout".into()));
    let response = SubmissionError::from(MailerError::Response { status: 400, body: "bad".into() });

    assert_eq!(config.error_code(), "E_CONFIG_MISSING");
    assert_eq!(request.error_code(), "E_PROVIDER_REQUEST");
    assert_eq!(response.error_code(), "E_PROVIDER_RESPONSE");
}

#[test]
fn retryable_only_for_transient_provider_failures() {
    assert!(!SubmissionError::from(ConfigurationError { missing: vec![ConfigKey::ServiceId] }).retryable());
    assert!(SubmissionError::from(MailerError::Request("reset".into())).retryable());
    assert!(SubmissionError::from(MailerError::Response { status: 503, body: String::new() }).retryable());
    assert!(SubmissionError::from(MailerError::Response { status: 429, body: String::new() }).retryable());
    assert!(!SubmissionError::from(MailerError::Response { status: 400, body: String::new() }).retryable());
}

#[test]
fn user_message_never_leaks_provider_text() {
    let err = SubmissionError::from(MailerError::Response { status: 400, body: "The public key is invalid".into() });
    assert_eq!(err.user_message(), crate::GENERIC_FAILURE_MESSAGE);
    assert!(!err.user_message().contains("public key"));
}
