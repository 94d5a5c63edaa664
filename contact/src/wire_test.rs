use super::*;
use crate::input::Field;

#[test]
fn sent_serializes_without_optional_fields() {
    let json = serde_json::to_value(ContactResponse::sent()).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "sent" }));
}

#[test]
fn invalid_carries_field_errors() {
    let mut errors = ValidationErrors::new();
    errors.insert(Field::Message, "Message is required");
    let json = serde_json::to_value(ContactResponse::invalid(errors)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "status": "invalid", "errors": { "message": "Message is required" } })
    );
}

#[test]
fn rate_limited_parses_from_server_body() {
    let body = r#"{"status":"rate_limited","message":"Too many messages. Please try again later."}"#;
    let response: ContactResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.status, ContactStatus::RateLimited);
    assert!(response.errors.is_none());
    assert_eq!(response.message.as_deref(), Some("Too many messages. Please try again later."));
}
