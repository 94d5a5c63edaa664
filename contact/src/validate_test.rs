use super::*;

fn input(name: &str, email: &str, message: &str) -> FormInput {
    FormInput { name: name.to_owned(), email: email.to_owned(), subject: String::new(), message: message.to_owned() }
}

// =============================================================
// validate
// =============================================================

#[test]
fn blank_name_is_required() {
    let errors = validate(&input("", "a@b.com", "hi"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
}

#[test]
fn whitespace_only_fields_count_as_blank() {
    let errors = validate(&input("  \t", "   ", "\n"));
    assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn malformed_email_is_rejected() {
    let errors = validate(&input("Jo", "not-an-email", "hi"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn complete_input_has_no_errors() {
    assert!(validate(&input("Jo", "jo@example.com", "hello there")).is_empty());
}

#[test]
fn subject_is_never_validated() {
    let mut value = input("Jo", "jo@example.com", "hi");
    value.subject = "   ".to_owned();
    assert!(validate(&value).is_empty());
}

#[test]
fn validate_is_idempotent() {
    let value = input("", "x@", "  ");
    assert_eq!(validate(&value), validate(&value));
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_pattern_accepts_simple_addresses() {
    for email in ["a@b.co", "first.last@sub.example.org", "x@y.z", "a@b..c", "ünï@cödé.io"] {
        assert!(is_valid_email(email), "expected {email:?} to be valid");
    }
}

#[test]
fn email_pattern_rejects_bad_shapes() {
    for email in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@example",
        "user@.com",
        "user@example.",
        "a@b@c.com",
        "user name@example.com",
        " user@example.com",
        "user@example.com\n",
    ] {
        assert!(!is_valid_email(email), "expected {email:?} to be invalid");
    }
}

// =============================================================
// ValidationErrors
// =============================================================

#[test]
fn clear_removes_only_the_named_field() {
    let mut errors = validate(&input("", "", ""));
    assert!(errors.clear(Field::Email));
    assert!(!errors.clear(Field::Email));
    assert!(errors.contains(Field::Name));
    assert!(errors.contains(Field::Message));
}

#[test]
fn errors_serialize_as_field_keyed_object() {
    let errors = validate(&input("", "jo@example.com", "hi"));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Name is required" }));

    let back: ValidationErrors = serde_json::from_value(json).unwrap();
    assert_eq!(back, errors);
}
