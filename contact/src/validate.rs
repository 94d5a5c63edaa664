//! Field validation for the contact form.
//!
//! Validation is recomputed wholesale from a [`FormInput`]; the result holds
//! only the fields that failed. An empty [`ValidationErrors`] means the form
//! may be submitted.

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{Field, FormInput};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Per-field error messages, keyed by [`Field`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<(Field, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validate every required field of `input`.
#[must_use]
pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if input.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&input.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if input.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// The value is not trimmed: surrounding whitespace makes it invalid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
