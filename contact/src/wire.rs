//! JSON body returned by `POST /api/contact`.

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::validate::ValidationErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Sent,
    Invalid,
    RateLimited,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: ContactStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn sent() -> Self {
        Self { status: ContactStatus::Sent, errors: None, message: None }
    }

    #[must_use]
    pub fn invalid(errors: ValidationErrors) -> Self {
        Self { status: ContactStatus::Invalid, errors: Some(errors), message: None }
    }

    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self { status: ContactStatus::RateLimited, errors: None, message: Some(message.into()) }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { status: ContactStatus::Failed, errors: None, message: Some(message.into()) }
    }
}
