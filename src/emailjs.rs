//! EmailJS REST API client.
//!
//! Thin HTTP wrapper for `POST /api/v1.0/email/send`. Server-side calls
//! require "Allow EmailJS API for non-browser applications" in the EmailJS
//! account settings; when strict mode is on, the private key is sent as
//! `accessToken`. Pure status handling in `check_response` for testability.

use std::time::Duration;

use contact::{Mailer, MailerError, SendFormRequest};

use crate::config::{ConfigError, EmailJsSettings};

const SEND_PATH: &str = "/api/v1.0/email/send";

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(settings: &EmailJsSettings) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(settings.timeouts.connect_secs))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: format!("{}{SEND_PATH}", settings.base_url) })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Mailer for EmailJsClient {
    async fn send_form(&self, request: SendFormRequest<'_>) -> Result<(), MailerError> {
        let body = ApiRequest::from(request);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MailerError::Request(e.to_string()))?;

        check_response(status, text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
struct ApiRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Mirrors the form's input names so the same EmailJS template serves both
/// the browser SDK and this client.
#[derive(Debug, serde::Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<SendFormRequest<'a>> for ApiRequest<'a> {
    fn from(request: SendFormRequest<'a>) -> Self {
        let fields = request.fields;
        Self {
            service_id: request.service_id,
            template_id: request.template_id,
            user_id: request.public_key,
            template_params: TemplateParams {
                name: &fields.name,
                email: &fields.email,
                subject: &fields.subject,
                message: &fields.message,
            },
            access_token: request.private_key,
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

fn check_response(status: u16, body: String) -> Result<(), MailerError> {
    if status == 200 {
        return Ok(());
    }
    Err(MailerError::Response { status, body })
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
