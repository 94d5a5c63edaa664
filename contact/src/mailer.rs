//! Provider seam for delivering a contact message.

use crate::config::ProviderCredentials;
use crate::error::MailerError;
use crate::input::FormInput;

/// Everything a provider needs for one delivery.
#[derive(Debug, Clone, Copy)]
pub struct SendFormRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
    pub private_key: Option<&'a str>,
    pub fields: &'a FormInput,
}

impl<'a> SendFormRequest<'a> {
    #[must_use]
    pub fn new(credentials: ProviderCredentials<'a>, fields: &'a FormInput) -> Self {
        Self {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            public_key: credentials.public_key,
            private_key: credentials.private_key,
            fields,
        }
    }
}

/// Transactional email provider. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message built from `request.fields`.
    ///
    /// # Errors
    ///
    /// Returns a [`MailerError`] if the provider is unreachable or rejects
    /// the message.
    async fn send_form(&self, request: SendFormRequest<'_>) -> Result<(), MailerError>;
}
