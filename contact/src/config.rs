//! Provider identifiers supplied by the hosting environment.
//!
//! Values are opaque: they are only checked for presence. An empty string
//! counts as absent.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::fmt;

use crate::error::ConfigurationError;

/// Configuration keys the provider call cannot proceed without.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    ServiceId,
    TemplateId,
    PublicKey,
}

impl ConfigKey {
    pub const REQUIRED: [ConfigKey; 3] = [ConfigKey::ServiceId, ConfigKey::TemplateId, ConfigKey::PublicKey];

    /// Environment variable carrying this key.
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            Self::ServiceId => "EMAILJS_SERVICE_ID",
            Self::TemplateId => "EMAILJS_TEMPLATE_ID",
            Self::PublicKey => "EMAILJS_PUBLIC_KEY",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Possibly incomplete provider configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// Optional access token for server-side calls (`EMAILJS_PRIVATE_KEY`).
    pub private_key: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.public_key.as_ref().map(|_| "<set>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl ProviderConfig {
    /// Read `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    /// and `EMAILJS_PRIVATE_KEY`. Missing variables stay `None`; the check
    /// happens at submit time so a misconfigured site still serves pages.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            service_id: env_value(ConfigKey::ServiceId.env_var()),
            template_id: env_value(ConfigKey::TemplateId.env_var()),
            public_key: env_value(ConfigKey::PublicKey.env_var()),
            private_key: env_value("EMAILJS_PRIVATE_KEY"),
        }
    }

    fn value(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::ServiceId => self.service_id.as_deref(),
            ConfigKey::TemplateId => self.template_id.as_deref(),
            ConfigKey::PublicKey => self.public_key.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Keys that are absent or empty, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<ConfigKey> {
        ConfigKey::REQUIRED
            .into_iter()
            .filter(|key| self.value(*key).is_none())
            .collect()
    }

    /// Borrow the complete credential set, or report every missing key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when any required key is absent.
    pub fn resolve(&self) -> Result<ProviderCredentials<'_>, ConfigurationError> {
        match (
            self.value(ConfigKey::ServiceId),
            self.value(ConfigKey::TemplateId),
            self.value(ConfigKey::PublicKey),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(ProviderCredentials {
                service_id,
                template_id,
                public_key,
                private_key: self.private_key.as_deref().filter(|v| !v.is_empty()),
            }),
            _ => Err(ConfigurationError { missing: self.missing() }),
        }
    }
}

/// Complete provider identifiers borrowed from a [`ProviderConfig`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProviderCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
    pub private_key: Option<&'a str>,
}

impl fmt::Debug for ProviderCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .finish_non_exhaustive()
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
