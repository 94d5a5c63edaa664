//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_EMAILJS_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EMAILJS_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub trust_forwarded_for: bool,
    pub emailjs: EmailJsSettings,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: static assets, default `<manifest>/public`
    /// - `TRUST_FORWARDED_FOR`: key rate limits on `X-Forwarded-For`, default off
    /// - `EMAILJS_BASE_URL`: default `https://api.emailjs.com`
    /// - `EMAILJS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Provider identifiers (`EMAILJS_SERVICE_ID` and friends) are read by
    /// [`contact::ProviderConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"));
        let trust_forwarded_for = std::env::var("TRUST_FORWARDED_FOR")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);
        let base_url = std::env::var("EMAILJS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EMAILJS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("EMAILJS_REQUEST_TIMEOUT_SECS", DEFAULT_EMAILJS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("EMAILJS_CONNECT_TIMEOUT_SECS", DEFAULT_EMAILJS_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, public_dir, trust_forwarded_for, emailjs: EmailJsSettings { base_url, timeouts } })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
