//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the contact endpoint
//! is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every documented `/api/contact` status carries a `ContactResponse` body,
//! so callers get the parsed body regardless of status. `Err` means the
//! request never produced a readable answer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contact::{ContactResponse, FormInput};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Decode a `/api/contact` reply body.
#[cfg(any(test, feature = "hydrate"))]
fn parse_contact_reply(status: u16, body: &str) -> Result<ContactResponse, String> {
    serde_json::from_str(body).map_err(|_| contact_failed_message(status))
}

/// Post a contact message to `/api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply is not a
/// contact response.
pub async fn send_contact(input: &FormInput) -> Result<ContactResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_contact_reply(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}
