//! Contact form endpoint.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use contact::{ContactResponse, FormInput, SubmissionError};

use crate::services::relay::{RelayReply, relay_contact};
use crate::state::AppState;

pub const RATE_LIMITED_MESSAGE: &str = "Too many messages. Please try again later.";

/// `POST /api/contact` — validate, throttle and forward one contact message.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(input): Json<FormInput>,
) -> impl IntoResponse {
    let client = client_ip(&headers, peer, state.trust_forwarded_for);
    let reply = relay_contact(&state, client, input).await;
    let (status, body) = reply_to_response(reply);
    (status, Json(body))
}

/// Address used for rate limiting. The first `X-Forwarded-For` hop is only
/// honored behind a trusted proxy.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> IpAddr {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }
    }
    peer.ip()
}

pub(crate) fn reply_to_response(reply: RelayReply) -> (StatusCode, ContactResponse) {
    match reply {
        RelayReply::Sent => (StatusCode::OK, ContactResponse::sent()),
        RelayReply::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, ContactResponse::invalid(errors)),
        RelayReply::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, ContactResponse::rate_limited(RATE_LIMITED_MESSAGE)),
        RelayReply::Failed(err) => {
            let status = match &err {
                SubmissionError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                SubmissionError::Provider(_) => StatusCode::BAD_GATEWAY,
            };
            (status, ContactResponse::failed(err.user_message()))
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
