//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the provider identifiers, the mailer used to deliver contact
//! messages and the submission rate limiter. Each request builds its own
//! `ContactForm` session; nothing here is per-visitor.

use std::sync::Arc;

use contact::{Mailer, ProviderConfig};

use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ProviderConfig>,
    pub mailer: Arc<dyn Mailer>,
    pub rate_limiter: RateLimiter,
    /// Key rate limits on the first `X-Forwarded-For` hop instead of the peer.
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(provider: ProviderConfig, mailer: Arc<dyn Mailer>, rate_limiter: RateLimiter) -> Self {
        Self { provider: Arc::new(provider), mailer, rate_limiter, trust_forwarded_for: false }
    }

    #[must_use]
    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
