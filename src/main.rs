#![recursion_limit = "256"]

mod config;
mod emailjs;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use contact::ProviderConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Missing provider keys are non-fatal: the page still renders and every
    // contact submission fails with a generic message until they are set.
    let provider = ProviderConfig::from_env();
    let missing = provider.missing();
    if missing.is_empty() {
        tracing::info!("email provider configured");
    } else {
        let vars: Vec<&str> = missing.iter().map(|key| key.env_var()).collect();
        tracing::warn!(missing = ?vars, "email provider not configured; contact form disabled");
    }

    let mailer = emailjs::EmailJsClient::new(&config.emailjs).expect("email client init failed");
    tracing::info!(endpoint = mailer.endpoint(), "email client initialized");

    let rate_limiter = rate_limit::RateLimiter::new();
    let limits = rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );

    let state = state::AppState::new(provider, Arc::new(mailer), rate_limiter)
        .with_trust_forwarded_for(config.trust_forwarded_for);

    let app = routes::leptos_app(state, &config.public_dir).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, public_dir = %config.public_dir.display(), "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
