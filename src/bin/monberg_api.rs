//! Monberg Site API Server
//!
//! Serves the contact relay and the page content.
//!
//! Usage:
//!   cargo run --bin monberg_api
//!
//! Environment (a `.env` file is read first when present):
//!   PORT / SITE_PORT  - Server port (default: 8080)
//!   SITE_HOST         - Server host (default: 0.0.0.0)
//!   CONTACT_TRANSPORT - resend | relay (default: resend)
//!   RESEND_API_KEY    - Resend key (resend transport)
//!   CONTACT_EMAIL     - Inbox receiving submissions (resend transport)
//!   CONTACT_FROM      - Sender identity (resend transport)
//!   FORM_RELAY_URL    - Relay endpoint (relay transport)
//!   CORS_ALLOW_ORIGIN - Allowed page origin (default: any)
//!   RUST_LOG          - Log filter (default: info)

use monberg_site::api::{cors_layer, create_router, handlers::AppState};
use monberg_site::utils::constants::{APP_NAME, APP_VERSION};
use monberg_site::utils::logging::init_logging;
use monberg_site::{build_transport, AppConfig, SubmissionCounters};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv = dotenvy::dotenv();

    init_logging();

    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!("⚠️ Failed to read .env: {}", e);
        }
    }

    info!("🌿 {} v{}", APP_NAME, APP_VERSION);

    let config = AppConfig::from_env()?;
    let transport = build_transport(&config.transport)?;
    info!("📮 Contact transport: {}", transport.name());

    let counters = Arc::new(SubmissionCounters::new());
    let state = Arc::new(AppState::new(transport, counters.clone()));

    let app = create_router(state, cors_layer(config.server.cors_allow_origin.as_deref()));

    let addr = config.server.socket_addr()?;

    info!("🚀 Site API starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  POST /api/contact         - Contact form submission");
    info!("  POST /v1/contact          - Contact form submission");
    info!("  GET  /v1/site             - Page content");
    info!("  GET  /v1/site/scroll      - Hero effects at ?progress=");
    info!("  GET  /v1/health           - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("");
    info!("🛑 Shutdown signal received");

    let stats = counters.snapshot();
    info!("   Submissions received: {}", stats.received);
    info!("   Invalid:              {}", stats.invalid);
    info!("   Delivered:            {}", stats.delivered);
    info!("   Rejected by remote:   {}", stats.rejected);
    info!("   Transport failures:   {}", stats.failed);
    info!("   Avg delivery latency: {}ms", stats.avg_latency_ms);

    info!("👋 Site API shutdown complete");

    Ok(())
}
