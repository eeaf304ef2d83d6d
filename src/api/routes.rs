//! API Route Configuration

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// CORS for the browser page. `None` allows any origin.
pub fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origin = match allow_origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(_)) => {
            warn!("CORS_ALLOW_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let api_v1 = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/contact", post(handlers::submit_contact))
        .route("/site", get(handlers::site_content))
        .route("/site/scroll", get(handlers::scroll_effects));

    Router::new()
        .nest("/v1", api_v1)
        // Path the page's form posts to
        .route("/api/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
