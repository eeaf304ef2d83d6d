//! Logging setup

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("monberg_site=info,monberg_api=info,tower_http=info"));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
