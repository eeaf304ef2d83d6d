//! Site HTTP API Module
//! Contact relay, site content and health endpoints

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use routes::{cors_layer, create_router};
pub use types::*;
