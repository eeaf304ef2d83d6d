//! Monberg Site Library
//!
//! Server side of the Erin Leigh Monberg, CNM expert-witness site:
//! - Contact form validation (name, email, message)
//! - Delivery through the Resend email API or a public form relay
//! - Static page content and scroll-linked hero effects

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{validate, ScrollEffects, SiteContent};
pub use models::{
    AppConfig, AppError, AppResult, ContactForm, ContactSubmission, DeliveryOutcome, ErrorCode,
    Field, FieldViolation, TransportConfig, TransportKind,
};
pub use providers::{build_transport, FormRelayTransport, ResendTransport, SubmissionTransport};
pub use utils::telemetry::{SubmissionCounters, SubmissionStats};
