//! Providers Module - Outbound Delivery
//!
//! The submission transport trait and its two backends: the Resend email
//! API and a public form relay.

pub mod relay;
pub mod resend;
pub mod transport;

pub use relay::*;
pub use resend::*;
pub use transport::*;
