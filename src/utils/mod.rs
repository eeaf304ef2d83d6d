//! Utils Module - Shared Helpers
//!
//! Constants, submission counters and logging setup.

pub mod constants;
pub mod logging;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
