//! Core Module - Validation & Page Data
//!
//! Pure logic with no I/O: the contact field rules, the page copy and the
//! scroll-linked hero effects.

pub mod scroll;
pub mod site;
pub mod validator;

pub use scroll::*;
pub use site::*;
pub use validator::*;
