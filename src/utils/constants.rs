//! Constants Module - Single Source of Truth
//!
//! Default endpoints, environment variable names and the validation limits
//! used across the application. No other module hardcodes these.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "MonbergSite";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound HTTP requests
pub const USER_AGENT: &str = concat!("MonbergSite/", env!("CARGO_PKG_VERSION"));

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// ============================================
// EMAIL DELIVERY (Resend)
// ============================================

pub const RESEND_DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Path of the send-email endpoint, relative to the base URL
pub const RESEND_EMAILS_PATH: &str = "/emails";

pub const DEFAULT_FROM_ADDRESS: &str = "Contact Form <contact@yourdomain.com>";

// ============================================
// FORM RELAY (Formspree-style)
// ============================================

/// Honeypot field name understood by the relay
pub const RELAY_HONEYPOT_FIELD: &str = "_gotcha";

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_SITE_PORT: &str = "SITE_PORT";
pub const ENV_SITE_HOST: &str = "SITE_HOST";
pub const ENV_TRANSPORT: &str = "CONTACT_TRANSPORT";
pub const ENV_RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_RESEND_BASE_URL: &str = "RESEND_BASE_URL";
pub const ENV_CONTACT_EMAIL: &str = "CONTACT_EMAIL";
pub const ENV_CONTACT_FROM: &str = "CONTACT_FROM";
pub const ENV_FORM_RELAY_URL: &str = "FORM_RELAY_URL";
pub const ENV_CORS_ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";

// ============================================
// VALIDATION LIMITS
// ============================================

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const REASON_REQUIRED: &str = "Required";
pub const REASON_NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const REASON_INVALID_EMAIL: &str = "Invalid email address";
pub const REASON_MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Message shown to visitors for every failure that is not a validation
/// or remote rejection
pub const GENERIC_FAILURE_MESSAGE: &str = "Internal server error";
