//! Configuration for the site API
//!
//! Everything comes from the environment exactly once, at startup, and is
//! then handed to the components that need it. Secrets are never logged.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_FROM_ADDRESS, DEFAULT_HOST, DEFAULT_PORT, ENV_CONTACT_EMAIL, ENV_CONTACT_FROM,
    ENV_CORS_ALLOW_ORIGIN, ENV_FORM_RELAY_URL, ENV_PORT, ENV_RESEND_API_KEY,
    ENV_RESEND_BASE_URL, ENV_SITE_HOST, ENV_SITE_PORT, ENV_TRANSPORT, RESEND_DEFAULT_BASE_URL,
};

/// Which backend delivers contact submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Transactional email API, server-held key
    Resend,
    /// Public form relay endpoint
    Relay,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Resend => "resend",
            TransportKind::Relay => "relay",
        }
    }
}

impl FromStr for TransportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resend" | "email" => Ok(Self::Resend),
            "relay" | "formspree" => Ok(Self::Relay),
            other => Err(AppError::invalid_config(
                ENV_TRANSPORT,
                format!("unknown transport '{}' (expected resend or relay)", other),
            )),
        }
    }
}

/// Resend email API settings
#[derive(Clone)]
pub struct ResendConfig {
    pub api_key: String,
    /// Inbox that receives the submissions
    pub to: String,
    pub from: String,
    pub base_url: String,
}

impl fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"<hidden>")
            .field("to", &self.to)
            .field("from", &self.from)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Form relay settings
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
}

/// Selected delivery backend with its settings
#[derive(Debug, Clone)]
pub enum TransportConfig {
    Resend(ResendConfig),
    Relay(RelayConfig),
}

impl TransportConfig {
    pub fn kind(&self) -> TransportKind {
        match self {
            TransportConfig::Resend(_) => TransportKind::Resend,
            TransportConfig::Relay(_) => TransportKind::Relay,
        }
    }
}

/// Listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` allows any origin
    pub cors_allow_origin: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::invalid_config(ENV_SITE_HOST, e))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allow_origin: None,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub transport: TransportConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| AppError::missing_env(key));

        // Hosting platforms set PORT; SITE_PORT is for local dev
        let port = match get(ENV_PORT).or_else(|| get(ENV_SITE_PORT)) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::invalid_config(ENV_PORT, e))?,
            None => DEFAULT_PORT,
        };

        let server = ServerConfig {
            host: get(ENV_SITE_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_allow_origin: get(ENV_CORS_ALLOW_ORIGIN).filter(|o| o.trim() != "*"),
        };

        let kind = match get(ENV_TRANSPORT) {
            Some(raw) => raw.parse::<TransportKind>()?,
            None => TransportKind::Resend,
        };

        let transport = match kind {
            TransportKind::Resend => {
                let config = ResendConfig {
                    api_key: require(ENV_RESEND_API_KEY)?,
                    to: require(ENV_CONTACT_EMAIL)?,
                    from: get(ENV_CONTACT_FROM).unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
                    base_url: get(ENV_RESEND_BASE_URL)
                        .unwrap_or_else(|| RESEND_DEFAULT_BASE_URL.to_string())
                        .trim_end_matches('/')
                        .to_string(),
                };
                info!("🔑 RESEND_API_KEY configured (key hidden for security)");
                TransportConfig::Resend(config)
            }
            TransportKind::Relay => {
                let url = require(ENV_FORM_RELAY_URL)?;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(AppError::invalid_config(
                        ENV_FORM_RELAY_URL,
                        "must be an http(s) URL",
                    ));
                }
                TransportConfig::Relay(RelayConfig { url })
            }
        };

        Ok(Self { server, transport })
    }
}
