//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so that log lines and API
//! responses can be matched up in production.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - VALIDATION_FAILED / REMOTE_REJECTED / TRANSPORT_FAILED: submission path
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Submission Errors
    // ============================================
    /// One or more contact fields failed validation
    ValidationFailed,
    /// The destination service declined delivery
    RemoteRejected,
    /// Network failure talking to the destination service
    TransportFailed,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Internal server error
    ApiInternalError,
    /// Resource not found
    ApiNotFound,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Missing environment variable
    ConfigMissingEnv,
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::RemoteRejected => "REMOTE_REJECTED",
            Self::TransportFailed => "TRANSPORT_FAILED",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiInternalError => "API_INTERNAL_ERROR",
            Self::ApiNotFound => "API_NOT_FOUND",

            Self::ConfigMissingEnv => "CFG_MISSING_ENV",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ValidationFailed | Self::RemoteRejected | Self::ApiBadRequest => 400,
            Self::ApiNotFound => 404,
            _ => 500,
        }
    }

    /// Whether the caller may see the error message verbatim.
    /// Everything else is reported as a generic failure.
    pub fn is_client_visible(&self) -> bool {
        self.http_status() < 500
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Missing environment variable
    pub fn missing_env(var: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingEnv,
            format!("Missing environment variable: {}", var),
        )
    }

    /// Invalid configuration value
    pub fn invalid_config(var: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {}", var, reason),
        )
    }

    /// Remote service declined delivery
    pub fn remote_rejected(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteRejected, msg)
    }

    /// Network failure talking to the remote service
    pub fn transport_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportFailed, msg)
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Unknown, "IO error", err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::TransportFailed, "Request timeout")
        } else if err.is_connect() {
            Self::new(ErrorCode::TransportFailed, "Connection failed")
        } else {
            Self::with_source(ErrorCode::TransportFailed, "HTTP request failed", err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ApiBadRequest, "JSON parse error", err)
    }
}
