//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;
use crate::models::types::FieldViolation;
use crate::utils::constants::GENERIC_FAILURE_MESSAGE;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl ApiError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: "Invalid contact form".to_string(),
            details: None,
            violations: Some(violations),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "API_BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
            violations: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<&AppError> for ApiError {
    /// Server-side faults keep their code but lose their message
    fn from(err: &AppError) -> Self {
        let message = if err.code.is_client_visible() {
            err.message.clone()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        };
        Self {
            code: err.code_str().to_string(),
            message,
            details: None,
            violations: None,
        }
    }
}

// ============================================
// Contact
// ============================================

#[derive(Debug, Serialize)]
pub struct ContactData {
    pub delivered: bool,
    /// Remote message id, when the backend returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ============================================
// Site
// ============================================

#[derive(Debug, Deserialize)]
pub struct ScrollQuery {
    #[serde(default)]
    pub progress: f64,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub transport: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use crate::models::types::Field;

    #[test]
    fn test_remote_rejection_keeps_message() {
        let err = AppError::remote_rejected("Invalid `to` field.");
        let api: ApiError = (&err).into();
        assert_eq!(api.code, "REMOTE_REJECTED");
        assert_eq!(api.message, "Invalid `to` field.");
    }

    #[test]
    fn test_transport_failure_is_opaque() {
        let err = AppError::new(ErrorCode::TransportFailed, "connection refused at 10.0.0.3");
        let api: ApiError = (&err).into();
        assert_eq!(api.code, "TRANSPORT_FAILED");
        assert_eq!(api.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_error_envelope_serialization() {
        let body = ApiResponse::error(
            ApiError::validation(vec![FieldViolation::new(Field::Name, "Required")]),
            1.0,
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["violations"][0]["field"], "name");
    }
}
