//! API Request Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::types::*;
use crate::core::scroll::ScrollEffects;
use crate::core::site::SiteContent;
use crate::core::validator::validate;
use crate::models::errors::{AppError, ErrorCode};
use crate::models::types::{ContactForm, DeliveryOutcome};
use crate::providers::transport::SubmissionTransport;
use crate::utils::telemetry::SubmissionCounters;

/// Shared application state
pub struct AppState {
    pub transport: Arc<dyn SubmissionTransport>,
    pub counters: Arc<SubmissionCounters>,
    pub site: SiteContent,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(transport: Arc<dyn SubmissionTransport>, counters: Arc<SubmissionCounters>) -> Self {
        Self {
            transport,
            counters,
            site: SiteContent::default(),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn reply(status: StatusCode, error: ApiError, start: Instant) -> ErrorReply {
    (status, Json(ApiResponse::error(error, elapsed_ms(start))))
}

fn app_error_reply(err: AppError, start: Instant) -> ErrorReply {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    reply(status, ApiError::from(&err), start)
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        transport: state.transport.name().to_string(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Contact Submission
// ============================================

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ApiResponse<ContactData>>, ErrorReply> {
    let start = Instant::now();
    state.counters.record_received();

    let Json(form) = payload.map_err(|rejection| {
        state.counters.record_invalid();
        warn!(reason = %rejection.body_text(), "Unreadable contact body");
        reply(
            StatusCode::BAD_REQUEST,
            ApiError::bad_request("Request body must be a JSON object with name, email and message")
                .with_details(rejection.body_text()),
            start,
        )
    })?;

    let submission = validate(&form).map_err(|violations| {
        state.counters.record_invalid();
        info!(
            violations = violations.len(),
            fields = ?violations.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
            "Contact form rejected by validation"
        );
        reply(StatusCode::BAD_REQUEST, ApiError::validation(violations), start)
    })?;

    let outcome = state.transport.deliver(&submission).await;
    let latency = start.elapsed().as_millis() as u64;
    state.counters.record_outcome(&outcome, latency);

    info!(
        transport = state.transport.name(),
        outcome = outcome.as_str(),
        latency_ms = latency,
        "Contact submission processed"
    );

    match outcome {
        DeliveryOutcome::Delivered { id } => Ok(Json(ApiResponse::success(
            ContactData {
                delivered: true,
                id,
            },
            elapsed_ms(start),
        ))),
        DeliveryOutcome::RejectedByRemote { reason } => {
            Err(app_error_reply(AppError::remote_rejected(reason), start))
        }
        DeliveryOutcome::TransportFailure { detail } => {
            error!(detail = %detail, "Contact delivery failed");
            Err(app_error_reply(AppError::transport_failed(detail), start))
        }
    }
}

// ============================================
// Site Content
// ============================================

pub async fn site_content(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SiteContent>> {
    let start = Instant::now();
    Json(ApiResponse::success(state.site.clone(), elapsed_ms(start)))
}

pub async fn scroll_effects(
    query: Result<Query<ScrollQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ScrollEffects>>, ErrorReply> {
    let start = Instant::now();

    let Query(query) = query
        .map_err(|_| app_error_reply(AppError::bad_request("progress must be a number"), start))?;

    Ok(Json(ApiResponse::success(
        ScrollEffects::at(query.progress),
        elapsed_ms(start),
    )))
}

// ============================================
// Fallback
// ============================================

pub async fn not_found() -> ErrorReply {
    app_error_reply(
        AppError::new(ErrorCode::ApiNotFound, "Not found"),
        Instant::now(),
    )
}

/// Response for a panicking handler: logged in full, reported as a generic
/// failure
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    error!(detail = %detail, "Handler panicked");
    app_error_reply(AppError::internal(detail), Instant::now()).into_response()
}
