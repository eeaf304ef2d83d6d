//! Contact API tests
//!
//! Drives the router in-process with a stub transport.
//! Run with: cargo test --test api_test

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use monberg_site::api::{cors_layer, create_router, handlers::AppState};
use monberg_site::{ContactSubmission, DeliveryOutcome, SubmissionCounters, SubmissionTransport};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct StubTransport {
    outcome: DeliveryOutcome,
    calls: AtomicUsize,
    last: Mutex<Option<ContactSubmission>>,
}

impl StubTransport {
    fn new(outcome: DeliveryOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionTransport for StubTransport {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(submission.clone());
        self.outcome.clone()
    }
}

fn app(transport: Arc<StubTransport>) -> (Router, Arc<SubmissionCounters>) {
    let counters = Arc::new(SubmissionCounters::new());
    let state = Arc::new(AppState::new(transport, counters.clone()));
    (create_router(state, cors_layer(None)), counters)
}

fn delivered() -> DeliveryOutcome {
    DeliveryOutcome::Delivered {
        id: Some("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".to_string()),
    }
}

fn valid_body() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "This is a test message."
    })
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_valid_submission_is_delivered() {
    let transport = StubTransport::new(delivered());
    let (app, counters) = app(transport.clone());

    let (status, body) = post_json(app, "/api/contact", valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["delivered"], true);
    assert_eq!(body["data"]["id"], "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    assert_eq!(transport.calls(), 1);

    let sent = transport.last.lock().unwrap().clone().unwrap();
    assert_eq!(sent.name(), "Jane Doe");
    assert_eq!(sent.email(), "jane@example.com");

    let stats = counters.snapshot();
    assert_eq!(stats.received, 1);
    assert_eq!(stats.delivered, 1);
}

#[tokio::test]
async fn test_v1_contact_route() {
    let transport = StubTransport::new(delivered());
    let (app, _) = app(transport.clone());

    let (status, _) = post_json(app, "/v1/contact", valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_transport() {
    let transport = StubTransport::new(delivered());
    let (app, counters) = app(transport.clone());

    let body = json!({ "name": "J", "email": "not-an-email", "message": "short" });
    let (status, body) = post_json(app, "/api/contact", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");

    let violations = body["error"]["violations"].as_array().unwrap();
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
    assert_eq!(violations[0]["reason"], "Name must be at least 2 characters");
    assert_eq!(violations[1]["reason"], "Invalid email address");
    assert_eq!(violations[2]["reason"], "Message must be at least 10 characters");

    assert_eq!(transport.calls(), 0);
    assert_eq!(counters.snapshot().invalid, 1);
}

#[tokio::test]
async fn test_missing_fields_are_reported_as_required() {
    let transport = StubTransport::new(delivered());
    let (app, _) = app(transport.clone());

    let (status, body) = post_json(app, "/api/contact", json!({ "name": "Jane" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = body["error"]["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v["reason"] == "Required"));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let transport = StubTransport::new(delivered());
    let (app, _) = app(transport.clone());

    let (status, body) = post_json(app, "/api/contact", "{\"name\": ".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "API_BAD_REQUEST");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_remote_rejection_is_400_with_reason() {
    let transport = StubTransport::new(DeliveryOutcome::RejectedByRemote {
        reason: "The `to` field must be a valid email address.".to_string(),
    });
    let (app, counters) = app(transport);

    let (status, body) = post_json(app, "/api/contact", valid_body().to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "REMOTE_REJECTED");
    assert_eq!(
        body["error"]["message"],
        "The `to` field must be a valid email address."
    );
    assert_eq!(counters.snapshot().rejected, 1);
}

#[tokio::test]
async fn test_transport_failure_is_opaque_500() {
    let transport = StubTransport::new(DeliveryOutcome::TransportFailure {
        detail: "error trying to connect: tcp connect error".to_string(),
    });
    let (app, counters) = app(transport);

    let (status, body) = post_json(app, "/api/contact", valid_body().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "TRANSPORT_FAILED");
    assert_eq!(body["error"]["message"], "Internal server error");
    assert!(!body.to_string().contains("tcp connect"));
    assert_eq!(counters.snapshot().failed, 1);
}

#[tokio::test]
async fn test_health_reports_transport() {
    let (app, _) = app(StubTransport::new(delivered()));

    let (status, body) = get(app, "/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["transport"], "stub");
}

#[tokio::test]
async fn test_site_content() {
    let (app, _) = app(StubTransport::new(delivered()));

    let (status, body) = get(app, "/v1/site").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["hero"]["name"], "Erin Leigh Monberg");
    assert_eq!(body["data"]["hero"]["tagline"], "Expert Midwife Witness");
    assert_eq!(body["data"]["expertise"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_scroll_effects_endpoint() {
    let (app, _) = app(StubTransport::new(delivered()));

    let (status, body) = get(app.clone(), "/v1/site/scroll?progress=0.1").await;
    assert_eq!(status, StatusCode::OK);
    let opacity = body["data"]["hero_opacity"].as_f64().unwrap();
    assert!((opacity - 0.5).abs() < 1e-9);

    let (status, body) = get(app, "/v1/site/scroll?progress=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "API_BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _) = app(StubTransport::new(delivered()));

    let (status, body) = get(app, "/wp-admin").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "API_NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (app, _) = app(StubTransport::new(delivered()));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
