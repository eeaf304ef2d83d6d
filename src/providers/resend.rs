//! Resend email backend
//!
//! Sends the submission to the site owner's inbox through the Resend
//! transactional email API, with the visitor as `reply_to`.
//!
//! API: POST https://api.resend.com/emails (Bearer key)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::transport::{http_client, SubmissionTransport};
use crate::models::config::ResendConfig;
use crate::models::errors::AppResult;
use crate::models::types::{ContactSubmission, DeliveryOutcome};
use crate::utils::constants::RESEND_EMAILS_PATH;

/// Request body for the send-email endpoint
#[derive(Debug, Serialize)]
pub struct SendEmailRequest<'a> {
    pub from: &'a str,
    pub to: Vec<&'a str>,
    pub reply_to: &'a str,
    pub subject: String,
    pub text: String,
}

/// Successful send response
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: Option<String>,
}

/// Error payload returned on non-2xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendErrorBody {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub name: Option<String>,
}

pub struct ResendTransport {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendTransport {
    pub fn new(config: ResendConfig) -> AppResult<Self> {
        Ok(Self {
            client: http_client()?,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, RESEND_EMAILS_PATH)
    }

    fn request_body<'a>(&'a self, submission: &'a ContactSubmission) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from,
            to: vec![self.config.to.as_str()],
            reply_to: submission.email(),
            subject: submission.subject(),
            text: submission.text_body(),
        }
    }
}

#[async_trait]
impl SubmissionTransport for ResendTransport {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        let response = match self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(submission))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Resend request failed");
                return DeliveryOutcome::TransportFailure {
                    detail: format!("Resend request failed: {}", e),
                };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return DeliveryOutcome::TransportFailure {
                    detail: format!("Failed to read Resend response: {}", e),
                };
            }
        };

        if status.is_success() {
            let id = serde_json::from_str::<SendEmailResponse>(&body)
                .ok()
                .and_then(|r| r.id);
            info!(id = ?id, "📨 Resend accepted contact email");
            return DeliveryOutcome::Delivered { id };
        }

        let reason = serde_json::from_str::<ResendErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Resend API error: {}", status));

        warn!(status = %status.as_u16(), reason = %reason, "Resend rejected contact email");
        DeliveryOutcome::RejectedByRemote { reason }
    }
}
