//! Form relay backend
//!
//! Posts the fields form-encoded to a public relay URL (Formspree style),
//! which forwards them to the owner's inbox. Only the HTTP status is
//! interpreted.

use async_trait::async_trait;
use tracing::{info, warn};

use super::transport::{http_client, SubmissionTransport};
use crate::models::config::RelayConfig;
use crate::models::errors::AppResult;
use crate::models::types::{ContactSubmission, DeliveryOutcome};
use crate::utils::constants::RELAY_HONEYPOT_FIELD;

pub struct FormRelayTransport {
    client: reqwest::Client,
    config: RelayConfig,
}

impl FormRelayTransport {
    pub fn new(config: RelayConfig) -> AppResult<Self> {
        Ok(Self {
            client: http_client()?,
            config,
        })
    }

    fn form_fields(&self, submission: &ContactSubmission) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", submission.name().to_string()),
            ("email", submission.email().to_string()),
            ("message", submission.message().to_string()),
            ("_replyto", submission.email().to_string()),
            ("_subject", submission.subject()),
        ];
        // The relay discards anything with the honeypot filled
        if let Some(trap) = submission.honeypot() {
            fields.push((RELAY_HONEYPOT_FIELD, trap.to_string()));
        }
        fields
    }
}

#[async_trait]
impl SubmissionTransport for FormRelayTransport {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        let response = match self
            .client
            .post(&self.config.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&self.form_fields(submission))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Form relay request failed");
                return DeliveryOutcome::TransportFailure {
                    detail: format!("Form relay request failed: {}", e),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            info!("📨 Form relay accepted submission");
            DeliveryOutcome::Delivered { id: None }
        } else {
            warn!(status = %status.as_u16(), "Form relay rejected submission");
            DeliveryOutcome::RejectedByRemote {
                reason: format!("Form relay responded with {}", status),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate;
    use crate::models::types::ContactForm;

    fn transport() -> FormRelayTransport {
        FormRelayTransport::new(RelayConfig {
            url: "https://formspree.io/f/test".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_form_fields_without_honeypot() {
        let submission = validate(&ContactForm::new(
            "Jane Doe",
            "jane@example.com",
            "This is a test message.",
        ))
        .unwrap();
        let fields = transport().form_fields(&submission);
        assert!(fields.iter().any(|(k, v)| *k == "_replyto" && v == "jane@example.com"));
        assert!(!fields.iter().any(|(k, _)| *k == RELAY_HONEYPOT_FIELD));
    }

    #[test]
    fn test_form_fields_forward_honeypot() {
        let mut form = ContactForm::new("Jane Doe", "jane@example.com", "This is a test message.");
        form.gotcha = Some("filled".to_string());
        let submission = validate(&form).unwrap();
        let fields = transport().form_fields(&submission);
        assert!(fields.iter().any(|(k, v)| *k == RELAY_HONEYPOT_FIELD && v == "filled"));
    }
}
