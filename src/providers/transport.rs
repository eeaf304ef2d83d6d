//! Submission transport seam
//!
//! Both delivery backends answer with the same tagged `DeliveryOutcome`, so
//! handlers never branch on which one is configured.

use std::sync::Arc;

use async_trait::async_trait;

use super::relay::FormRelayTransport;
use super::resend::ResendTransport;
use crate::models::config::TransportConfig;
use crate::models::errors::AppResult;
use crate::models::types::{ContactSubmission, DeliveryOutcome};

/// Delivers one accepted submission with a single outbound call
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;

    /// Attempt delivery once. Never retries.
    async fn deliver(&self, submission: &ContactSubmission) -> DeliveryOutcome;
}

/// Build the configured backend
pub fn build_transport(config: &TransportConfig) -> AppResult<Arc<dyn SubmissionTransport>> {
    let transport: Arc<dyn SubmissionTransport> = match config {
        TransportConfig::Resend(resend) => Arc::new(ResendTransport::new(resend.clone())?),
        TransportConfig::Relay(relay) => Arc::new(FormRelayTransport::new(relay.clone())?),
    };
    Ok(transport)
}

/// Shared outbound HTTP client with the app User-Agent
pub(crate) fn http_client() -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(crate::utils::constants::USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{RelayConfig, ResendConfig};

    #[test]
    fn test_build_transport_picks_backend() {
        let resend = build_transport(&TransportConfig::Resend(ResendConfig {
            api_key: "re_test".to_string(),
            to: "erin@example.com".to_string(),
            from: "Contact Form <contact@example.com>".to_string(),
            base_url: "https://api.resend.com".to_string(),
        }))
        .unwrap();
        assert_eq!(resend.name(), "resend");

        let relay = build_transport(&TransportConfig::Relay(RelayConfig {
            url: "https://formspree.io/f/test".to_string(),
        }))
        .unwrap();
        assert_eq!(relay.name(), "relay");
    }
}
