//! Type definitions for the contact flow
//! Wire input, the accepted submission, and the delivery outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw contact form as posted by the page.
///
/// Every field is optional so that a missing field is reported by the
/// validator as a per-field violation instead of a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Hidden honeypot input. Humans leave it empty; the form relay drops
    /// submissions where it is filled.
    #[serde(default, rename = "_gotcha", skip_serializing_if = "Option::is_none")]
    pub gotcha: Option<String>,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            gotcha: None,
        }
    }
}

/// A contact submission that passed validation.
///
/// Only `core::validator::validate` builds this, so holding one means the
/// length and address rules hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
    pub(crate) honeypot: Option<String>,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Honeypot value, only when the visitor (or a bot) filled it in
    pub fn honeypot(&self) -> Option<&str> {
        self.honeypot.as_deref().filter(|v| !v.is_empty())
    }

    /// Subject line used for the notification email
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    /// Plain-text body used for the notification email
    pub fn text_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}\n",
            self.name, self.email, self.message
        )
    }
}

/// Contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: Field,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The destination accepted the submission
    Delivered { id: Option<String> },
    /// The destination answered but declined delivery
    RejectedByRemote { reason: String },
    /// The destination could not be reached or answered garbage
    TransportFailure { detail: String },
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered { .. } => "delivered",
            DeliveryOutcome::RejectedByRemote { .. } => "rejected_by_remote",
            DeliveryOutcome::TransportFailure { .. } => "transport_failure",
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}
