//! Contact field validation
//!
//! Pure checks over the raw form: minimum lengths for name and message and
//! the address grammar for email. Every failing field is reported, in field
//! order, so the page can mark all of them at once.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::types::{ContactForm, ContactSubmission, Field, FieldViolation};
use crate::utils::constants::{
    MESSAGE_MIN_CHARS, NAME_MIN_CHARS, REASON_INVALID_EMAIL, REASON_MESSAGE_TOO_SHORT,
    REASON_NAME_TOO_SHORT, REASON_REQUIRED,
};

lazy_static! {
    // The regex crate has no look-around; the leading-dot and double-dot
    // rules are checked separately in `is_valid_email`.
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .expect("email pattern is valid");
}

/// Check an address against the email grammar
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Validate a raw form into an accepted submission
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    match form.name.as_deref() {
        None => violations.push(FieldViolation::new(Field::Name, REASON_REQUIRED)),
        Some(name) if name.chars().count() < NAME_MIN_CHARS => {
            violations.push(FieldViolation::new(Field::Name, REASON_NAME_TOO_SHORT))
        }
        Some(_) => {}
    }

    match form.email.as_deref() {
        None => violations.push(FieldViolation::new(Field::Email, REASON_REQUIRED)),
        Some(email) if !is_valid_email(email) => {
            violations.push(FieldViolation::new(Field::Email, REASON_INVALID_EMAIL))
        }
        Some(_) => {}
    }

    match form.message.as_deref() {
        None => violations.push(FieldViolation::new(Field::Message, REASON_REQUIRED)),
        Some(message) if message.chars().count() < MESSAGE_MIN_CHARS => {
            violations.push(FieldViolation::new(Field::Message, REASON_MESSAGE_TOO_SHORT))
        }
        Some(_) => {}
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ContactSubmission {
        name: form.name.clone().unwrap_or_default(),
        email: form.email.clone().unwrap_or_default(),
        message: form.message.clone().unwrap_or_default(),
        honeypot: form.gotcha.clone(),
    })
}
