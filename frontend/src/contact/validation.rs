use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Values typed into the contact form, captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid name")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid phone number")]
    Phone,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

/// Every rule that failed, in field order. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport(Vec<ValidationError>);

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// One message per line, ready for a notification.
    pub fn joined(&self) -> String {
        self.messages().join("\n")
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// Browser string length: UTF-16 code units, so an emoji counts as two.
fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

/// Checks all four rules without stopping at the first failure.
///
/// The phone rule is a length check only. Whatever the live formatter
/// produces from ten digits is fourteen characters, so formatted input
/// always passes; longer international numbers pass untouched.
pub fn validate(data: &FormSubmission) -> ValidationReport {
    let mut errors = Vec::new();

    if trimmed_len(&data.name) < 2 {
        errors.push(ValidationError::Name);
    }
    if data.email.is_empty() || !is_valid_email(&data.email) {
        errors.push(ValidationError::Email);
    }
    if trimmed_len(&data.phone) < 10 {
        errors.push(ValidationError::Phone);
    }
    if trimmed_len(&data.message) < 10 {
        errors.push(ValidationError::Message);
    }

    ValidationReport(errors)
}
