// ABOUTME: Input validation errors for laundry payloads
// ABOUTME: Carries the offending field so the API can report it

use thiserror::Error;

/// Validation error for a single payload field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_label() -> Self {
        Self::new("label", "label must not be empty")
    }

    pub fn null_not_allowed(field: &str) -> Self {
        Self::new(field, format!("{} cannot be null", field))
    }
}
