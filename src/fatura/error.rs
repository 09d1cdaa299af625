use std::fmt;

use thiserror::Error;

/// Errors that can occur while assembling an invoice request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FaturaError {
    /// One or more fields failed validation.
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// Builder was used without a required input.
    #[error("builder error: {0}")]
    Builder(String),

    /// Request body is not a valid payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field error, with the message shown next to the form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Payload field name (e.g. "DESTINATARIO_CNPJ_CPF").
    pub field: &'static str,
    /// Message in Portuguese, ready for display.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
