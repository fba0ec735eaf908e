//! Contact-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};

use super::validation::FieldErrors;

/// Contact-specific errors.
#[derive(Debug, Clone)]
pub enum ContactError {
    /// Form failed validation; nothing was stored.
    Invalid(FieldErrors),
    /// Submission was not found.
    NotFound(SubmissionId),
    /// Status value not recognised.
    InvalidStatus(String),
    /// Storage failure.
    Infrastructure(String),
}

impl ContactError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContactError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::Invalid(_) => ErrorCode::ValidationFailed,
            ContactError::NotFound(_) => ErrorCode::SubmissionNotFound,
            ContactError::InvalidStatus(_) => ErrorCode::InvalidFormat,
            ContactError::Infrastructure(_) => ErrorCode::RecordStoreError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ContactError::Invalid(errors) => format!("Please fix the errors below: {}", errors),
            ContactError::NotFound(id) => format!("Contact submission not found: {}", id),
            ContactError::InvalidStatus(value) => format!("Unknown status: {}", value),
            ContactError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContactError {}

impl From<DomainError> for ContactError {
    fn from(err: DomainError) -> Self {
        if err.code == ErrorCode::SubmissionNotFound {
            if let Some(id) = err.details.get("id").and_then(|id| id.parse().ok()) {
                return ContactError::NotFound(id);
            }
        }
        ContactError::Infrastructure(err.to_string())
    }
}
