//! ROI-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};

/// ROI-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoiError {
    /// A slider value fell outside its accepted range.
    InvalidInput(ValidationError),
}

impl RoiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RoiError::InvalidInput(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            RoiError::InvalidInput(_) => ErrorCode::ValidationFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RoiError::InvalidInput(err) => err.to_string(),
        }
    }

    /// Name of the offending input, in wire form.
    pub fn field(&self) -> &str {
        match self {
            RoiError::InvalidInput(err) => err.field(),
        }
    }
}

impl std::fmt::Display for RoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RoiError {}

impl From<ValidationError> for RoiError {
    fn from(err: ValidationError) -> Self {
        RoiError::InvalidInput(err)
    }
}
