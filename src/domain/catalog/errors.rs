//! Catalog-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Catalog-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry of the given kind was not found.
    NotFound { kind: &'static str, key: String },
    /// Storage failure.
    Infrastructure(String),
}

impl CatalogError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::NotFound { .. } => ErrorCode::NotFound,
            CatalogError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CatalogError::NotFound { kind, key } => format!("{} not found: {}", kind, key),
            CatalogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}
