//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! shared by the catalog, contact, ROI and chat modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{Slug, SubmissionId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
