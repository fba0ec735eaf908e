//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ServiceRepository`, `IndustryRepository`, `CaseStudyRepository` - catalog content
//! - `ContactSubmissionRepository` - captured leads

mod catalog_repository;
mod contact_submission_repository;

pub use catalog_repository::{CaseStudyRepository, IndustryRepository, ServiceRepository};
pub use contact_submission_repository::ContactSubmissionRepository;
