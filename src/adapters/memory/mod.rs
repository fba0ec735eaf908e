//! In-memory adapters.
//!
//! Catalog repositories seeded from the bundled YAML document and a
//! contact store for running without a record store.

mod catalog;
mod contact_submission_repository;

pub use catalog::{
    CatalogSeed, CatalogSeedError, InMemoryCaseStudyRepository, InMemoryIndustryRepository,
    InMemoryServiceRepository, BUNDLED_CATALOG,
};
pub use contact_submission_repository::InMemoryContactSubmissionRepository;
