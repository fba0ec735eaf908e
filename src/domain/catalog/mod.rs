//! Catalog module - services, industries and case studies shown on the site.

mod case_study;
mod errors;
mod offering;

pub use case_study::{CaseStudy, CaseStudyMetric};
pub use errors::CatalogError;
pub use offering::{Industry, ServiceOffering};
