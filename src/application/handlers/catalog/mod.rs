//! Catalog query handlers.

mod case_studies;
mod industries;
mod services;

pub use case_studies::ListCaseStudiesHandler;
pub use industries::{GetIndustryHandler, GetIndustryQuery, ListIndustriesHandler};
pub use services::{GetServiceHandler, GetServiceQuery, ListServicesHandler};
