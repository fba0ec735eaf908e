//! Case study queries.

use std::sync::Arc;

use crate::domain::catalog::{CaseStudy, CatalogError};
use crate::ports::CaseStudyRepository;

/// Handler for listing published case studies.
pub struct ListCaseStudiesHandler {
    repository: Arc<dyn CaseStudyRepository>,
}

impl ListCaseStudiesHandler {
    pub fn new(repository: Arc<dyn CaseStudyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<CaseStudy>, CatalogError> {
        Ok(self.repository.list().await?)
    }
}
