//! Service catalog queries.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ServiceOffering};
use crate::domain::foundation::Slug;
use crate::ports::ServiceRepository;

/// Handler for listing every offered service.
pub struct ListServicesHandler {
    repository: Arc<dyn ServiceRepository>,
}

impl ListServicesHandler {
    pub fn new(repository: Arc<dyn ServiceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<ServiceOffering>, CatalogError> {
        Ok(self.repository.list().await?)
    }
}

/// Query to get one service by slug.
#[derive(Debug, Clone)]
pub struct GetServiceQuery {
    pub slug: String,
}

/// Handler for the service detail page.
pub struct GetServiceHandler {
    repository: Arc<dyn ServiceRepository>,
}

impl GetServiceHandler {
    pub fn new(repository: Arc<dyn ServiceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetServiceQuery) -> Result<ServiceOffering, CatalogError> {
        // A malformed slug cannot name any entry.
        let slug = Slug::new(query.slug.as_str())
            .map_err(|_| CatalogError::not_found("Service", &query.slug))?;

        self.repository
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| CatalogError::not_found("Service", slug.as_str()))
    }
}
