//! Industry catalog queries.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Industry};
use crate::domain::foundation::Slug;
use crate::ports::IndustryRepository;

/// Handler for listing every industry served.
pub struct ListIndustriesHandler {
    repository: Arc<dyn IndustryRepository>,
}

impl ListIndustriesHandler {
    pub fn new(repository: Arc<dyn IndustryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Industry>, CatalogError> {
        Ok(self.repository.list().await?)
    }
}

/// Query to get one industry by slug.
#[derive(Debug, Clone)]
pub struct GetIndustryQuery {
    pub slug: String,
}

/// Handler for the industry detail page.
pub struct GetIndustryHandler {
    repository: Arc<dyn IndustryRepository>,
}

impl GetIndustryHandler {
    pub fn new(repository: Arc<dyn IndustryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetIndustryQuery) -> Result<Industry, CatalogError> {
        let slug = Slug::new(query.slug.as_str())
            .map_err(|_| CatalogError::not_found("Industry", &query.slug))?;

        self.repository
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| CatalogError::not_found("Industry", slug.as_str()))
    }
}
