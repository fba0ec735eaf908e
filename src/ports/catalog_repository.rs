//! Catalog repository ports.
//!
//! The catalog is read-mostly: the site lists and looks up entries, and
//! `save` exists so stores can be seeded or edited by operators.

use async_trait::async_trait;

use crate::domain::catalog::{CaseStudy, Industry, ServiceOffering};
use crate::domain::foundation::{DomainError, Slug};

/// Repository port for offered services.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// All services ordered by id.
    async fn list(&self) -> Result<Vec<ServiceOffering>, DomainError>;

    /// Returns `None` if no service has this slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ServiceOffering>, DomainError>;

    /// Inserts or replaces by id.
    async fn save(&self, service: &ServiceOffering) -> Result<(), DomainError>;
}

/// Repository port for industries served.
#[async_trait]
pub trait IndustryRepository: Send + Sync {
    /// All industries ordered by id.
    async fn list(&self) -> Result<Vec<Industry>, DomainError>;

    /// Returns `None` if no industry has this slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Industry>, DomainError>;

    /// Inserts or replaces by id.
    async fn save(&self, industry: &Industry) -> Result<(), DomainError>;
}

/// Repository port for case studies.
#[async_trait]
pub trait CaseStudyRepository: Send + Sync {
    /// All case studies ordered by id.
    async fn list(&self) -> Result<Vec<CaseStudy>, DomainError>;

    async fn find_by_id(&self, id: u32) -> Result<Option<CaseStudy>, DomainError>;

    /// Inserts or replaces by id.
    async fn save(&self, case_study: &CaseStudy) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_repositories_are_object_safe() {
        fn _services(_repo: &dyn ServiceRepository) {}
        fn _industries(_repo: &dyn IndustryRepository) {}
        fn _case_studies(_repo: &dyn CaseStudyRepository) {}
    }
}
