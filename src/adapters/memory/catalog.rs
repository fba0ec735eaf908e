//! In-memory catalog repositories.
//!
//! Entries live in `BTreeMap`s keyed by id so listings come back in id
//! order. [`CatalogSeed`] loads the bundled `data/catalog.yaml`.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::catalog::{CaseStudy, CaseStudyMetric, Industry, ServiceOffering};
use crate::domain::foundation::{DomainError, Slug, ValidationError};
use crate::ports::{CaseStudyRepository, IndustryRepository, ServiceRepository};

/// Catalog document compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../../data/catalog.yaml");

/// Errors raised while loading catalog seed data.
#[derive(Debug, Error)]
pub enum CatalogSeedError {
    #[error("catalog YAML is malformed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog entry {id} has an invalid slug: {source}")]
    InvalidSlug { id: u32, source: ValidationError },
}

#[derive(Debug, Deserialize)]
struct ServiceSeed {
    id: u32,
    slug: Option<String>,
    name: String,
    description: String,
    icon: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IndustrySeed {
    id: u32,
    slug: Option<String>,
    name: String,
    description: String,
    icon: String,
    #[serde(default)]
    challenges: Vec<String>,
    #[serde(default)]
    solutions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CaseStudySeed {
    id: u32,
    practice_name: String,
    practice_type: String,
    #[serde(default)]
    metrics: Vec<CaseStudyMetric>,
    testimonial: String,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    services: Vec<ServiceSeed>,
    #[serde(default)]
    industries: Vec<IndustrySeed>,
    #[serde(default)]
    case_studies: Vec<CaseStudySeed>,
}

/// Parsed catalog content, ready to load into repositories.
#[derive(Debug, Clone, Default)]
pub struct CatalogSeed {
    pub services: Vec<ServiceOffering>,
    pub industries: Vec<Industry>,
    pub case_studies: Vec<CaseStudy>,
}

fn resolve_slug(id: u32, slug: Option<String>, name: &str) -> Result<Slug, CatalogSeedError> {
    match slug {
        Some(slug) => Slug::new(slug),
        None => Slug::from_name(name),
    }
    .map_err(|source| CatalogSeedError::InvalidSlug { id, source })
}

impl CatalogSeed {
    /// Parses a catalog YAML document. Missing slugs are derived from names.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogSeedError> {
        let doc: CatalogDocument = serde_yaml::from_str(yaml)?;

        let services = doc
            .services
            .into_iter()
            .map(|s| {
                Ok(ServiceOffering {
                    slug: resolve_slug(s.id, s.slug, &s.name)?,
                    id: s.id,
                    name: s.name,
                    description: s.description,
                    icon: s.icon,
                    features: s.features,
                    benefits: s.benefits,
                })
            })
            .collect::<Result<Vec<_>, CatalogSeedError>>()?;

        let industries = doc
            .industries
            .into_iter()
            .map(|i| {
                Ok(Industry {
                    slug: resolve_slug(i.id, i.slug, &i.name)?,
                    id: i.id,
                    name: i.name,
                    description: i.description,
                    icon: i.icon,
                    challenges: i.challenges,
                    solutions: i.solutions,
                })
            })
            .collect::<Result<Vec<_>, CatalogSeedError>>()?;

        let case_studies = doc
            .case_studies
            .into_iter()
            .map(|c| CaseStudy {
                id: c.id,
                practice_name: c.practice_name,
                practice_type: c.practice_type,
                metrics: c.metrics,
                testimonial: c.testimonial,
            })
            .collect();

        Ok(Self {
            services,
            industries,
            case_studies,
        })
    }

    /// The catalog shipped with the site.
    pub fn bundled() -> Result<Self, CatalogSeedError> {
        Self::from_yaml(BUNDLED_CATALOG)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Services
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceRepository {
    services: Arc<RwLock<BTreeMap<u32, ServiceOffering>>>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(services: impl IntoIterator<Item = ServiceOffering>) -> Self {
        let map = services.into_iter().map(|s| (s.id, s)).collect();
        Self {
            services: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn list(&self) -> Result<Vec<ServiceOffering>, DomainError> {
        Ok(self.services.read().await.values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ServiceOffering>, DomainError> {
        let services = self.services.read().await;
        Ok(services.values().find(|s| &s.slug == slug).cloned())
    }

    async fn save(&self, service: &ServiceOffering) -> Result<(), DomainError> {
        self.services
            .write()
            .await
            .insert(service.id, service.clone());
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Industries
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryIndustryRepository {
    industries: Arc<RwLock<BTreeMap<u32, Industry>>>,
}

impl InMemoryIndustryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_industries(industries: impl IntoIterator<Item = Industry>) -> Self {
        let map = industries.into_iter().map(|i| (i.id, i)).collect();
        Self {
            industries: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl IndustryRepository for InMemoryIndustryRepository {
    async fn list(&self) -> Result<Vec<Industry>, DomainError> {
        Ok(self.industries.read().await.values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Industry>, DomainError> {
        let industries = self.industries.read().await;
        Ok(industries.values().find(|i| &i.slug == slug).cloned())
    }

    async fn save(&self, industry: &Industry) -> Result<(), DomainError> {
        self.industries
            .write()
            .await
            .insert(industry.id, industry.clone());
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Case studies
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseStudyRepository {
    case_studies: Arc<RwLock<BTreeMap<u32, CaseStudy>>>,
}

impl InMemoryCaseStudyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_studies(case_studies: impl IntoIterator<Item = CaseStudy>) -> Self {
        let map = case_studies.into_iter().map(|c| (c.id, c)).collect();
        Self {
            case_studies: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl CaseStudyRepository for InMemoryCaseStudyRepository {
    async fn list(&self) -> Result<Vec<CaseStudy>, DomainError> {
        Ok(self.case_studies.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<CaseStudy>, DomainError> {
        Ok(self.case_studies.read().await.get(&id).cloned())
    }

    async fn save(&self, case_study: &CaseStudy) -> Result<(), DomainError> {
        self.case_studies
            .write()
            .await
            .insert(case_study.id, case_study.clone());
        Ok(())
    }
}
