//! Response DTOs for catalog endpoints.

use serde::Serialize;

use crate::domain::catalog::{CaseStudy, Industry, ServiceOffering};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
}

impl From<ServiceOffering> for ServiceResponse {
    fn from(service: ServiceOffering) -> Self {
        Self {
            id: service.id,
            slug: service.slug.into(),
            name: service.name,
            description: service.description,
            icon: service.icon,
            features: service.features,
            benefits: service.benefits,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryResponse {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

impl From<Industry> for IndustryResponse {
    fn from(industry: Industry) -> Self {
        Self {
            id: industry.id,
            slug: industry.slug.into(),
            name: industry.name,
            description: industry.description,
            icon: industry.icon,
            challenges: industry.challenges,
            solutions: industry.solutions,
        }
    }
}

/// A headline number with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct MetricResponse {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyResponse {
    pub id: u32,
    pub practice_name: String,
    pub practice_type: String,
    pub metrics: Vec<MetricResponse>,
    pub testimonial: String,
}

impl From<CaseStudy> for CaseStudyResponse {
    fn from(study: CaseStudy) -> Self {
        let metrics = study
            .metrics
            .into_iter()
            .map(|m| MetricResponse {
                label: m.label(),
                key: m.key,
                value: m.value,
            })
            .collect();

        Self {
            id: study.id,
            practice_name: study.practice_name,
            practice_type: study.practice_type,
            metrics,
            testimonial: study.testimonial,
        }
    }
}
