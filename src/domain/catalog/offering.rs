//! Services offered and industries served.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Slug;

/// One offered service, e.g. conversational SEO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: u32,
    pub slug: Slug,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// A practice vertical with its typical challenges and our answers to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: u32,
    pub slug: Slug,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
}
