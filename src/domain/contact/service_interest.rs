//! Services a lead can express interest in, and the multi-select over them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifier of the "select everything" checkbox. Never stored.
pub const ALL_SERVICES_ID: &str = "all-services";

/// A concrete service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    AiAssistants,
    AdManagement,
    ConversationalSeo,
}

impl ServiceInterest {
    pub fn all() -> &'static [ServiceInterest] {
        &[
            ServiceInterest::AiAssistants,
            ServiceInterest::AdManagement,
            ServiceInterest::ConversationalSeo,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ServiceInterest::AiAssistants => "ai-assistants",
            ServiceInterest::AdManagement => "ad-management",
            ServiceInterest::ConversationalSeo => "conversational-seo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceInterest::AiAssistants => "AI Assistants / Conversational Websites",
            ServiceInterest::AdManagement => "Ad Management",
            ServiceInterest::ConversationalSeo => "Conversational SEO",
        }
    }
}

impl fmt::Display for ServiceInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ServiceInterest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceInterest::all()
            .iter()
            .copied()
            .find(|service| service.id() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "servicesInterested",
                    format!("unknown service '{}'", s),
                )
            })
    }
}

/// Set of selected services.
///
/// `all-services` is a view over this set: checking it selects every
/// concrete service, unchecking it clears the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSelection(BTreeSet<ServiceInterest>);

impl ServiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from wire ids, expanding `all-services`.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.toggle(id.as_ref(), true)?;
        }
        Ok(selection)
    }

    /// Applies one checkbox change.
    pub fn toggle(&mut self, id: &str, checked: bool) -> Result<(), ValidationError> {
        if id == ALL_SERVICES_ID {
            if checked {
                self.0 = ServiceInterest::all().iter().copied().collect();
            } else {
                self.0.clear();
            }
            return Ok(());
        }

        let service: ServiceInterest = id.parse()?;
        if checked {
            self.0.insert(service);
        } else {
            self.0.remove(&service);
        }
        Ok(())
    }

    /// True when every concrete service is selected.
    pub fn is_all(&self) -> bool {
        self.0.len() == ServiceInterest::all().len()
    }

    pub fn contains(&self, service: ServiceInterest) -> bool {
        self.0.contains(&service)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ServiceInterest> + '_ {
        self.0.iter().copied()
    }

    /// Wire ids in stable order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.iter().map(|s| s.id()).collect()
    }
}

impl FromIterator<ServiceInterest> for ServiceSelection {
    fn from_iter<T: IntoIterator<Item = ServiceInterest>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
