//! Persisted contact submissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::practice_type::PracticeType;
use super::service_interest::ServiceSelection;
use crate::domain::foundation::{SubmissionId, Timestamp, ValidationError};

/// Follow-up state of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Contacted,
    Scheduled,
    Closed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Scheduled => "scheduled",
            SubmissionStatus::Closed => "closed",
        }
    }

    /// Parses a stored value; missing or blank means `Pending`.
    pub fn from_stored(value: Option<&str>) -> Result<Self, ValidationError> {
        match value.map(str::trim) {
            None | Some("") => Ok(SubmissionStatus::Pending),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "contacted" => Ok(SubmissionStatus::Contacted),
            "scheduled" => Ok(SubmissionStatus::Scheduled),
            "closed" => Ok(SubmissionStatus::Closed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// A validated submission not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactSubmission {
    pub practice_name: String,
    pub practice_type: PracticeType,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services: ServiceSelection,
    pub message: Option<String>,
    pub submitted_at: Timestamp,
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub practice_name: String,
    pub practice_type: PracticeType,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services: ServiceSelection,
    pub message: Option<String>,
    pub submitted_at: Timestamp,
    pub status: SubmissionStatus,
}

impl ContactSubmission {
    /// Stores `new` under `id` with pending status.
    pub fn from_new(id: SubmissionId, new: NewContactSubmission) -> Self {
        Self {
            id,
            practice_name: new.practice_name,
            practice_type: new.practice_type,
            contact_name: new.contact_name,
            email: new.email,
            phone: new.phone,
            services: new.services,
            message: new.message,
            submitted_at: new.submitted_at,
            status: SubmissionStatus::Pending,
        }
    }
}
