//! Request and response DTOs for contact endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactSubmission;

/// Confirmation shown after a successful submission.
pub const SUBMITTED_MESSAGE: &str =
    "Thank you! We'll be in touch within 24 hours to schedule your demo.";

/// Request to change a submission's follow-up status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionResponse {
    pub id: u64,
    pub practice_name: String,
    pub practice_type: String,
    pub practice_type_label: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services_interested: Vec<String>,
    pub message: Option<String>,
    pub submitted_at: String,
    pub status: String,
}

impl From<ContactSubmission> for ContactSubmissionResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id.value(),
            practice_name: submission.practice_name,
            practice_type: submission.practice_type.id().to_string(),
            practice_type_label: submission.practice_type.label().to_string(),
            contact_name: submission.contact_name,
            email: submission.email,
            phone: submission.phone,
            services_interested: submission
                .services
                .ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            message: submission.message,
            submitted_at: submission.submitted_at.to_rfc3339(),
            status: submission.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitContactResponse {
    pub message: String,
    pub submission: ContactSubmissionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCommandResponse {
    pub id: u64,
    pub message: String,
}
