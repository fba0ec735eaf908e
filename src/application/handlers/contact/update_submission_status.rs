//! UpdateSubmissionStatusHandler - Command handler for lead follow-up.

use std::sync::Arc;
use tracing::info;

use crate::domain::contact::{ContactError, ContactSubmission, SubmissionStatus};
use crate::domain::foundation::SubmissionId;
use crate::ports::ContactSubmissionRepository;

/// Command to move a submission to another follow-up status.
#[derive(Debug, Clone)]
pub struct UpdateSubmissionStatusCommand {
    pub id: SubmissionId,
    /// Wire value, e.g. `contacted`.
    pub status: String,
}

/// Handler for status changes.
pub struct UpdateSubmissionStatusHandler {
    repository: Arc<dyn ContactSubmissionRepository>,
}

impl UpdateSubmissionStatusHandler {
    pub fn new(repository: Arc<dyn ContactSubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubmissionStatusCommand,
    ) -> Result<ContactSubmission, ContactError> {
        let status: SubmissionStatus = cmd
            .status
            .trim()
            .parse()
            .map_err(|_| ContactError::InvalidStatus(cmd.status.clone()))?;

        let updated = self.repository.update_status(cmd.id, status).await?;
        info!(submission_id = %cmd.id, status = %status, "Contact submission status updated");
        Ok(updated)
    }
}
