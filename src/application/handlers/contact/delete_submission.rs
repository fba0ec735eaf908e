//! DeleteSubmissionHandler - Command handler for removing a lead.

use std::sync::Arc;
use tracing::info;

use crate::domain::contact::ContactError;
use crate::domain::foundation::SubmissionId;
use crate::ports::ContactSubmissionRepository;

/// Command to delete a submission.
#[derive(Debug, Clone, Copy)]
pub struct DeleteSubmissionCommand {
    pub id: SubmissionId,
}

/// Handler for deleting submissions.
pub struct DeleteSubmissionHandler {
    repository: Arc<dyn ContactSubmissionRepository>,
}

impl DeleteSubmissionHandler {
    pub fn new(repository: Arc<dyn ContactSubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubmissionCommand) -> Result<(), ContactError> {
        self.repository.delete(cmd.id).await?;
        info!(submission_id = %cmd.id, "Contact submission deleted");
        Ok(())
    }
}
