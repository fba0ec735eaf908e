//! ListSubmissionsHandler - Query handler for the lead inbox.

use std::sync::Arc;

use crate::domain::contact::{ContactError, ContactSubmission};
use crate::ports::ContactSubmissionRepository;

/// Handler for listing submissions, newest first.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn ContactSubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn ContactSubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<ContactSubmission>, ContactError> {
        Ok(self.repository.list().await?)
    }
}
