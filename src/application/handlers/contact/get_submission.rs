//! GetSubmissionHandler - Query handler for one lead.

use std::sync::Arc;

use crate::domain::contact::{ContactError, ContactSubmission};
use crate::domain::foundation::SubmissionId;
use crate::ports::ContactSubmissionRepository;

/// Query to get a submission by id.
#[derive(Debug, Clone, Copy)]
pub struct GetSubmissionQuery {
    pub id: SubmissionId,
}

/// Handler for retrieving one submission.
pub struct GetSubmissionHandler {
    repository: Arc<dyn ContactSubmissionRepository>,
}

impl GetSubmissionHandler {
    pub fn new(repository: Arc<dyn ContactSubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSubmissionQuery) -> Result<ContactSubmission, ContactError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(ContactError::NotFound(query.id))
    }
}
