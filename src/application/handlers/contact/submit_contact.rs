//! SubmitContactHandler - Command handler for the contact form.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::contact::{ContactError, ContactForm, ContactSubmission};
use crate::domain::foundation::Timestamp;
use crate::ports::ContactSubmissionRepository;

/// Command carrying the raw form as typed by the visitor.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub form: ContactForm,
}

/// Handler for capturing a lead.
pub struct SubmitContactHandler {
    repository: Arc<dyn ContactSubmissionRepository>,
}

impl SubmitContactHandler {
    pub fn new(repository: Arc<dyn ContactSubmissionRepository>) -> Self {
        Self { repository }
    }

    /// Validates the form and stores it with `pending` status.
    ///
    /// An invalid form is rejected with every field error and nothing is stored.
    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<ContactSubmission, ContactError> {
        let submission = cmd
            .form
            .into_submission(Timestamp::now())
            .map_err(ContactError::Invalid)?;

        let stored = self.repository.create(submission).await.map_err(|e| {
            warn!("Failed to store contact submission: {}", e);
            ContactError::from(e)
        })?;

        info!(
            submission_id = %stored.id,
            practice_type = %stored.practice_type,
            services = stored.services.len(),
            "Contact submission received"
        );

        Ok(stored)
    }
}
