//! Contact submission repository port.
//!
//! Defines the contract for persisting leads captured by the contact form.
//! Ids are assigned by the store on `create`.

use async_trait::async_trait;

use crate::domain::contact::{ContactSubmission, NewContactSubmission, SubmissionStatus};
use crate::domain::foundation::{DomainError, SubmissionId};

/// Repository port for contact submissions.
#[async_trait]
pub trait ContactSubmissionRepository: Send + Sync {
    /// Persist a new submission and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `RecordStoreError` if the store rejects the record
    /// - `RecordStoreUnavailable` if the store cannot be reached
    async fn create(&self, submission: NewContactSubmission)
        -> Result<ContactSubmission, DomainError>;

    /// Find a submission by id. Returns `None` if not found.
    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ContactSubmission>, DomainError>;

    /// All submissions, newest first.
    async fn list(&self) -> Result<Vec<ContactSubmission>, DomainError>;

    /// Change the follow-up status.
    ///
    /// # Errors
    ///
    /// - `SubmissionNotFound` (with an `id` detail) if the submission doesn't exist
    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ContactSubmission, DomainError>;

    /// Remove a submission.
    ///
    /// # Errors
    ///
    /// - `SubmissionNotFound` (with an `id` detail) if the submission doesn't exist
    async fn delete(&self, id: SubmissionId) -> Result<(), DomainError>;
}
