//! In-memory contact submission store.
//!
//! Used in development and tests when no record store is configured.
//! Ids are assigned sequentially from 1 and never reused.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::contact::{ContactSubmission, NewContactSubmission, SubmissionStatus};
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::ports::ContactSubmissionRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    submissions: BTreeMap<u64, ContactSubmission>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryContactSubmissionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryContactSubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored submissions.
    pub async fn count(&self) -> usize {
        self.store.read().await.submissions.len()
    }
}

fn not_found(id: SubmissionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubmissionNotFound,
        format!("Contact submission not found: {}", id),
    )
    .with_detail("id", id.to_string())
}

#[async_trait]
impl ContactSubmissionRepository for InMemoryContactSubmissionRepository {
    async fn create(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = SubmissionId::new(store.next_id);
        let stored = ContactSubmission::from_new(id, submission);
        store.submissions.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ContactSubmission>, DomainError> {
        Ok(self.store.read().await.submissions.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        let store = self.store.read().await;
        let mut all: Vec<ContactSubmission> = store.submissions.values().cloned().collect();
        // Newest first; ties broken by id so later inserts still come first.
        all.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.value().cmp(&a.id.value()))
        });
        Ok(all)
    }

    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ContactSubmission, DomainError> {
        let mut store = self.store.write().await;
        let submission = store
            .submissions
            .get_mut(&id.value())
            .ok_or_else(|| not_found(id))?;
        submission.status = status;
        Ok(submission.clone())
    }

    async fn delete(&self, id: SubmissionId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        store
            .submissions
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
