//! Contact submissions stored in the hosted `contact_submission_c` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::client::{RecordStoreClient, RecordStoreError};
use super::wire::{QueryParams, SortType};
use crate::domain::contact::{
    ContactSubmission, NewContactSubmission, PracticeType, ServiceInterest, ServiceSelection,
    SubmissionStatus,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, SubmissionId, Timestamp, ValidationError,
};
use crate::ports::ContactSubmissionRepository;

pub const CONTACT_SUBMISSION_TABLE: &str = "contact_submission_c";

const COLUMNS: &[&str] = &[
    "Name",
    "Tags",
    "submitted_at_c",
    "status_c",
    "practice_type_c",
    "contact_name_c",
    "email_c",
    "phone_c",
    "message_c",
];

/// One row of `contact_submission_c`.
///
/// Every column is optional on read; rows written by older site versions
/// only carry `Name`, `Tags`, `submitted_at_c` and `status_c`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma-separated service ids.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_type_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_c: Option<String>,
}

impl ContactRecord {
    pub fn from_new(submission: &NewContactSubmission) -> Self {
        Self {
            id: None,
            name: Some(submission.practice_name.clone()),
            tags: Some(submission.services.ids().join(",")),
            submitted_at_c: Some(submission.submitted_at.to_rfc3339()),
            status_c: Some(SubmissionStatus::Pending.as_str().to_string()),
            practice_type_c: Some(submission.practice_type.id().to_string()),
            contact_name_c: Some(submission.contact_name.clone()),
            email_c: Some(submission.email.clone()),
            phone_c: Some(submission.phone.clone()),
            message_c: submission.message.clone(),
        }
    }

    /// Partial update touching only the status column.
    pub fn status_update(id: SubmissionId, status: SubmissionStatus) -> Self {
        Self {
            id: Some(id.value()),
            status_c: Some(status.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Converts a stored row into a submission.
    ///
    /// A missing practice type reads as `other`; unknown tags are skipped.
    pub fn into_submission(self) -> Result<ContactSubmission, RecordStoreError> {
        let id = self
            .id
            .map(SubmissionId::new)
            .ok_or_else(|| RecordStoreError::Parse("record without Id".to_string()))?;

        let submitted_at = self
            .submitted_at_c
            .as_deref()
            .ok_or_else(|| RecordStoreError::Parse(format!("record {} has no submitted_at_c", id)))
            .and_then(|s| {
                Timestamp::parse_rfc3339(s).map_err(|e| RecordStoreError::Parse(e.to_string()))
            })?;

        let status = SubmissionStatus::from_stored(self.status_c.as_deref())
            .map_err(|e| RecordStoreError::Parse(e.to_string()))?;

        let practice_type = match self.practice_type_c.as_deref().map(str::trim) {
            None | Some("") => PracticeType::Other,
            Some(value) => value
                .parse()
                .map_err(|e: ValidationError| RecordStoreError::Parse(e.to_string()))?,
        };

        Ok(ContactSubmission {
            id,
            practice_name: self.name.unwrap_or_default(),
            practice_type,
            contact_name: self.contact_name_c.unwrap_or_default(),
            email: self.email_c.unwrap_or_default(),
            phone: self.phone_c.unwrap_or_default(),
            services: parse_tags(id, self.tags.as_deref()),
            message: self.message_c.filter(|m| !m.trim().is_empty()),
            submitted_at,
            status,
        })
    }
}

fn parse_tags(id: SubmissionId, tags: Option<&str>) -> ServiceSelection {
    tags.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter_map(|t| match t.parse::<ServiceInterest>() {
            Ok(service) => Some(service),
            Err(_) => {
                warn!(submission_id = %id, tag = t, "Skipping unknown service tag");
                None
            }
        })
        .collect()
}

fn to_domain_error(err: RecordStoreError) -> DomainError {
    let code = if err.is_retryable() {
        ErrorCode::RecordStoreUnavailable
    } else {
        ErrorCode::RecordStoreError
    };
    let mut domain = DomainError::new(code, err.to_string());
    if let RecordStoreError::RecordFailed { field_errors, .. } = &err {
        for field_error in field_errors {
            domain = domain.with_detail(field_error.field_label.clone(), field_error.message.clone());
        }
    }
    domain
}

fn not_found(id: SubmissionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubmissionNotFound,
        format!("Contact submission not found: {}", id),
    )
    .with_detail("id", id.to_string())
}

/// `ContactSubmissionRepository` backed by the hosted record store.
pub struct RecordStoreContactRepository {
    client: RecordStoreClient,
}

impl RecordStoreContactRepository {
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }

    fn query_params() -> QueryParams {
        QueryParams::with_fields(COLUMNS)
    }
}

#[async_trait]
impl ContactSubmissionRepository for RecordStoreContactRepository {
    async fn create(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, DomainError> {
        let record = ContactRecord::from_new(&submission);
        let created: ContactRecord = self
            .client
            .create_record(CONTACT_SUBMISSION_TABLE, &record)
            .await
            .map_err(to_domain_error)?;

        // The store may echo only the columns it assigned.
        let id = created.id.map(SubmissionId::new).ok_or_else(|| {
            to_domain_error(RecordStoreError::Parse(
                "created record has no Id".to_string(),
            ))
        })?;
        Ok(ContactSubmission::from_new(id, submission))
    }

    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ContactSubmission>, DomainError> {
        let record: Option<ContactRecord> = self
            .client
            .get_record_by_id(CONTACT_SUBMISSION_TABLE, id.value(), &Self::query_params())
            .await
            .map_err(to_domain_error)?;

        record
            .map(|r| r.into_submission().map_err(to_domain_error))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        let params = Self::query_params().order_by("submitted_at_c", SortType::Desc);
        let records: Vec<ContactRecord> = self
            .client
            .fetch_records(CONTACT_SUBMISSION_TABLE, &params)
            .await
            .map_err(to_domain_error)?;

        let mut submissions = Vec::with_capacity(records.len());
        for record in records {
            match record.into_submission() {
                Ok(submission) => submissions.push(submission),
                Err(e) => warn!("Skipping unreadable contact submission: {}", e),
            }
        }
        Ok(submissions)
    }

    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ContactSubmission, DomainError> {
        let mut current = self.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let _: Option<ContactRecord> = self
            .client
            .update_record(
                CONTACT_SUBMISSION_TABLE,
                &ContactRecord::status_update(id, status),
            )
            .await
            .map_err(to_domain_error)?;

        current.status = status;
        Ok(current)
    }

    async fn delete(&self, id: SubmissionId) -> Result<(), DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.client
            .delete_record(CONTACT_SUBMISSION_TABLE, id.value())
            .await
            .map_err(to_domain_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::records::client::RecordStoreClientConfig;
    use crate::domain::contact::ContactForm;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    const RECORDS_PATH: &str = "/v1/tables/contact_submission_c/records";

    fn repository(server: &MockServer) -> RecordStoreContactRepository {
        let config = RecordStoreClientConfig::new(server.base_url(), "proj", "key")
            .with_max_retries(0)
            .with_retry_base_delay(Duration::from_millis(1));
        RecordStoreContactRepository::new(RecordStoreClient::new(config).unwrap())
    }

    fn new_submission() -> NewContactSubmission {
        ContactForm {
            practice_name: "Harmony Wellness".to_string(),
            practice_type: "functional-medicine".to_string(),
            contact_name: "Dana Reyes".to_string(),
            email: "dana@harmony.example".to_string(),
            phone: "555-0100".to_string(),
            services_interested: vec!["all-services".to_string()],
            message: Some("Call after 3pm".to_string()),
        }
        .into_submission(Timestamp::parse_rfc3339("2026-03-01T10:00:00Z").unwrap())
        .unwrap()
    }

    fn stored_row(id: u64) -> serde_json::Value {
        json!({
            "Id": id,
            "Name": "Harmony Wellness",
            "Tags": "ai-assistants, ad-management",
            "submitted_at_c": "2026-03-01T10:00:00.000Z",
            "status_c": "contacted",
            "practice_type_c": "functional-medicine",
            "contact_name_c": "Dana Reyes",
            "email_c": "dana@harmony.example",
            "phone_c": "555-0100"
        })
    }

    #[test]
    fn new_record_maps_columns() {
        let record = ContactRecord::from_new(&new_submission());
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("Id").is_none());
        assert_eq!(value["Name"], "Harmony Wellness");
        assert_eq!(value["Tags"], "ai-assistants,ad-management,conversational-seo");
        assert_eq!(value["status_c"], "pending");
        assert_eq!(value["practice_type_c"], "functional-medicine");
        assert_eq!(value["submitted_at_c"], "2026-03-01T10:00:00.000Z");
    }

    #[test]
    fn legacy_row_reads_with_defaults() {
        let record: ContactRecord = serde_json::from_value(json!({
            "Id": 3,
            "Name": "Old Lead",
            "Tags": "ai-assistants, web-design",
            "submitted_at_c": "2025-11-02T08:30:00Z"
        }))
        .unwrap();

        let submission = record.into_submission().unwrap();

        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.practice_type, PracticeType::Other);
        assert_eq!(submission.services.len(), 1);
        assert!(submission.services.contains(ServiceInterest::AiAssistants));
    }

    #[test]
    fn row_without_timestamp_is_unreadable() {
        let record = ContactRecord {
            id: Some(1),
            ..ContactRecord::default()
        };
        assert!(matches!(
            record.into_submission(),
            Err(RecordStoreError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn create_returns_submission_with_store_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(RECORDS_PATH);
                then.status(200).json_body(json!({
                    "success": true,
                    "results": [{"success": true, "data": {"Id": 41}}]
                }));
            })
            .await;

        let created = repository(&server).create(new_submission()).await.unwrap();

        assert_eq!(created.id.value(), 41);
        assert_eq!(created.status, SubmissionStatus::Pending);
        assert!(created.services.is_all());
    }

    #[tokio::test]
    async fn create_failure_carries_field_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(RECORDS_PATH);
                then.status(200).json_body(json!({
                    "success": true,
                    "results": [{
                        "success": false,
                        "message": "Invalid record",
                        "errors": [{"fieldLabel": "email_c", "message": "already exists"}]
                    }]
                }));
            })
            .await;

        let err = repository(&server)
            .create(new_submission())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RecordStoreError);
        assert_eq!(
            err.details.get("email_c").map(String::as_str),
            Some("already exists")
        );
    }

    #[tokio::test]
    async fn unavailable_store_maps_to_unavailable_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(format!("{}/fetch", RECORDS_PATH));
                then.status(502);
            })
            .await;

        let err = repository(&server).list().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordStoreUnavailable);
    }

    #[tokio::test]
    async fn list_requests_newest_first_and_maps_rows() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("{}/fetch", RECORDS_PATH))
                    .json_body_partial(
                        r#"{"orderBy": [{"fieldName": "submitted_at_c", "sorttype": "DESC"}]}"#,
                    );
                then.status(200)
                    .json_body(json!({"success": true, "data": [stored_row(2), stored_row(1)]}));
            })
            .await;

        let listed = repository(&server).list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id.value(), 2);
        assert_eq!(listed[0].status, SubmissionStatus::Contacted);
    }

    #[tokio::test]
    async fn update_status_of_missing_record_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(format!("{}/8/query", RECORDS_PATH));
                then.status(200).json_body(json!({"success": true, "data": null}));
            })
            .await;

        let err = repository(&server)
            .update_status(SubmissionId::new(8), SubmissionStatus::Closed)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SubmissionNotFound);
        assert_eq!(err.details.get("id").map(String::as_str), Some("8"));
    }

    #[tokio::test]
    async fn update_status_sends_partial_record() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(format!("{}/5/query", RECORDS_PATH));
                then.status(200)
                    .json_body(json!({"success": true, "data": stored_row(5)}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path(RECORDS_PATH)
                    .json_body(json!({"records": [{"Id": 5, "status_c": "scheduled"}]}));
                then.status(200)
                    .json_body(json!({"success": true, "results": [{"success": true}]}));
            })
            .await;

        let updated = repository(&server)
            .update_status(SubmissionId::new(5), SubmissionStatus::Scheduled)
            .await
            .unwrap();

        update.assert_async().await;
        assert_eq!(updated.status, SubmissionStatus::Scheduled);
        assert_eq!(updated.practice_name, "Harmony Wellness");
    }
}
