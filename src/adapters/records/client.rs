//! Record Store Client - JSON client for the hosted record-storage API.
//!
//! Authenticates every request with the project id and public key headers.
//! Transient failures (timeouts, connection errors, 5xx) are retried with
//! exponential backoff. Creates are not idempotent, so they are only retried
//! when the connection was never established.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RecordStoreClientConfig::new(base_url, project_id, public_key)
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_retries(3);
//!
//! let client = RecordStoreClient::new(config)?;
//! ```

use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::wire::{
    DeleteBody, FetchResponse, FieldError, GetResponse, MutationResponse, QueryParams, RecordsBody,
};

const PROJECT_ID_HEADER: &str = "X-Project-Id";
const PUBLIC_KEY_HEADER: &str = "X-Public-Key";

/// Upper bound on a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Errors from the record store.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The request never reached the store.
    #[error("Could not connect to record store: {0}")]
    Connect(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Record store credentials rejected")]
    AuthenticationFailed,

    #[error("Record store rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The envelope reported `success: false`.
    #[error("Record store operation failed: {0}")]
    OperationFailed(String),

    /// Every record in a mutation failed.
    #[error("Record rejected: {message}")]
    RecordFailed {
        message: String,
        field_errors: Vec<FieldError>,
    },

    #[error("Failed to parse record store response: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl RecordStoreError {
    /// Whether another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RecordStoreError::Timeout { .. }
                | RecordStoreError::Connect(_)
                | RecordStoreError::Network(_)
                | RecordStoreError::Unavailable(_)
        )
    }

    /// Whether the store certainly did not see the request, so even a
    /// non-idempotent write can be resent.
    pub fn never_sent(&self) -> bool {
        matches!(self, RecordStoreError::Connect(_))
    }
}

/// Configuration for the record store client.
#[derive(Debug, Clone)]
pub struct RecordStoreClientConfig {
    pub base_url: String,
    pub project_id: String,
    public_key: Secret<String>,
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// First backoff delay; doubles on each retry.
    pub retry_base_delay: Duration,
}

impl RecordStoreClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            public_key: Secret::new(public_key.into()),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Sleep before retry number `retry` (0-based): base, 2x base, 4x base,
    /// capped at [`MAX_BACKOFF`].
    fn backoff_delay(&self, retry: u32) -> Duration {
        self.retry_base_delay
            .saturating_mul(2u32.saturating_pow(retry))
            .min(MAX_BACKOFF)
    }

    fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }
}

/// Client for one project's tables.
pub struct RecordStoreClient {
    config: RecordStoreClientConfig,
    client: Client,
}

impl RecordStoreClient {
    pub fn new(config: RecordStoreClientConfig) -> Result<Self, RecordStoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RecordStoreError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn records_url(&self, table: &str) -> String {
        format!("{}/v1/tables/{}/records", self.config.base_url, table)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(PROJECT_ID_HEADER, &self.config.project_id)
            .header(PUBLIC_KEY_HEADER, self.config.public_key())
            .header("Content-Type", "application/json")
    }

    /// Fetches records matching `params`.
    pub async fn fetch_records<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &QueryParams,
    ) -> Result<Vec<T>, RecordStoreError> {
        let url = format!("{}/fetch", self.records_url(table));
        let response: FetchResponse<T> = self
            .with_retries(|| self.send_json(Method::POST, url.clone(), params))
            .await?;

        if !response.success {
            return Err(operation_failed(table, "fetch", response.message));
        }
        Ok(response.data)
    }

    /// Fetches one record. Returns `None` if the id is unknown.
    pub async fn get_record_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: u64,
        params: &QueryParams,
    ) -> Result<Option<T>, RecordStoreError> {
        let url = format!("{}/{}/query", self.records_url(table), id);
        let result: Result<GetResponse<T>, RecordStoreError> = self
            .with_retries(|| self.send_json(Method::POST, url.clone(), params))
            .await;

        match result {
            Ok(response) if response.success => Ok(response.data),
            Ok(_) => Ok(None),
            Err(RecordStoreError::Rejected { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Creates records; returns the first stored record.
    ///
    /// A timeout or 5xx may mean the store already saved the record, so only
    /// connection failures are retried.
    pub async fn create_record<B, T>(&self, table: &str, record: &B) -> Result<T, RecordStoreError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = RecordsBody {
            records: vec![record],
        };
        let url = self.records_url(table);
        let response: MutationResponse<T> = self
            .retry_while(RecordStoreError::never_sent, || {
                self.send_json(Method::POST, url.clone(), &body)
            })
            .await?;

        first_success(table, "create", response)?.ok_or_else(|| {
            RecordStoreError::Parse("create succeeded without returning the record".to_string())
        })
    }

    /// Updates records; returns the first updated record if the store echoes it.
    pub async fn update_record<B, T>(
        &self,
        table: &str,
        record: &B,
    ) -> Result<Option<T>, RecordStoreError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = RecordsBody {
            records: vec![record],
        };
        let url = self.records_url(table);
        let response: MutationResponse<T> = self
            .with_retries(|| self.send_json(Method::PUT, url.clone(), &body))
            .await?;

        first_success(table, "update", response)
    }

    /// Deletes one record.
    pub async fn delete_record(&self, table: &str, id: u64) -> Result<(), RecordStoreError> {
        let body = DeleteBody {
            record_ids: vec![id],
        };
        let url = self.records_url(table);
        let response: MutationResponse<serde_json::Value> = self
            .with_retries(|| self.send_json(Method::DELETE, url.clone(), &body))
            .await?;

        first_success(table, "delete", response).map(|_| ())
    }

    /// Retries idempotent requests on any transient failure.
    async fn with_retries<T, F, Fut>(&self, attempt: F) -> Result<T, RecordStoreError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, RecordStoreError>>,
    {
        self.retry_while(RecordStoreError::is_retryable, attempt).await
    }

    /// Runs `attempt` until it succeeds, fails with an error `should_retry`
    /// rejects, or retries run out.
    async fn retry_while<T, F, Fut>(
        &self,
        should_retry: fn(&RecordStoreError) -> bool,
        attempt: F,
    ) -> Result<T, RecordStoreError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, RecordStoreError>>,
    {
        let mut retry_count = 0;

        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !should_retry(&err) || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    let delay = self.config.backoff_delay(retry_count);
                    warn!(
                        retry = retry_count + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Record store request failed, retrying: {}",
                        err
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
            }
        }
    }

    async fn send_json<B, T>(&self, method: Method, url: String, body: &B) -> Result<T, RecordStoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, %url, "Record store request");

        let response = self
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecordStoreError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    RecordStoreError::Connect(e.to_string())
                } else {
                    RecordStoreError::Network(e.to_string())
                }
            })?;

        let response = handle_response_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RecordStoreError::Parse(e.to_string()))
    }
}

async fn handle_response_status(response: Response) -> Result<Response, RecordStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status.as_u16() {
        401 | 403 => Err(RecordStoreError::AuthenticationFailed),
        500..=599 => Err(RecordStoreError::Unavailable(format!(
            "Server error {}: {}",
            status, body
        ))),
        code => Err(RecordStoreError::Rejected { status: code, body }),
    }
}

fn operation_failed(table: &str, operation: &str, message: Option<String>) -> RecordStoreError {
    let message = message.unwrap_or_else(|| "no message".to_string());
    warn!(table, operation, "Record store operation failed: {}", message);
    RecordStoreError::OperationFailed(message)
}

/// Returns the data of the first successful record, logging every failed one.
fn first_success<T>(
    table: &str,
    operation: &str,
    response: MutationResponse<T>,
) -> Result<Option<T>, RecordStoreError> {
    if !response.success {
        return Err(operation_failed(table, operation, response.message));
    }

    let (succeeded, failed): (Vec<_>, Vec<_>) =
        response.results.into_iter().partition(|r| r.success);

    for record in &failed {
        let errors: Vec<String> = record.errors.iter().map(ToString::to_string).collect();
        warn!(
            table,
            operation,
            message = record.message.as_deref().unwrap_or(""),
            field_errors = ?errors,
            "Record store rejected record"
        );
    }

    if let Some(record) = succeeded.into_iter().next() {
        return Ok(record.data);
    }

    match failed.into_iter().next() {
        Some(record) => Err(RecordStoreError::RecordFailed {
            message: record
                .message
                .unwrap_or_else(|| format!("{} failed", operation)),
            field_errors: record.errors,
        }),
        // An envelope with no per-record results counts as success.
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::records::wire::SortType;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer, max_retries: u32) -> RecordStoreClient {
        let config = RecordStoreClientConfig::new(server.base_url(), "proj-1", "pk-secret")
            .with_max_retries(max_retries)
            .with_retry_base_delay(Duration::from_millis(1));
        RecordStoreClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn fetch_sends_auth_headers_and_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/tables/contact_submission_c/records/fetch")
                    .header(PROJECT_ID_HEADER, "proj-1")
                    .header(PUBLIC_KEY_HEADER, "pk-secret")
                    .json_body(json!({
                        "fields": [{"field": {"Name": "Name"}}],
                        "orderBy": [{"fieldName": "submitted_at_c", "sorttype": "DESC"}]
                    }));
                then.status(200)
                    .json_body(json!({"success": true, "data": [{"Id": 1}, {"Id": 2}]}));
            })
            .await;

        let client = client_for(&server, 0);
        let params = QueryParams::with_fields(&["Name"]).order_by("submitted_at_c", SortType::Desc);
        let records: Vec<serde_json::Value> = client
            .fetch_records("contact_submission_c", &params)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn fetch_reports_unsuccessful_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records/fetch");
                then.status(200)
                    .json_body(json!({"success": false, "message": "Table not found"}));
            })
            .await;

        let client = client_for(&server, 0);
        let result: Result<Vec<serde_json::Value>, _> =
            client.fetch_records("t", &QueryParams::default()).await;

        match result {
            Err(RecordStoreError::OperationFailed(msg)) => assert_eq!(msg, "Table not found"),
            other => panic!("Expected OperationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_errors_are_retried_until_exhausted() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records/fetch");
                then.status(503).body("maintenance");
            })
            .await;

        let client = client_for(&server, 2);
        let result: Result<Vec<serde_json::Value>, _> =
            client.fetch_records("t", &QueryParams::default()).await;

        assert!(matches!(result, Err(RecordStoreError::Unavailable(_))));
        assert_eq!(mock.hits_async().await, 3);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records/fetch");
                then.status(401);
            })
            .await;

        let client = client_for(&server, 3);
        let result: Result<Vec<serde_json::Value>, _> =
            client.fetch_records("t", &QueryParams::default()).await;

        assert!(matches!(result, Err(RecordStoreError::AuthenticationFailed)));
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_missing_record() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records/9/query");
                then.status(404);
            })
            .await;

        let client = client_for(&server, 0);
        let record: Option<serde_json::Value> = client
            .get_record_by_id("t", 9, &QueryParams::default())
            .await
            .unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn create_returns_first_successful_record() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/tables/t/records")
                    .json_body(json!({"records": [{"Name": "Harmony"}]}));
                then.status(200).json_body(json!({
                    "success": true,
                    "results": [{"success": true, "data": {"Id": 12, "Name": "Harmony"}}]
                }));
            })
            .await;

        let client = client_for(&server, 0);
        let created: serde_json::Value = client
            .create_record("t", &json!({"Name": "Harmony"}))
            .await
            .unwrap();

        assert_eq!(created["Id"], 12);
    }

    #[tokio::test]
    async fn create_surfaces_record_field_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records");
                then.status(200).json_body(json!({
                    "success": true,
                    "results": [{
                        "success": false,
                        "message": "Validation failed",
                        "errors": [{"fieldLabel": "email_c", "message": "is required"}]
                    }]
                }));
            })
            .await;

        let client = client_for(&server, 0);
        let result: Result<serde_json::Value, _> =
            client.create_record("t", &json!({"Name": "Harmony"})).await;

        match result {
            Err(RecordStoreError::RecordFailed {
                message,
                field_errors,
            }) => {
                assert_eq!(message, "Validation failed");
                assert_eq!(field_errors[0].field_label, "email_c");
            }
            other => panic!("Expected RecordFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_sends_record_ids() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/v1/tables/t/records")
                    .json_body(json!({"RecordIds": [4]}));
                then.status(200)
                    .json_body(json!({"success": true, "results": [{"success": true}]}));
            })
            .await;

        let client = client_for(&server, 0);
        client.delete_record("t", 4).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_is_sent_once_when_the_store_times_out() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records");
                then.status(200)
                    .delay(Duration::from_millis(1500))
                    .json_body(json!({
                        "success": true,
                        "results": [{"success": true, "data": {"Id": 1}}]
                    }));
            })
            .await;

        let config = RecordStoreClientConfig::new(server.base_url(), "proj-1", "pk-secret")
            .with_timeout(Duration::from_secs(1))
            .with_max_retries(2)
            .with_retry_base_delay(Duration::from_millis(1));
        let client = RecordStoreClient::new(config).unwrap();

        let result: Result<serde_json::Value, _> =
            client.create_record("t", &json!({"Name": "Harmony"})).await;

        assert!(matches!(result, Err(RecordStoreError::Timeout { .. })));
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn create_is_not_resent_after_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/tables/t/records");
                then.status(502).body("bad gateway");
            })
            .await;

        let client = client_for(&server, 3);
        let result: Result<serde_json::Value, _> =
            client.create_record("t", &json!({"Name": "Harmony"})).await;

        assert!(matches!(result, Err(RecordStoreError::Unavailable(_))));
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn refused_connection_is_reported_as_connect_error() {
        // Nothing listens on port 1.
        let config = RecordStoreClientConfig::new("http://127.0.0.1:1", "proj-1", "pk-secret")
            .with_max_retries(1)
            .with_retry_base_delay(Duration::from_millis(1));
        let client = RecordStoreClient::new(config).unwrap();

        let result: Result<serde_json::Value, _> =
            client.create_record("t", &json!({"Name": "Harmony"})).await;

        match result {
            Err(err) => assert!(err.never_sent(), "expected Connect, got {:?}", err),
            Ok(_) => panic!("create against a closed port succeeded"),
        }
    }

    #[test]
    fn backoff_doubles_and_is_capped() {
        let config = RecordStoreClientConfig::new("http://localhost", "p", "k")
            .with_retry_base_delay(Duration::from_millis(500));

        assert_eq!(config.backoff_delay(0), Duration::from_millis(500));
        assert_eq!(config.backoff_delay(1), Duration::from_secs(1));
        assert_eq!(config.backoff_delay(2), Duration::from_secs(2));
        assert_eq!(config.backoff_delay(40), MAX_BACKOFF);
        assert_eq!(config.backoff_delay(u32::MAX), MAX_BACKOFF);
    }

    #[test]
    fn only_connect_failures_count_as_never_sent() {
        assert!(RecordStoreError::Connect("refused".to_string()).never_sent());
        assert!(!RecordStoreError::Timeout { timeout_secs: 1 }.never_sent());
        assert!(!RecordStoreError::Network("reset".to_string()).never_sent());
        assert!(!RecordStoreError::Unavailable("503".to_string()).never_sent());
    }

    #[test]
    fn only_transient_errors_are_retryable() {
        assert!(RecordStoreError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(RecordStoreError::Connect("refused".to_string()).is_retryable());
        assert!(RecordStoreError::Unavailable("x".to_string()).is_retryable());
        assert!(!RecordStoreError::AuthenticationFailed.is_retryable());
        assert!(!RecordStoreError::OperationFailed("x".to_string()).is_retryable());
    }
}
