//! Hosted record-storage adapter.
//!
//! - `RecordStoreClient` - authenticated JSON client with retries
//! - `RecordStoreContactRepository` - contact submissions on `contact_submission_c`

mod client;
mod contact_submission_repository;
mod wire;

pub use client::{RecordStoreClient, RecordStoreClientConfig, RecordStoreError};
pub use contact_submission_repository::{
    ContactRecord, RecordStoreContactRepository, CONTACT_SUBMISSION_TABLE,
};
pub use wire::{FieldError, QueryParams, SortType};
