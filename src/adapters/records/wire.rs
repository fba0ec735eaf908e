//! Wire format of the hosted record API.
//!
//! Every mutation answers with an envelope carrying `success`, an optional
//! `message`, and one result per record sent.

use serde::{Deserialize, Serialize};

/// Column selector: `{"field": {"Name": "status_c"}}`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSelector {
    pub field: FieldName,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

impl FieldSelector {
    pub fn new(name: &str) -> Self {
        Self {
            field: FieldName {
                name: name.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortType {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    pub sorttype: SortType,
}

/// Parameters for fetch and get-by-id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub fields: Vec<FieldSelector>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
}

impl QueryParams {
    pub fn with_fields(names: &[&str]) -> Self {
        Self {
            fields: names.iter().map(|n| FieldSelector::new(n)).collect(),
            order_by: Vec::new(),
        }
    }

    pub fn order_by(mut self, field: &str, sort: SortType) -> Self {
        self.order_by.push(OrderBy {
            field_name: field.to_string(),
            sorttype: sort,
        });
        self
    }
}

/// Body for create and update.
#[derive(Debug, Clone, Serialize)]
pub struct RecordsBody<T> {
    pub records: Vec<T>,
}

/// Body for delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteBody {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<u64>,
}

/// Response to fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Response to get-by-id. `data` is absent or null when no record matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GetResponse<T> {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

fn default_true() -> bool {
    true
}

/// Response to create, update and delete.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<RecordResult<T>>,
}

/// Outcome for one record of a mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResult<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// A column-level rejection reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default)]
    pub field_label: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_label, self.message)
    }
}
