//! Error body shared by every endpoint.

use serde::Serialize;

use crate::domain::contact::FieldErrors;

/// JSON error body: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Form rejection carrying the field → message map in `details`.
    pub fn validation_failed(errors: &FieldErrors) -> Self {
        let details = serde_json::to_value(errors).unwrap_or(serde_json::Value::Null);
        Self::new("VALIDATION_FAILED", "Please fix the errors below").with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
        assert!(error.details.is_none());
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Service", "web-design");
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Service not found: web-design");
    }

    #[test]
    fn validation_failed_puts_fields_in_details() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is invalid");

        let error = ErrorResponse::validation_failed(&errors);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["email"], "Email is invalid");
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert!(json.get("details").is_none());
    }
}
