//! Contact form validation rules.
//!
//! Every rule runs independently; the result lists all failing fields at once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::form::ContactForm;

/// Loose email shape: something, `@`, something, `.`, something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const PRACTICE_NAME_REQUIRED: &str = "Practice name is required";
pub const PRACTICE_TYPE_REQUIRED: &str = "Practice type is required";
pub const PRACTICE_TYPE_INVALID: &str = "Practice type is invalid";
pub const CONTACT_NAME_REQUIRED: &str = "Contact name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const SERVICES_REQUIRED: &str = "Please select at least one service";
pub const SERVICES_INVALID: &str = "Service selection is invalid";

/// Field name to user-facing message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; the first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Checks required fields and the email shape.
///
/// Catalog membership of `practiceType` and `servicesInterested` is not
/// checked here; see [`ContactForm::into_submission`].
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.practice_name.trim().is_empty() {
        errors.add("practiceName", PRACTICE_NAME_REQUIRED);
    }
    if form.practice_type.is_empty() {
        errors.add("practiceType", PRACTICE_TYPE_REQUIRED);
    }
    if form.contact_name.trim().is_empty() {
        errors.add("contactName", CONTACT_NAME_REQUIRED);
    }
    if form.email.trim().is_empty() {
        errors.add("email", EMAIL_REQUIRED);
    } else if !is_email_shaped(&form.email) {
        errors.add("email", EMAIL_INVALID);
    }
    if form.phone.trim().is_empty() {
        errors.add("phone", PHONE_REQUIRED);
    }
    if form.services_interested.is_empty() {
        errors.add("servicesInterested", SERVICES_REQUIRED);
    }

    errors
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
