//! Raw contact form as typed by the visitor.

use serde::{Deserialize, Serialize};

use super::practice_type::PracticeType;
use super::service_interest::ServiceSelection;
use super::submission::NewContactSubmission;
use super::validation::{validate, FieldErrors, PRACTICE_TYPE_INVALID, SERVICES_INVALID};
use crate::domain::foundation::Timestamp;

/// Untyped form payload. Every field may be empty until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub practice_name: String,
    pub practice_type: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services_interested: Vec<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Runs the form rules. See [`validate`].
    pub fn validate(&self) -> FieldErrors {
        validate(self)
    }

    /// Validates, then resolves the practice type and service ids.
    ///
    /// Text fields are trimmed and a blank message becomes `None`.
    pub fn into_submission(self, submitted_at: Timestamp) -> Result<NewContactSubmission, FieldErrors> {
        let mut errors = self.validate();

        let practice_type = match self.practice_type.parse::<PracticeType>() {
            Ok(pt) => Some(pt),
            Err(_) => {
                if !self.practice_type.is_empty() {
                    errors.add("practiceType", PRACTICE_TYPE_INVALID);
                }
                None
            }
        };

        let services = match ServiceSelection::from_ids(&self.services_interested) {
            Ok(selection) => Some(selection),
            Err(_) => {
                errors.add("servicesInterested", SERVICES_INVALID);
                None
            }
        };

        match (practice_type, services) {
            (Some(practice_type), Some(services)) if errors.is_empty() => {
                Ok(NewContactSubmission {
                    practice_name: self.practice_name.trim().to_string(),
                    practice_type,
                    contact_name: self.contact_name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    phone: self.phone.trim().to_string(),
                    services,
                    message: self
                        .message
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty()),
                    submitted_at,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::service_interest::{ServiceInterest, ALL_SERVICES_ID};
    use crate::domain::contact::validation::EMAIL_INVALID;

    fn complete_form() -> ContactForm {
        ContactForm {
            practice_name: "  Harmony Wellness ".to_string(),
            practice_type: "yoga-studio".to_string(),
            contact_name: "Dana Reyes".to_string(),
            email: "dana@harmony.example".to_string(),
            phone: "555-0100".to_string(),
            services_interested: vec!["ad-management".to_string()],
            message: Some("  ".to_string()),
        }
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let form: ContactForm =
            serde_json::from_str(r#"{"practiceName": "Harmony", "servicesInterested": ["ai-assistants"]}"#)
                .unwrap();
        assert_eq!(form.practice_name, "Harmony");
        assert_eq!(form.services_interested, vec!["ai-assistants"]);
        assert!(form.email.is_empty());
        assert!(form.message.is_none());
    }

    #[test]
    fn into_submission_trims_and_types_fields() {
        let submission = complete_form().into_submission(Timestamp::now()).unwrap();

        assert_eq!(submission.practice_name, "Harmony Wellness");
        assert_eq!(submission.practice_type, PracticeType::YogaStudio);
        assert!(submission.services.contains(ServiceInterest::AdManagement));
        assert!(submission.message.is_none());
    }

    #[test]
    fn into_submission_expands_all_services() {
        let form = ContactForm {
            services_interested: vec![ALL_SERVICES_ID.to_string()],
            ..complete_form()
        };
        let submission = form.into_submission(Timestamp::now()).unwrap();
        assert!(submission.services.is_all());
    }

    #[test]
    fn unknown_practice_type_is_reported() {
        let form = ContactForm {
            practice_type: "dentist".to_string(),
            ..complete_form()
        };
        let errors = form.into_submission(Timestamp::now()).unwrap_err();
        assert_eq!(errors.get("practiceType"), Some(PRACTICE_TYPE_INVALID));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unknown_service_is_reported() {
        let form = ContactForm {
            services_interested: vec!["web-design".to_string()],
            ..complete_form()
        };
        let errors = form.into_submission(Timestamp::now()).unwrap_err();
        assert_eq!(errors.get("servicesInterested"), Some(SERVICES_INVALID));
    }

    #[test]
    fn base_rule_errors_are_kept_alongside_catalog_errors() {
        let form = ContactForm {
            email: "nope".to_string(),
            practice_type: "dentist".to_string(),
            ..complete_form()
        };
        let errors = form.into_submission(Timestamp::now()).unwrap_err();
        assert_eq!(errors.get("email"), Some(EMAIL_INVALID));
        assert_eq!(errors.get("practiceType"), Some(PRACTICE_TYPE_INVALID));
    }

    #[test]
    fn empty_form_keeps_required_messages() {
        let errors = ContactForm::default()
            .into_submission(Timestamp::now())
            .unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("practiceType"), Some("Practice type is required"));
        assert_eq!(
            errors.get("servicesInterested"),
            Some("Please select at least one service")
        );
    }
}
