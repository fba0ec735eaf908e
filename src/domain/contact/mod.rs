//! Contact module - lead capture form, validation and stored submissions.

mod errors;
mod form;
mod practice_type;
mod service_interest;
mod submission;
mod validation;

pub use errors::ContactError;
pub use form::ContactForm;
pub use practice_type::PracticeType;
pub use service_interest::{ServiceInterest, ServiceSelection, ALL_SERVICES_ID};
pub use submission::{ContactSubmission, NewContactSubmission, SubmissionStatus};
pub use validation::{
    is_email_shaped, validate, FieldErrors, CONTACT_NAME_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED,
    PHONE_REQUIRED, PRACTICE_NAME_REQUIRED, PRACTICE_TYPE_INVALID, PRACTICE_TYPE_REQUIRED,
    SERVICES_INVALID, SERVICES_REQUIRED,
};
