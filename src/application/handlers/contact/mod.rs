//! Contact command and query handlers.

mod delete_submission;
mod get_submission;
mod list_submissions;
mod submit_contact;
mod update_submission_status;

pub use delete_submission::{DeleteSubmissionCommand, DeleteSubmissionHandler};
pub use get_submission::{GetSubmissionHandler, GetSubmissionQuery};
pub use list_submissions::ListSubmissionsHandler;
pub use submit_contact::{SubmitContactCommand, SubmitContactHandler};
pub use update_submission_status::{UpdateSubmissionStatusCommand, UpdateSubmissionStatusHandler};
