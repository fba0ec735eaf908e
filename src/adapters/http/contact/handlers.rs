//! HTTP handlers for contact endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::contact::{
    DeleteSubmissionCommand, DeleteSubmissionHandler, GetSubmissionHandler, GetSubmissionQuery,
    ListSubmissionsHandler, SubmitContactCommand, SubmitContactHandler,
    UpdateSubmissionStatusCommand, UpdateSubmissionStatusHandler,
};
use crate::domain::contact::{ContactError, ContactForm};
use crate::domain::foundation::SubmissionId;

use super::dto::{
    ContactCommandResponse, ContactSubmissionResponse, SubmitContactResponse,
    UpdateStatusRequest, SUBMITTED_MESSAGE,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ContactHandlers {
    submit_handler: Arc<SubmitContactHandler>,
    list_handler: Arc<ListSubmissionsHandler>,
    get_handler: Arc<GetSubmissionHandler>,
    update_status_handler: Arc<UpdateSubmissionStatusHandler>,
    delete_handler: Arc<DeleteSubmissionHandler>,
}

impl ContactHandlers {
    pub fn new(
        submit_handler: Arc<SubmitContactHandler>,
        list_handler: Arc<ListSubmissionsHandler>,
        get_handler: Arc<GetSubmissionHandler>,
        update_status_handler: Arc<UpdateSubmissionStatusHandler>,
        delete_handler: Arc<DeleteSubmissionHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            get_handler,
            update_status_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/contact - Submit the contact form
pub async fn submit_contact(
    State(handlers): State<ContactHandlers>,
    Json(form): Json<ContactForm>,
) -> Response {
    match handlers
        .submit_handler
        .handle(SubmitContactCommand { form })
        .await
    {
        Ok(submission) => {
            let response = SubmitContactResponse {
                message: SUBMITTED_MESSAGE.to_string(),
                submission: submission.into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// GET /api/contact/submissions - List submissions, newest first
pub async fn list_submissions(State(handlers): State<ContactHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(submissions) => {
            let response: Vec<ContactSubmissionResponse> =
                submissions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// GET /api/contact/submissions/:id - One submission
pub async fn get_submission(
    State(handlers): State<ContactHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<SubmissionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id(),
    };

    match handlers.get_handler.handle(GetSubmissionQuery { id }).await {
        Ok(submission) => {
            let response = ContactSubmissionResponse::from(submission);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// PATCH /api/contact/submissions/:id - Change follow-up status
pub async fn update_submission_status(
    State(handlers): State<ContactHandlers>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Response {
    let id = match id.parse::<SubmissionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id(),
    };

    let cmd = UpdateSubmissionStatusCommand {
        id,
        status: req.status,
    };

    match handlers.update_status_handler.handle(cmd).await {
        Ok(submission) => {
            let response = ContactSubmissionResponse::from(submission);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// DELETE /api/contact/submissions/:id - Remove a submission
pub async fn delete_submission(
    State(handlers): State<ContactHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<SubmissionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id(),
    };

    match handlers
        .delete_handler
        .handle(DeleteSubmissionCommand { id })
        .await
    {
        Ok(()) => {
            let response = ContactCommandResponse {
                id: id.value(),
                message: "Contact submission deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn invalid_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid submission ID")),
    )
        .into_response()
}

fn handle_contact_error(error: ContactError) -> Response {
    match error {
        ContactError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation_failed(&errors)),
        )
            .into_response(),
        ContactError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Contact submission", &id.to_string())),
        )
            .into_response(),
        ContactError::InvalidStatus(value) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Unknown status: {}", value))),
        )
            .into_response(),
        ContactError::Infrastructure(msg) => {
            tracing::error!("Contact storage failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(
                    "There was an error submitting your form. Please try again.",
                )),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldErrors;

    #[test]
    fn contact_invalid_maps_to_422() {
        let mut errors = FieldErrors::new();
        errors.add("phone", "Phone is required");
        let response = handle_contact_error(ContactError::Invalid(errors));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn contact_not_found_maps_to_404() {
        let response = handle_contact_error(ContactError::NotFound(SubmissionId::new(1)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn contact_invalid_status_maps_to_400() {
        let response = handle_contact_error(ContactError::InvalidStatus("won".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn contact_infrastructure_maps_to_500() {
        let response = handle_contact_error(ContactError::infrastructure("down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
