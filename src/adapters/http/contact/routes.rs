//! HTTP routes for contact endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    delete_submission, get_submission, list_submissions, submit_contact,
    update_submission_status, ContactHandlers,
};

/// Creates the contact router. Paths are relative to `/api/contact`.
pub fn contact_routes(handlers: ContactHandlers) -> Router {
    Router::new()
        .route("/", post(submit_contact))
        .route("/submissions", get(list_submissions))
        .route(
            "/submissions/:id",
            get(get_submission)
                .patch(update_submission_status)
                .delete(delete_submission),
        )
        .with_state(handlers)
}
