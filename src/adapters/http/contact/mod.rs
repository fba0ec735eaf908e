//! HTTP adapter for contact form and lead endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ContactCommandResponse, ContactSubmissionResponse, SubmitContactResponse,
    UpdateStatusRequest, SUBMITTED_MESSAGE,
};
pub use handlers::ContactHandlers;
pub use routes::contact_routes;
