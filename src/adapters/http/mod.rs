//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them into the application router.

pub mod catalog;
pub mod chat;
pub mod contact;
pub mod error;
pub mod health;
pub mod roi;
pub mod router;

pub use error::ErrorResponse;
pub use router::{api_router, ApiHandlers};
