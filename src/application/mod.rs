//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (submit, update, delete) are kept apart from query
//! handlers (catalog listings, estimates).

pub mod handlers;

pub use handlers::*;
