//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - bundled catalog and an in-process contact store
//! - `records` - contact submissions in the hosted record store

pub mod http;
pub mod memory;
pub mod records;
