//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Services, industries and case studies
//! - `contact` - Lead capture form, validation and submissions
//! - `roi` - ROI estimator behind the calculator sliders
//! - `chat` - Scripted assistant for the chat widget

pub mod catalog;
pub mod chat;
pub mod contact;
pub mod foundation;
pub mod roi;
