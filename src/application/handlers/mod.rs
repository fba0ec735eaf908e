//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod chat;
pub mod contact;
pub mod roi;

pub use catalog::{
    GetIndustryHandler, GetIndustryQuery, GetServiceHandler, GetServiceQuery,
    ListCaseStudiesHandler, ListIndustriesHandler, ListServicesHandler,
};
pub use chat::{SendChatMessageCommand, SendChatMessageHandler};
pub use contact::{
    DeleteSubmissionCommand, DeleteSubmissionHandler, GetSubmissionHandler, GetSubmissionQuery,
    ListSubmissionsHandler, SubmitContactCommand, SubmitContactHandler,
    UpdateSubmissionStatusCommand, UpdateSubmissionStatusHandler,
};
pub use roi::{EstimateRoiHandler, EstimateRoiQuery, EstimateRoiResult};
