//! StrictlyHeal - marketing site backend for AI services aimed at wellness
//! practices.
//!
//! Serves the service catalog, captures contact leads, runs the ROI
//! calculator and answers the scripted chat widget.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
