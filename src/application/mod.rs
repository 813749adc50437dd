//! Application layer services implementing the render workflow.
//!
//! This layer orchestrates domain operations: it normalizes input, derives
//! geometry, calls the QR encoder through its trait and hands the bitmap to
//! the compositor. HTTP handlers and the CLI both go through it.
//!
//! # Available Services
//!
//! - [`services::render_service::RenderService`] - QR render and PNG export

pub mod services;
