//! Business logic services for the application layer.

pub mod render_service;

pub use render_service::{RenderError, RenderService};
