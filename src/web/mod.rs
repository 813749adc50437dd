//! Web layer for the browser-based generator.
//!
//! Provides the interactive page. Uses Askama templates for server-side
//! rendering; the preview, download and copy actions run in the browser
//! against `/api/qr`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
