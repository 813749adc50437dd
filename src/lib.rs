//! # QR Badge
//!
//! A QR code generator service built with Axum. Every code is rendered with
//! a quiet-zone margin and a branded badge in the middle: a black rounded
//! square with a white "P", kept scannable by high error correction.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Render entities, layout math, the raster
//!   surface, the compositor, and the encoder trait
//! - **Application Layer** ([`application`]) - Render orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - `qrcode`-backed encoder
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Interactive generator page
//!
//! ## Features
//!
//! - Bare host names are encoded as `https://` links
//! - Configurable size, colors, and error correction level
//! - Deterministic PNG output, cacheable as immutable
//! - `qrgen` CLI for rendering to files
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -o qr.png "http://localhost:3000/api/qr?value=example.com&size=512"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RenderError, RenderService};
    pub use crate::domain::composite::LayoutConfig;
    pub use crate::domain::encoder::{EncodeError, EncodeOptions, QrEncoder};
    pub use crate::domain::entities::{ErrorCorrectionLevel, HexColor, RenderRequest, SizeLimits};
    pub use crate::error::AppError;
    pub use crate::infrastructure::qr::QrcodeEncoder;
    pub use crate::state::AppState;
}
