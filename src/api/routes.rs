//! API route configuration.
//!
//! All API endpoints are public and stateless.

use crate::api::handlers::qr_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /qr` - Render a QR code with the logo badge as PNG
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/qr", get(qr_handler))
}
