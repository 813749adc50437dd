//! Handler for the QR image endpoint.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::api::dto::qr::QrQuery;
use crate::error::AppError;
use crate::state::AppState;

/// File name advertised in `Content-Disposition`.
pub const DOWNLOAD_FILE_NAME: &str = "qr-code.png";

/// Renders a QR code with the logo badge and returns it as PNG.
///
/// # Endpoint
///
/// `GET /api/qr?value=pantaleone.net&size=256&fgColor=%23000000&bgColor=%23ffffff`
///
/// # Query Parameters
///
/// - `value` (required) - text or URL; bare hosts get `https://` prepended
/// - `size` - canvas side in pixels (default 256, clamped to the configured range)
/// - `fgColor` / `bgColor` - hex colors (default `#000000` / `#ffffff`)
/// - `level` - error correction `L`, `M`, `Q` or `H` (default `H`)
/// - `download` - `true` to serve as an attachment
///
/// # Request Flow
///
/// 1. Parse and validate the query string
/// 2. Clamp the size and build a render request
/// 3. Render and PNG-encode on the blocking pool
/// 4. Return the bytes with long-lived cache headers
///
/// # Errors
///
/// Returns 400 Bad Request if `value` is missing, a parameter is malformed,
/// or the value does not fit in a QR code.
/// Returns 500 Internal Server Error if rendering fails.
pub async fn qr_handler(
    State(state): State<AppState>,
    query: Result<Query<QrQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let download = query.is_download();
    let request = query.into_render_request(&state.size_limits)?;

    let service = state.render_service.clone();
    let png = tokio::task::spawn_blocking(move || service.render_png(&request))
        .await
        .map_err(|e| {
            error!("Render task failed: {}", e);
            AppError::internal("Render task failed", json!({}))
        })??;

    let disposition = if download { "attachment" } else { "inline" };

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CACHE_CONTROL,
            format!("public, max-age={}, immutable", state.cache_max_age),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("{disposition}; filename=\"{DOWNLOAD_FILE_NAME}\""),
        ),
    ];

    Ok((headers, png))
}
