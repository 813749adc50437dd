//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::RenderRequest;
use crate::state::AppState;

/// Text rendered by the renderer probe.
const PROBE_TEXT: &str = "health";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Renderer**: Encodes and composites a probe code at the minimum size
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "renderer": {
///       "status": "ok",
///       "message": "Rendered 32x32 probe"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let renderer_check = check_renderer(&state).await;

    let all_healthy = renderer_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            renderer: renderer_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Renders a tiny probe code end to end.
async fn check_renderer(state: &AppState) -> CheckStatus {
    let service = state.render_service.clone();
    let request = RenderRequest::new(PROBE_TEXT, Some(state.size_limits.min), &state.size_limits);

    match tokio::task::spawn_blocking(move || service.render(&request)).await {
        Ok(Ok(surface)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Rendered {}x{} probe",
                surface.width(),
                surface.height()
            )),
        },
        Ok(Err(e)) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Render error: {}", e)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Render task failed: {}", e)),
        },
    }
}
