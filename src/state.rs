//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RenderService;
use crate::config::Config;
use crate::domain::entities::SizeLimits;

/// Immutable state shared by all requests.
///
/// Holds no per-request data: every render allocates its own surface, so
/// handlers only need read access to the service and limits.
#[derive(Clone)]
pub struct AppState {
    pub render_service: Arc<RenderService>,
    pub size_limits: SizeLimits,
    pub cache_max_age: u64,
}

impl AppState {
    pub fn new(render_service: Arc<RenderService>, config: &Config) -> Self {
        Self {
            render_service,
            size_limits: config.size_limits,
            cache_max_age: config.cache_max_age,
        }
    }
}
