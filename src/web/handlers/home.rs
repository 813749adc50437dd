//! Interactive generator page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{ErrorCorrectionLevel, HexColor};
use crate::state::AppState;

/// Initial text shown in the input.
pub const DEFAULT_VALUE: &str = "https://pantaleone.net?utm_source=qrcode&utm_medium=qr&utm_id=main-qr";
/// Initial preview size.
pub const DEFAULT_UI_SIZE: u32 = 200;
/// Bounds enforced by the size input.
pub const UI_SIZE_RANGE: (u32, u32) = (100, 600);

/// One entry of the error correction selector.
pub struct LevelOption {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

/// Template for the generator page.
///
/// Renders `templates/home.html` with:
/// - Text input (debounced re-render)
/// - Size, color and error correction controls
/// - Live preview backed by `/api/qr`
/// - Download and copy-to-clipboard actions
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub default_value: &'static str,
    pub default_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub foreground: String,
    pub background: String,
    pub levels: Vec<LevelOption>,
}

impl HomeTemplate {
    /// Builds the page with UI bounds narrowed to the server's size limits.
    pub fn new(state: &AppState) -> Self {
        let limits = state.size_limits;
        let min_size = UI_SIZE_RANGE.0.max(limits.min);
        let max_size = UI_SIZE_RANGE.1.min(limits.max).max(min_size);

        Self {
            default_value: DEFAULT_VALUE,
            default_size: DEFAULT_UI_SIZE.clamp(min_size, max_size),
            min_size,
            max_size,
            foreground: HexColor::BLACK.to_string(),
            background: HexColor::WHITE.to_string(),
            levels: ErrorCorrectionLevel::ALL
                .into_iter()
                .map(|level| LevelOption {
                    value: level.to_string(),
                    label: level.label(),
                    selected: level == ErrorCorrectionLevel::default(),
                })
                .collect(),
        }
    }
}

/// Renders the generator page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/home.html` for server-side rendering. Rendering of the
/// preview itself happens through `/api/qr` from `static/qr.js`.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate::new(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::RenderService;
    use crate::config::Config;
    use crate::domain::composite::LayoutConfig;
    use crate::domain::entities::SizeLimits;
    use crate::infrastructure::qr::QrcodeEncoder;
    use std::sync::Arc;

    fn state_with_limits(size_limits: SizeLimits) -> AppState {
        let config = Config {
            size_limits,
            ..Config::default()
        };
        let service = RenderService::new(Arc::new(QrcodeEncoder::new()), LayoutConfig::default());
        AppState::new(Arc::new(service), &config)
    }

    #[test]
    fn test_home_template_defaults() {
        let page = HomeTemplate::new(&state_with_limits(SizeLimits::default()));

        assert_eq!(page.default_size, 200);
        assert_eq!((page.min_size, page.max_size), (100, 600));
        assert_eq!(page.levels.len(), 4);
        assert!(page.levels.iter().any(|l| l.selected && l.value == "H"));
    }

    #[test]
    fn test_home_template_respects_server_limits() {
        let page = HomeTemplate::new(&state_with_limits(SizeLimits {
            min: 32,
            max: 150,
            default: 128,
        }));

        assert_eq!((page.min_size, page.max_size), (100, 150));
        assert_eq!(page.default_size, 150);
    }

    #[test]
    fn test_home_template_renders_controls() {
        let html = HomeTemplate::new(&state_with_limits(SizeLimits::default()))
            .render()
            .unwrap();

        assert!(html.contains("id=\"qr-value\""));
        assert!(html.contains("min=\"100\""));
        assert!(html.contains("max=\"600\""));
        assert!(html.contains("<option value=\"H\" selected>"));
        assert!(html.contains("/static/qr.js"));
    }
}
