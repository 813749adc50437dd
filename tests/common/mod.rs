#![allow(dead_code)]

use axum::Router;
use image::RgbaImage;
use mockall::mock;
use qr_badge::application::services::RenderService;
use qr_badge::config::Config;
use qr_badge::domain::encoder::{EncodeError, EncodeOptions, QrEncoder};
use qr_badge::infrastructure::qr::QrcodeEncoder;
use qr_badge::state::AppState;
use std::sync::Arc;

mock! {
    pub Encoder {}

    impl QrEncoder for Encoder {
        fn encode(&self, text: &str, options: &EncodeOptions) -> Result<RgbaImage, EncodeError>;
    }
}

/// State backed by the real `qrcode` encoder and default configuration.
pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(QrcodeEncoder::new()))
}

pub fn create_state_with(encoder: Arc<dyn QrEncoder>) -> AppState {
    let config = Config::default();
    let service = Arc::new(RenderService::new(encoder, config.layout));
    AppState::new(service, &config)
}

/// Encoder that fails every call with an internal error.
pub fn failing_encoder() -> Arc<dyn QrEncoder> {
    let mut encoder = MockEncoder::new();
    encoder
        .expect_encode()
        .returning(|_, _| Err(EncodeError::Failed("encoder unavailable".to_string())));
    Arc::new(encoder)
}

pub fn qr_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", qr_badge::api::routes::public_routes())
        .with_state(state)
}
