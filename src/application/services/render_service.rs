//! QR render orchestration service.

use std::sync::Arc;

use crate::domain::composite::{CompositeParameters, LayoutConfig};
use crate::domain::compositor::composite;
use crate::domain::encoder::{EncodeError, EncodeOptions, QrEncoder};
use crate::domain::entities::RenderRequest;
use crate::domain::surface::Surface;
use crate::utils::url_normalizer::normalize_input;

/// Errors that can occur while rendering a QR code.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Missing \"value\"")]
    EmptyInput,

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Cannot allocate a {0}x{0} canvas")]
    Canvas(u32),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Service turning a [`RenderRequest`] into a composited image.
///
/// Stateless apart from its immutable collaborators, so a single instance
/// is shared across all requests.
pub struct RenderService {
    encoder: Arc<dyn QrEncoder>,
    layout: LayoutConfig,
}

impl RenderService {
    /// Creates a new render service.
    pub fn new(encoder: Arc<dyn QrEncoder>, layout: LayoutConfig) -> Self {
        Self { encoder, layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Renders the request onto a new surface.
    ///
    /// # Flow
    ///
    /// 1. Normalize the text (bare hosts gain `https://`)
    /// 2. Derive geometry from the already clamped size
    /// 3. Ask the encoder for a `qr_draw_size` bitmap without quiet zone
    /// 4. Composite background, QR and badge
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyInput`] for empty text, before any
    /// encoding or drawing happens.
    /// Returns [`RenderError::Encode`] when the encoder fails.
    /// Returns [`RenderError::Canvas`] when the size is zero.
    pub fn render(&self, request: &RenderRequest) -> Result<Surface, RenderError> {
        let text = normalize_input(&request.text);
        if text.is_empty() {
            return Err(RenderError::EmptyInput);
        }

        let params = CompositeParameters::derive(request.size, &self.layout);

        let options = EncodeOptions {
            level: request.level,
            dark: request.foreground,
            light: request.background,
            margin: 0,
            width: params.qr_draw_size,
        };

        tracing::debug!(
            text = %text,
            size = request.size,
            level = %request.level,
            "Rendering QR code"
        );

        let qr = self.encoder.encode(&text, &options)?;

        composite(request.background, &qr, &params).ok_or(RenderError::Canvas(request.size))
    }

    /// Renders the request and encodes the result as PNG.
    ///
    /// # Errors
    ///
    /// Same as [`RenderService::render`], plus [`RenderError::Png`] if PNG
    /// encoding fails.
    pub fn render_png(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        let surface = self.render(request)?;
        Ok(surface.encode_png()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoder::MockQrEncoder;
    use crate::domain::entities::{ErrorCorrectionLevel, HexColor, SizeLimits};
    use image::RgbaImage;

    fn solid(width: u32, color: HexColor) -> RgbaImage {
        RgbaImage::from_pixel(width, width, color.to_rgba())
    }

    #[test]
    fn test_render_normalizes_text_and_requests_margin_zero() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode()
            .withf(|text, options| {
                text == "https://pantaleone.net"
                    && options.margin == 0
                    && options.width == 230
                    && options.level == ErrorCorrectionLevel::H
            })
            .times(1)
            .returning(|_, options| Ok(solid(options.width, options.dark)));

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let request = RenderRequest::new("pantaleone.net", Some(256), &SizeLimits::default());

        let surface = service.render(&request).unwrap();
        assert_eq!((surface.width(), surface.height()), (256, 256));
    }

    #[test]
    fn test_render_passes_colors_to_encoder() {
        let fg = HexColor::rgb(0x10, 0x20, 0x30);
        let bg = HexColor::rgb(0xf0, 0xe0, 0xd0);

        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode()
            .withf(move |_, options| options.dark == fg && options.light == bg)
            .times(1)
            .returning(|_, options| Ok(solid(options.width, options.dark)));

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let request = RenderRequest::new("hello", Some(100), &SizeLimits::default())
            .with_colors(fg, bg);

        let surface = service.render(&request).unwrap();
        assert_eq!(surface.pixel(0, 0), bg.to_rgba());
        assert_eq!(surface.pixel(5, 5), fg.to_rgba());
    }

    #[test]
    fn test_render_rejects_empty_text_without_encoding() {
        let mut encoder = MockQrEncoder::new();
        encoder.expect_encode().times(0);

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let request = RenderRequest::new("", None, &SizeLimits::default());

        assert!(matches!(
            service.render(&request),
            Err(RenderError::EmptyInput)
        ));
    }

    #[test]
    fn test_render_propagates_encoder_error() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_, _| Err(EncodeError::DataTooLong));

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let request = RenderRequest::new("too long", None, &SizeLimits::default());

        assert!(matches!(
            service.render(&request),
            Err(RenderError::Encode(EncodeError::DataTooLong))
        ));
    }

    #[test]
    fn test_render_png_is_deterministic() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode()
            .times(2)
            .returning(|_, options| Ok(solid(options.width, options.dark)));

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let request = RenderRequest::new("same", Some(300), &SizeLimits::default());

        let first = service.render_png(&request).unwrap();
        let second = service.render_png(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_rejects_zero_canvas() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode()
            .returning(|_, _| Ok(RgbaImage::new(1, 1)));

        let service = RenderService::new(Arc::new(encoder), LayoutConfig::default());
        let mut request = RenderRequest::new("zero", None, &SizeLimits::default());
        request.size = 0;

        assert!(matches!(
            service.render(&request),
            Err(RenderError::Canvas(0))
        ));
    }
}
