//! [`QrEncoder`] backed by the `qrcode` crate.

use crate::domain::encoder::{EncodeError, EncodeOptions, QrEncoder};
use crate::domain::entities::ErrorCorrectionLevel;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Encodes symbols with `qrcode` and scales them to the requested width.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}

impl QrEncoder for QrcodeEncoder {
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<RgbaImage, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(options.level))
            .map_err(|e| match e {
                QrError::DataTooLong => EncodeError::DataTooLong,
                other => EncodeError::Failed(other.to_string()),
            })?;

        let dark = options.dark.to_rgba();
        let light = options.light.to_rgba();

        // One pixel per module; scaling happens once, below.
        let modules = code
            .render::<Rgba<u8>>()
            .quiet_zone(false)
            .module_dimensions(1, 1)
            .dark_color(dark)
            .light_color(light)
            .build();

        let symbol = if options.margin > 0 {
            let side = modules.width() + 2 * options.margin;
            let mut padded = RgbaImage::from_pixel(side, side, light);
            imageops::replace(
                &mut padded,
                &modules,
                options.margin.into(),
                options.margin.into(),
            );
            padded
        } else {
            modules
        };

        let width = options.width.max(1);
        Ok(imageops::resize(&symbol, width, width, FilterType::Nearest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HexColor;

    fn options(width: u32) -> EncodeOptions {
        EncodeOptions {
            level: ErrorCorrectionLevel::H,
            dark: HexColor::BLACK,
            light: HexColor::WHITE,
            margin: 0,
            width,
        }
    }

    #[test]
    fn test_encode_returns_requested_width() {
        let image = QrcodeEncoder::new()
            .encode("https://example.com", &options(230))
            .unwrap();
        assert_eq!((image.width(), image.height()), (230, 230));
    }

    #[test]
    fn test_encode_without_margin_starts_with_finder_pattern() {
        let image = QrcodeEncoder::new()
            .encode("https://example.com", &options(231))
            .unwrap();

        // Finder pattern corners are dark when no quiet zone is drawn.
        assert_eq!(*image.get_pixel(0, 0), HexColor::BLACK.to_rgba());
        assert_eq!(*image.get_pixel(230, 0), HexColor::BLACK.to_rgba());
        assert_eq!(*image.get_pixel(0, 230), HexColor::BLACK.to_rgba());
    }

    #[test]
    fn test_encode_with_margin_pads_light_color() {
        let light = HexColor::rgb(0xff, 0xee, 0xdd);
        let opts = EncodeOptions {
            margin: 4,
            light,
            ..options(300)
        };
        let image = QrcodeEncoder::new().encode("margin", &opts).unwrap();

        assert_eq!(*image.get_pixel(0, 0), light.to_rgba());
    }

    #[test]
    fn test_encode_uses_colors() {
        let dark = HexColor::rgb(0x12, 0x34, 0x56);
        let light = HexColor::rgb(0xab, 0xcd, 0xef);
        let opts = EncodeOptions {
            dark,
            light,
            ..options(100)
        };
        let image = QrcodeEncoder::new().encode("colors", &opts).unwrap();

        assert!(image.pixels().all(|p| *p == dark.to_rgba() || *p == light.to_rgba()));
        assert!(image.pixels().any(|p| *p == light.to_rgba()));
    }

    #[test]
    fn test_encode_data_too_long() {
        let text = "x".repeat(4000);
        let result = QrcodeEncoder::new().encode(&text, &options(256));
        assert!(matches!(result, Err(EncodeError::DataTooLong)));
    }
}
