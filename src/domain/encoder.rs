//! Contract for the external QR symbol encoder.
//!
//! The compositor never encodes QR symbols itself; it consumes a bitmap
//! produced by an implementation of [`QrEncoder`] (see
//! [`crate::infrastructure::qr::QrcodeEncoder`]).

use crate::domain::entities::{ErrorCorrectionLevel, HexColor};
use image::RgbaImage;

/// Options passed to the encoder for a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub level: ErrorCorrectionLevel,
    pub dark: HexColor,
    pub light: HexColor,
    /// Quiet zone in modules drawn by the encoder itself.
    pub margin: u32,
    /// Requested side of the returned bitmap in pixels.
    pub width: u32,
}

/// Errors reported by a [`QrEncoder`].
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Input is too long to fit in a QR code")]
    DataTooLong,

    #[error("QR encoding failed: {0}")]
    Failed(String),
}

/// Renders text into a square QR bitmap.
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    /// Encodes `text` into a `width × width` bitmap using `dark` for
    /// modules and `light` for the background.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DataTooLong`] when no QR version can hold
    /// the text at the requested level.
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<RgbaImage, EncodeError>;
}
