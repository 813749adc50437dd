//! DTOs for the QR image endpoint.

use serde::Deserialize;
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{ErrorCorrectionLevel, HexColor, RenderRequest, SizeLimits};
use crate::error::AppError;

/// Longest `value` accepted before it reaches the encoder.
pub const MAX_VALUE_LENGTH: usize = 4096;

/// Query string of `GET /api/qr`.
///
/// Empty parameters are treated like missing ones, so `fgColor=` falls back
/// to the default color instead of failing.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QrQuery {
    /// Text or URL to encode (required).
    #[validate(length(max = 4096, message = "Value is too long"))]
    pub value: Option<String>,

    /// Canvas side in pixels, clamped to the configured limits. Parsed
    /// wider than `u32` so oversized requests clamp instead of failing.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub size: Option<u64>,

    /// Module color (default `#000000`).
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub fg_color: Option<HexColor>,

    /// Background color (default `#ffffff`).
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub bg_color: Option<HexColor>,

    /// Error correction level (default `H`).
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub level: Option<ErrorCorrectionLevel>,

    /// Serve as an attachment instead of inline.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub download: Option<bool>,
}

impl QrQuery {
    /// Converts the query into a [`RenderRequest`], applying defaults and
    /// clamping the size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `value` is missing or empty, or
    /// longer than [`MAX_VALUE_LENGTH`].
    pub fn into_render_request(self, limits: &SizeLimits) -> Result<RenderRequest, AppError> {
        self.validate()?;

        let value = self
            .value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::bad_request("Missing \"value\"", json!({ "field": "value" })))?;

        let size = self.size.map(|s| u32::try_from(s).unwrap_or(u32::MAX));

        Ok(RenderRequest::new(value, size, limits)
            .with_colors(
                self.fg_color.unwrap_or(HexColor::BLACK),
                self.bg_color.unwrap_or(HexColor::WHITE),
            )
            .with_level(self.level.unwrap_or_default()))
    }

    /// Whether the response should be served as a download.
    pub fn is_download(&self) -> bool {
        self.download.unwrap_or(false)
    }
}
