//! Render request entity and its supporting value types.

use super::color::HexColor;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// QR redundancy tier.
///
/// `H` is the default because the logo badge occludes the center of the
/// symbol and only `H` reliably tolerates that.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub enum ErrorCorrectionLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

impl ErrorCorrectionLevel {
    pub const ALL: [ErrorCorrectionLevel; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Human readable label used by the web page selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::L => "L - Low",
            Self::M => "M - Medium",
            Self::Q => "Q - Quartile",
            Self::H => "H - High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error correction level must be one of L, M, Q, H, got '{0}'")]
pub struct LevelParseError(pub String);

impl FromStr for ErrorCorrectionLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(letter)
    }
}

/// Bounds applied to requested canvas sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: 32,
            max: 1024,
            default: 256,
        }
    }
}

impl SizeLimits {
    /// Resolves a requested size to the effective canvas size.
    ///
    /// Missing sizes use the default; everything else is clamped into
    /// `[min, max]`.
    pub fn clamp(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default)
            .clamp(self.min, self.max)
    }
}

/// A single, self-contained render of one QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Text to encode, before normalization.
    pub text: String,
    /// Effective canvas side in pixels (already clamped).
    pub size: u32,
    pub foreground: HexColor,
    pub background: HexColor,
    pub level: ErrorCorrectionLevel,
}

impl RenderRequest {
    /// Creates a request with default colors and level, clamping `size`.
    pub fn new(text: impl Into<String>, size: Option<u32>, limits: &SizeLimits) -> Self {
        Self {
            text: text.into(),
            size: limits.clamp(size),
            foreground: HexColor::BLACK,
            background: HexColor::WHITE,
            level: ErrorCorrectionLevel::default(),
        }
    }

    pub fn with_colors(mut self, foreground: HexColor, background: HexColor) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_level(mut self, level: ErrorCorrectionLevel) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults_to_high() {
        assert_eq!(ErrorCorrectionLevel::default(), ErrorCorrectionLevel::H);
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("q".parse(), Ok(ErrorCorrectionLevel::Q));
        assert_eq!(" L ".parse(), Ok(ErrorCorrectionLevel::L));
        assert!("X".parse::<ErrorCorrectionLevel>().is_err());
        assert!("".parse::<ErrorCorrectionLevel>().is_err());
    }

    #[test]
    fn test_level_display_round_trips() {
        for level in ErrorCorrectionLevel::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[test]
    fn test_size_limits_clamp() {
        let limits = SizeLimits::default();

        assert_eq!(limits.clamp(None), 256);
        assert_eq!(limits.clamp(Some(512)), 512);
        assert_eq!(limits.clamp(Some(2000)), 1024);
        assert_eq!(limits.clamp(Some(0)), 32);
    }

    #[test]
    fn test_render_request_builder() {
        let request = RenderRequest::new("example.com", Some(4096), &SizeLimits::default())
            .with_colors(HexColor::WHITE, HexColor::BLACK)
            .with_level(ErrorCorrectionLevel::M);

        assert_eq!(request.size, 1024);
        assert_eq!(request.foreground, HexColor::WHITE);
        assert_eq!(request.background, HexColor::BLACK);
        assert_eq!(request.level, ErrorCorrectionLevel::M);
    }
}
