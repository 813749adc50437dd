//! RGB color entity parsed from CSS-style hex strings.

use image::Rgba;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color must be 3 or 6 hex digits, got '{0}'")]
    InvalidLength(String),

    #[error("Color contains a non-hex character: '{0}'")]
    InvalidDigit(String),
}

/// An opaque RGB color.
///
/// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb` (any case). Always
/// displays as lowercase `#rrggbb`, which is also the form used when the
/// color is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);
    pub const WHITE: HexColor = HexColor::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xff])
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16);

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2]).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?,
                channel(&digits[2..4]).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?,
                channel(&digits[4..6]).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?,
            )),
            3 => {
                // `#abc` expands to `#aabbcc`
                let mut expanded = [0u8; 3];
                for (slot, c) in expanded.iter_mut().zip(digits.chars()) {
                    let nibble = c
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::InvalidDigit(s.to_string()))?
                        as u8;
                    *slot = nibble * 0x11;
                }
                Ok(Self::rgb(expanded[0], expanded[1], expanded[2]))
            }
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        let color: HexColor = "#1a2B3c".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_parse_without_hash() {
        let color: HexColor = "ffffff".parse().unwrap();
        assert_eq!(color, HexColor::WHITE);
    }

    #[test]
    fn test_parse_short_form() {
        let color: HexColor = "#f0a".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(
            "#12345".parse::<HexColor>(),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "".parse::<HexColor>(),
            Err(ColorParseError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(matches!(
            "#gggggg".parse::<HexColor>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            "red".parse::<HexColor>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_display_is_lowercase_long_form() {
        assert_eq!(HexColor::rgb(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
        assert_eq!("#FFF".parse::<HexColor>().unwrap().to_string(), "#ffffff");
    }

    #[test]
    fn test_to_rgba_is_opaque() {
        assert_eq!(HexColor::rgb(1, 2, 3).to_rgba(), Rgba([1, 2, 3, 255]));
    }
}
