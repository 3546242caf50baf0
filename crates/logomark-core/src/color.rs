//! CSS-style hex colours for the canvas background and crop overlay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Missing leading `#`.
    #[error("Colour must start with '#': {0:?}")]
    MissingHash(String),

    /// Wrong number of hex digits (expected 3 or 6).
    #[error("Colour must have 3 or 6 hex digits: {0:?}")]
    InvalidLength(String),

    /// A character that is not a hex digit.
    #[error("Invalid hex digit in colour: {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(input.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidDigit(input.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::opaque(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::opaque(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::InvalidLength(input.to_string())),
        }
    }

    /// Lowercase `#rrggbb` form (alpha is dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgba::parse_hex("#00ff00"), Ok(Rgba::opaque(0, 255, 0)));
        assert_eq!(Rgba::parse_hex("#FFFFFF"), Ok(Rgba::WHITE));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Rgba::parse_hex("#f0a"), Ok(Rgba::opaque(255, 0, 170)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Rgba::parse_hex("ffffff"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            Rgba::parse_hex("#ffff"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            Rgba::parse_hex("#gggggg"),
            Err(ColorError::InvalidDigit(_))
        ));
        // Multi-byte characters must not panic on slicing
        assert!(matches!(
            Rgba::parse_hex("#ééé"),
            Err(ColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Rgba::opaque(18, 52, 86);
        assert_eq!(c.to_hex(), "#123456");
        assert_eq!(Rgba::parse_hex(&c.to_hex()), Ok(c));
    }
}
