use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color. Parsed from and printed as CSS hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("unsupported color length {len} in {value:?}")]
    BadLength { value: String, len: usize },
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Accent used for nodes without their own color (`#6ea8fe`).
    pub const ACCENT: Self = Self::rgb(0x6e, 0xa8, 0xfe);
    /// Muted gray for notes that carry no source url (`#9aa3b2`).
    pub const MUTED: Self = Self::rgb(0x9a, 0xa3, 0xb2);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Same color with its alpha replaced by `opacity` in `[0, 1]`.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a: alpha, ..*self }
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(value.to_string()));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(value.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::BadDigit(value.to_string()))
        };
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(hex.chars()) {
                    let v = channel(&c.to_string())?;
                    *slot = v * 16 + v;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            len => Err(ColorParseError::BadLength {
                value: value.to_string(),
                len,
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(Color::from_hex("#6ea8fe").unwrap(), Color::ACCENT);
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_hex("#ff000080").unwrap(),
            Color::rgba(255, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::from_hex("red"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::BadLength { len: 5, .. })
        ));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Color::MUTED.to_string(), "#9aa3b2");
        let translucent = Color::WHITE.with_opacity(0.35);
        assert_eq!(translucent.a, 89);
        assert_eq!(
            Color::from_hex(&translucent.to_string()).unwrap(),
            translucent
        );
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::ACCENT).unwrap();
        assert_eq!(json, "\"#6ea8fe\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::ACCENT);
    }
}
