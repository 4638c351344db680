//! 8-bit RGB colour and its `#rrggbb` text form.

use std::fmt;
use std::str::FromStr;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let count = digits.chars().count();
        if count != 6 {
            return Err(HexError::WrongLength(count));
        }

        let mut nibbles = [0u8; 6];
        for (i, (slot, c)) in nibbles.iter_mut().zip(digits.chars()).enumerate() {
            let value = c
                .to_digit(16)
                .ok_or(HexError::InvalidDigit { position: i, found: c })?;
            *slot = value as u8;
        }

        Ok(Self {
            r: (nibbles[0] << 4) | nibbles[1],
            g: (nibbles[2] << 4) | nibbles[3],
            b: (nibbles[4] << 4) | nibbles[5],
        })
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, as printed on swatch labels.
    #[must_use]
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque ARGB32, the framebuffer pixel format.
    #[must_use]
    pub fn to_argb32(self) -> u32 {
        0xFF00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Channels scaled into `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Quantize unit-range channels back to 8 bits.
    ///
    /// Truncates rather than rounds. Out-of-range values saturate at
    /// 0 or 255.
    #[must_use]
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        let q = |x: f64| (x * 255.0) as u8;
        Self {
            r: q(rgb[0]),
            g: q(rgb[1]),
            b: q(rgb[2]),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Parse a hex colour string into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Color, HexError> {
    Color::from_hex(hex)
}

/// Format RGB channels as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Color::rgb(r, g, b).to_hex()
}

/// Malformed hex colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Not exactly six digits after the optional `#`.
    WrongLength(usize),
    /// A character outside `0-9a-fA-F`.
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "malformed hex colour: expected 6 hex digits, got {len}"
            ),
            Self::InvalidDigit { position, found } => write!(
                f,
                "malformed hex colour: {found:?} at digit {position} is not a hex digit"
            ),
        }
    }
}

impl std::error::Error for HexError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Color;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    struct HexVisitor;

    impl Visitor<'_> for HexVisitor {
        type Value = Color;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a hex colour such as \"#3f51b5\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
            Color::from_hex(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(HexVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#3f51b5"), Ok(Color::rgb(63, 81, 181)));
        assert_eq!(hex_to_rgb("3f51b5"), Ok(Color::rgb(63, 81, 181)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#3F51B5"), hex_to_rgb("#3f51b5"));
        assert_eq!(hex_to_rgb("#FfFfFf"), Ok(Color::WHITE));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(hex_to_rgb("#fff"), Err(HexError::WrongLength(3)));
        assert_eq!(hex_to_rgb(""), Err(HexError::WrongLength(0)));
        assert_eq!(hex_to_rgb("#"), Err(HexError::WrongLength(0)));
        assert_eq!(hex_to_rgb("#3f51b5ff"), Err(HexError::WrongLength(8)));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        assert_eq!(hex_to_rgb("##3f51b"), Err(HexError::InvalidDigit { position: 0, found: '#' }));
    }

    #[test]
    fn reject_non_hex_digits() {
        assert_eq!(
            hex_to_rgb("#3g51b5"),
            Err(HexError::InvalidDigit { position: 1, found: 'g' })
        );
        // Multi-byte chars count as one digit each
        assert!(matches!(hex_to_rgb("ééé123"), Err(HexError::InvalidDigit { .. })));
        assert!(matches!(hex_to_rgb("+f+f+f"), Err(HexError::InvalidDigit { .. })));
    }

    #[test]
    fn format_lowercase_and_uppercase() {
        let c = Color::rgb(0xAB, 0x0C, 0x01);
        assert_eq!(rgb_to_hex(0xAB, 0x0C, 0x01), "#ab0c01");
        assert_eq!(c.to_hex_upper(), "#AB0C01");
        assert_eq!(c.to_string(), "#ab0c01");
    }

    #[test]
    fn every_triple_survives_text_round_trip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(17) {
                for b in [0u8, 1, 127, 128, 254, 255] {
                    let hex = rgb_to_hex(r, g, b);
                    assert_eq!(hex_to_rgb(&hex), Ok(Color::rgb(r, g, b)));
                }
            }
        }
    }

    #[test]
    fn text_round_trip_normalizes_case() {
        for s in ["#3F51B5", "ff0000", "#AbCdEf", "000000"] {
            let c = hex_to_rgb(s).expect("valid hex");
            let expected = format!("#{}", s.trim_start_matches('#').to_lowercase());
            assert_eq!(c.to_hex(), expected);
        }
    }

    #[test]
    fn unit_quantization_truncates() {
        assert_eq!(Color::from_unit([0.999_999, 0.5, 0.0]), Color::rgb(254, 127, 0));
        assert_eq!(Color::from_unit([1.0, 1.2, -0.1]), Color::rgb(255, 255, 0));
    }

    #[test]
    fn argb32_is_opaque() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb32(), 0xFF12_3456);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(63, 81, 181)).expect("serialize");
        assert_eq!(json, "\"#3f51b5\"");
        let back: Color = serde_json::from_str("\"#3F51B5\"").expect("deserialize");
        assert_eq!(back, Color::rgb(63, 81, 181));
        assert!(serde_json::from_str::<Color>("\"#3F51\"").is_err());
    }
}
