//! Colour-theory schemes and their hue offsets.

use std::fmt;
use std::str::FromStr;

const COMPLEMENTARY: [f64; 1] = [0.5];
const ANALOGOUS: [f64; 3] = [-1.0 / 12.0, 0.0, 1.0 / 12.0];
const TRIADIC: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];
const TETRADIC: [f64; 3] = [1.0 / 4.0, 1.0 / 2.0, 3.0 / 4.0];

/// A rule for picking hues around a base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Base plus the opposite hue.
    Complementary,
    /// Base flanked by its neighbours 30° either side.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
}

impl Scheme {
    /// All schemes, in menu order.
    pub const ALL: [Scheme; 4] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Tetradic,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }

    /// Whether the untouched base colour leads the palette.
    ///
    /// Analogous palettes instead recompute the centre colour through the
    /// HLS round trip like their neighbours.
    #[must_use]
    pub fn includes_base(self) -> bool {
        !matches!(self, Self::Analogous)
    }

    /// Hue offsets, in turns, for the computed colours.
    #[must_use]
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &COMPLEMENTARY,
            Self::Analogous => &ANALOGOUS,
            Self::Triadic => &TRIADIC,
            Self::Tetradic => &TETRADIC,
        }
    }

    /// Number of colours in a palette of this scheme.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(self) -> usize {
        usize::from(self.includes_base()) + self.offsets().len()
    }

    /// Download name for a rendered palette, e.g. `Triadic_palette.png`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}_palette.png", self.name())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = UnsupportedScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnsupportedScheme(s.to_string()))
    }
}

/// Scheme name that matches none of the known schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedScheme(pub String);

impl fmt::Display for UnsupportedScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported colour scheme {:?} (expected one of: Complementary, Analogous, Triadic, Tetradic)",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedScheme {}
