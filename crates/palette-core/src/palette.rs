//! Palette generation.

use crate::{Color, Hls, Scheme};

/// An ordered set of colours derived from one base colour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    scheme: Scheme,
    base: Color,
    colors: Vec<Color>,
}

impl Palette {
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn base(&self) -> Color {
        self.base
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Uppercase `#RRGGBB` captions, one per colour.
    #[must_use]
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex_upper()).collect()
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Build the palette for `scheme` around `base`.
///
/// Every computed colour keeps the base's lightness and saturation and only
/// moves its hue. Channels are truncated back to 8 bits, so a computed
/// colour can sit one unit below the exact value.
#[must_use]
pub fn generate_palette(base: Color, scheme: Scheme) -> Palette {
    let hls = Hls::from_color(base);

    let mut colors = Vec::with_capacity(scheme.len());
    if scheme.includes_base() {
        colors.push(base);
    }
    colors.extend(
        scheme
            .offsets()
            .iter()
            .map(|&offset| hls.rotate(offset).to_color()),
    );

    Palette {
        scheme,
        base,
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_leads_when_included() {
        let base = Color::rgb(12, 200, 99);
        for scheme in [Scheme::Complementary, Scheme::Triadic, Scheme::Tetradic] {
            let palette = generate_palette(base, scheme);
            assert_eq!(palette.colors()[0], base);
            assert_eq!(palette.base(), base);
            assert_eq!(palette.scheme(), scheme);
        }
    }

    #[test]
    fn analogous_centre_is_recomputed() {
        // Black and white have no hue, so every analogous colour is the base
        for grey in [Color::BLACK, Color::WHITE] {
            let palette = generate_palette(grey, Scheme::Analogous);
            assert_eq!(palette.colors(), &[grey, grey, grey]);
        }
    }

    #[test]
    fn analogous_neighbours_of_red() {
        let palette = generate_palette(Color::rgb(255, 0, 0), Scheme::Analogous);
        // -30° leans towards magenta, +30° towards yellow
        let [left, centre, right] = palette.colors() else {
            panic!("analogous palette has three colours");
        };
        assert_eq!(*centre, Color::rgb(255, 0, 0));
        assert_eq!((left.r, left.g), (255, 0));
        assert!((126..=128).contains(&left.b));
        assert_eq!((right.r, right.b), (255, 0));
        assert!((126..=128).contains(&right.g));
    }

    #[test]
    fn hex_codes_are_uppercase() {
        let palette = generate_palette(Color::rgb(0xAB, 0xCD, 0xEF), Scheme::Complementary);
        assert_eq!(palette.hex_codes()[0], "#ABCDEF");
        assert_eq!(palette.hex_codes().len(), 2);
    }

    #[test]
    fn iterates_in_order() {
        let palette = generate_palette(Color::rgb(255, 0, 0), Scheme::Tetradic);
        let collected: Vec<Color> = palette.iter().copied().collect();
        assert_eq!(collected, palette.colors());
        assert_eq!((&palette).into_iter().count(), 4);
        assert!(!palette.is_empty());
    }
}
