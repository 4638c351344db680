//! Hue / lightness / saturation colour model.
//!
//! All components live in `[0, 1]`; hue is a fraction of a full turn, so
//! red sits at 0.0, green at 1/3 and blue at 2/3. Rotating a colour around
//! the hue circle is a single addition here, which is why every palette
//! scheme works in this space rather than in the RGB cube.

use crate::Color;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A colour in the HLS cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

impl Hls {
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        rgb_to_hls(color.to_unit())
    }

    /// Back to 8-bit RGB, truncating each channel.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_unit(hls_to_rgb(self))
    }

    /// Same lightness and saturation, hue moved by `offset` turns.
    ///
    /// The result always has `0.0 <= h < 1.0`, whatever the sign or size
    /// of `offset`.
    #[must_use]
    pub fn rotate(self, offset: f64) -> Self {
        Self {
            h: wrap_unit(self.h + offset),
            ..self
        }
    }
}

/// Convert unit-range RGB to HLS.
#[must_use]
pub fn rgb_to_hls(rgb: [f64; 3]) -> Hls {
    let [r, g, b] = rgb;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;

    // Greys have no hue
    if minc == maxc {
        return Hls { h: 0.0, l, s: 0.0 };
    }

    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hls {
        h: wrap_unit(h / 6.0),
        l,
        s,
    }
}

/// Convert HLS to unit-range RGB.
#[must_use]
pub fn hls_to_rgb(hls: Hls) -> [f64; 3] {
    let Hls { h, l, s } = hls;
    if s == 0.0 {
        return [l, l, l];
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;

    [
        channel(m1, m2, h + ONE_THIRD),
        channel(m1, m2, h),
        channel(m1, m2, h - ONE_THIRD),
    ]
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = wrap_unit(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Floored modulo 1.0: negative inputs wrap up into `[0, 1)`.
fn wrap_unit(x: f64) -> f64 {
    let w = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primaries_land_on_thirds() {
        let red = rgb_to_hls([1.0, 0.0, 0.0]);
        let green = rgb_to_hls([0.0, 1.0, 0.0]);
        let blue = rgb_to_hls([0.0, 0.0, 1.0]);
        assert!(close(red.h, 0.0));
        assert!(close(green.h, ONE_THIRD));
        assert!(close(blue.h, TWO_THIRDS));
        for c in [red, green, blue] {
            assert!(close(c.l, 0.5));
            assert!(close(c.s, 1.0));
        }
    }

    #[test]
    fn greys_have_zero_hue_and_saturation() {
        let grey = rgb_to_hls([0.4, 0.4, 0.4]);
        assert_eq!(grey, Hls { h: 0.0, l: 0.4, s: 0.0 });
        assert_eq!(hls_to_rgb(grey), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn dark_and_light_saturation_branches() {
        // l <= 0.5 uses range / sum
        let dark = rgb_to_hls([0.4, 0.2, 0.2]);
        assert!(close(dark.s, 0.2 / 0.6));
        // l > 0.5 uses range / (2 - sum)
        let light = rgb_to_hls([1.0, 0.6, 0.6]);
        assert!(close(light.s, 0.4 / 0.4));
    }

    #[test]
    fn magenta_hue_wraps_below_one() {
        let magenta = rgb_to_hls([1.0, 0.0, 1.0]);
        assert!(close(magenta.h, 5.0 / 6.0));
    }

    #[test]
    fn float_round_trip() {
        for rgb in [
            [0.25, 0.3176, 0.7098],
            [0.9, 0.1, 0.4],
            [0.05, 0.8, 0.6],
            [1.0, 1.0, 0.0],
        ] {
            let back = hls_to_rgb(rgb_to_hls(rgb));
            for (a, b) in rgb.iter().zip(back.iter()) {
                assert!(close(*a, *b), "{rgb:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn rotate_wraps_both_directions() {
        let c = Hls { h: 0.9, l: 0.5, s: 1.0 };
        assert!(close(c.rotate(0.25).h, 0.15));
        assert!(close(c.rotate(-1.0 / 12.0).h, 0.9 - 1.0 / 12.0));
        let zero = Hls { h: 0.0, l: 0.5, s: 1.0 };
        assert!(close(zero.rotate(-1.0 / 12.0).h, 11.0 / 12.0));
        assert!(zero.rotate(-1e-20).h < 1.0);
        assert!(close(zero.rotate(3.5).h, 0.5));
    }

    #[test]
    fn color_helpers_round_trip_primaries() {
        for c in [Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)] {
            assert_eq!(Hls::from_color(c).to_color(), c);
        }
    }
}
