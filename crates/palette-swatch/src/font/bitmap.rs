//! Built-in 5×7 bitmap font.
//!
//! Covers what swatch labels need: `#`, digits and `A`-`F` (lowercase maps
//! to uppercase). Anything else draws as a hollow box. Each glyph row is a
//! byte whose low five bits are the pixels, bit 4 leftmost.

use palette_core::Color;

use super::{LabelFont, TextBox};
use crate::frame::Frame;

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
/// Blank columns between glyphs.
const SPACING: i32 = 1;

/// Default pixel scale, giving 15×21 px glyphs.
pub const BUILTIN_SCALE: u32 = 3;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const SPACE: Glyph = [0; 7];
const UNKNOWN: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => &[0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        '#' => &[0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        ' ' => &SPACE,
        _ => &UNKNOWN,
    }
}

/// Fixed-pitch bitmap font drawn with square pixels of `scale` × `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(BUILTIN_SCALE)
    }
}

impl BitmapFont {
    #[must_use]
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Every lit font pixel of `text`, as (column, row) in unscaled units.
    fn lit_pixels(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
        text.chars().enumerate().flat_map(|(i, c)| {
            let x0 = i as i32 * (GLYPH_WIDTH + SPACING);
            glyph(c).iter().enumerate().flat_map(move |(row, &bits)| {
                (0..GLYPH_WIDTH)
                    .filter(move |&col| (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1)
                    .map(move |col| (x0 + col, row as i32))
            })
        })
    }
}

impl LabelFont for BitmapFont {
    fn name(&self) -> &str {
        "built-in 5x7"
    }

    fn measure(&self, text: &str) -> TextBox {
        let s = self.scale as i32;
        Self::lit_pixels(text).fold(TextBox::default(), |acc, (col, row)| {
            acc.union(TextBox {
                left: col * s,
                top: row * s,
                right: (col + 1) * s,
                bottom: (row + 1) * s,
            })
        })
    }

    fn draw(&self, frame: &mut Frame, x: i32, y: i32, text: &str, color: Color) {
        let s = self.scale as i32;
        for (col, row) in Self::lit_pixels(text) {
            for dy in 0..s {
                for dx in 0..s {
                    frame.blend(x + col * s + dx, y + row * s + dy, color, 1.0);
                }
            }
        }
    }
}
