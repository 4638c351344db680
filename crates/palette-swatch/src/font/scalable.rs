//! TrueType / OpenType label font rasterized with `ab_glyph`.

use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use palette_core::Color;

use super::{FontError, LabelFont, TextBox};
use crate::frame::Frame;

/// An outline font at a fixed pixel size.
pub struct ScalableFont {
    font: FontVec,
    scale: PxScale,
    name: String,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont")
            .field("name", &self.name)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl ScalableFont {
    /// Load a font file at `px_per_em` pixels per em.
    pub fn load(path: &Path, px_per_em: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|e| FontError::Io(path.to_path_buf(), e))?;
        let font =
            FontVec::try_from_vec(data).map_err(|e| FontError::Invalid(path.to_path_buf(), e))?;
        Ok(Self::from_font(font, px_per_em, path.display().to_string()))
    }

    /// Wrap an already parsed font.
    #[must_use]
    pub fn from_font(font: FontVec, px_per_em: f32, name: String) -> Self {
        // PxScale is the ascent-to-descent height, not the em size
        let scale = match font.units_per_em() {
            Some(upem) if upem > 0.0 => PxScale::from(px_per_em * font.height_unscaled() / upem),
            _ => PxScale::from(px_per_em),
        };
        Self { font, scale, name }
    }

    /// Lay out `text` on one line with the top of the line box at y = 0 and
    /// return the glyphs that have ink.
    fn outlines(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();

        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        let mut outlined = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, ascent));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(og) = self.font.outline_glyph(glyph) {
                outlined.push(og);
            }
        }
        outlined
    }
}

impl LabelFont for ScalableFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str) -> TextBox {
        self.outlines(text)
            .iter()
            .fold(TextBox::default(), |acc, og| {
                let b = og.px_bounds();
                acc.union(TextBox {
                    left: b.min.x.floor() as i32,
                    top: b.min.y.floor() as i32,
                    right: b.max.x.ceil() as i32,
                    bottom: b.max.y.ceil() as i32,
                })
            })
    }

    fn draw(&self, frame: &mut Frame, x: i32, y: i32, text: &str, color: Color) {
        for og in self.outlines(text) {
            let b = og.px_bounds();
            let gx = x + b.min.x.floor() as i32;
            let gy = y + b.min.y.floor() as i32;
            og.draw(|dx, dy, coverage| {
                frame.blend(gx + dx as i32, gy + dy as i32, color, coverage);
            });
        }
    }
}
