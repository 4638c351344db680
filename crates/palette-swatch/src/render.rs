//! Swatch layout and PNG encoding.
//!
//! The image is one row of square cells, one per colour, each filled with
//! its colour and labelled in the middle with the uppercase hex code.

use std::io::Write;

use palette_core::Color;

use crate::error::RenderError;
use crate::font::{FontChoice, LabelFont, resolve_font};
use crate::frame::Frame;

/// Width of one swatch cell.
pub const CELL_SIZE: u32 = 200;
/// Height of the whole image.
pub const IMAGE_HEIGHT: u32 = 200;
/// Most swatches one image may hold.
pub const MAX_SWATCHES: usize = 64;

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub font: FontChoice,
    pub label_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: FontChoice::Preferred,
            label_color: Color::WHITE,
        }
    }
}

/// Draws palettes into frames and PNG streams.
pub struct SwatchRenderer {
    font: Box<dyn LabelFont>,
    label_color: Color,
}

impl std::fmt::Debug for SwatchRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwatchRenderer")
            .field("font", &self.font.name())
            .field("label_color", &self.label_color)
            .finish()
    }
}

impl Default for SwatchRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl SwatchRenderer {
    /// Resolve the configured font (falling back to the built-in one).
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            font: resolve_font(&config.font),
            label_color: config.label_color,
        }
    }

    /// Use an already loaded font.
    #[must_use]
    pub fn with_font(font: Box<dyn LabelFont>, label_color: Color) -> Self {
        Self { font, label_color }
    }

    #[must_use]
    pub fn font_name(&self) -> &str {
        self.font.name()
    }

    /// Lay out and draw every swatch.
    pub fn render_frame(&self, colors: &[Color]) -> Result<Frame, RenderError> {
        let width = image_width(colors.len())?;
        let mut frame = Frame::new(width, IMAGE_HEIGHT);

        for (i, &color) in colors.iter().enumerate() {
            let x0 = i as u32 * CELL_SIZE;
            frame.fill_rect(x0, 0, x0 + CELL_SIZE, IMAGE_HEIGHT, color);

            let label = color.to_hex_upper();
            let ink = self.font.measure(&label);
            // Centre the ink, not the line box
            let x = x0 as i32 + (CELL_SIZE as i32 - ink.width()) / 2 - ink.left;
            let y = (IMAGE_HEIGHT as i32 - ink.height()) / 2 - ink.top;
            self.font.draw(&mut frame, x, y, &label, self.label_color);
        }

        log::debug!(
            "rendered {} swatches ({}x{}) with {}",
            colors.len(),
            frame.width(),
            frame.height(),
            self.font.name()
        );
        Ok(frame)
    }

    /// Render and PNG-encode into `sink`.
    pub fn write_png<W: Write>(&self, colors: &[Color], sink: W) -> Result<(), RenderError> {
        let frame = self.render_frame(colors)?;
        encode_png(&frame, sink)
    }

    /// Render and PNG-encode into memory.
    pub fn render_png(&self, colors: &[Color]) -> Result<Vec<u8>, RenderError> {
        let mut png_buf = Vec::new();
        self.write_png(colors, &mut png_buf)?;
        Ok(png_buf)
    }
}

/// Render `colors` as labelled swatches and return the PNG bytes.
///
/// Uses the preferred label font when it can be found.
pub fn render_palette_image(colors: &[Color]) -> Result<Vec<u8>, RenderError> {
    SwatchRenderer::default().render_png(colors)
}

/// Render `colors` as labelled swatches, writing the PNG into `sink`.
pub fn write_palette_png<W: Write>(colors: &[Color], sink: W) -> Result<(), RenderError> {
    SwatchRenderer::default().write_png(colors, sink)
}

/// Encode a frame as 8-bit RGB PNG.
pub fn encode_png<W: Write>(frame: &Frame, sink: W) -> Result<(), RenderError> {
    let mut encoder = png::Encoder::new(sink, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.to_rgb_bytes())?;
    writer.finish()?;
    Ok(())
}

fn image_width(count: usize) -> Result<u32, RenderError> {
    if count == 0 {
        return Err(RenderError::EmptyPalette);
    }
    if count > MAX_SWATCHES {
        return Err(RenderError::TooWide(count));
    }
    Ok(count as u32 * CELL_SIZE)
}
