//! Labelled swatch rendering for colour palettes.
//!
//! A palette of N colours becomes a `200N × 200` image: one 200 px cell per
//! colour, filled with it and captioned in white with its uppercase hex
//! code. Images are encoded as PNG into any `Write` sink; nothing touches
//! the filesystem except the helpers in [`capture`].

pub mod capture;
mod error;
pub mod font;
mod frame;
mod render;

pub use error::RenderError;
pub use font::{BitmapFont, FontChoice, FontError, LabelFont, ScalableFont, TextBox};
pub use frame::Frame;
pub use render::{
    CELL_SIZE, IMAGE_HEIGHT, MAX_SWATCHES, RenderConfig, SwatchRenderer, encode_png,
    render_palette_image, write_palette_png,
};
