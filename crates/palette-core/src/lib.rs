//! Colour-theory palette generation.
//!
//! A palette is derived from one base colour by rotating its hue in the
//! HLS model while lightness and saturation stay fixed. Four schemes are
//! supported: complementary (2 colours), analogous (3), triadic (3) and
//! tetradic (4). Generation is pure and deterministic.

mod color;
mod hls;
mod palette;
mod scheme;

pub use color::{Color, HexError, hex_to_rgb, rgb_to_hex};
pub use hls::{Hls, hls_to_rgb, rgb_to_hls};
pub use palette::{Palette, generate_palette};
pub use scheme::{Scheme, UnsupportedScheme};
