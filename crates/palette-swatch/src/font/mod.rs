//! Label fonts.
//!
//! Swatch labels are drawn either with a scalable TrueType/OpenType font or,
//! when none can be loaded, with the small bitmap font compiled into the
//! crate. Resolution never fails: every error ends in the built-in font.

mod bitmap;
mod scalable;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use palette_core::Color;

use crate::frame::Frame;

pub use bitmap::BitmapFont;
pub use scalable::ScalableFont;

/// Preferred label font file.
pub const PREFERRED_FONT: &str = "arial.ttf";

/// Label size in pixels per em.
pub const LABEL_FONT_SIZE: f32 = 30.0;

/// Ink bounding box of a piece of text, relative to its draw origin.
///
/// The origin is the top-left of the line box; `right` and `bottom` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box covering both.
    #[must_use]
    pub fn union(self, other: TextBox) -> TextBox {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A font that can measure and draw a single line of label text.
pub trait LabelFont {
    /// Short description for logs.
    fn name(&self) -> &str;

    /// Ink bounds of `text` drawn at origin (0, 0).
    fn measure(&self, text: &str) -> TextBox;

    /// Draw `text` with its line box's top-left at (`x`, `y`).
    fn draw(&self, frame: &mut Frame, x: i32, y: i32, text: &str, color: Color);
}

/// Which font the renderer should try to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontChoice {
    /// Look for [`PREFERRED_FONT`] in the working directory and the usual
    /// system font directories.
    #[default]
    Preferred,
    /// Load this font file.
    Path(PathBuf),
    /// Skip scalable fonts entirely.
    Builtin,
}

/// Load the requested font, falling back to the built-in bitmap font on
/// any failure.
#[must_use]
pub fn resolve_font(choice: &FontChoice) -> Box<dyn LabelFont> {
    let loaded = match choice {
        FontChoice::Builtin => return Box::new(BitmapFont::default()),
        FontChoice::Path(path) => ScalableFont::load(path, LABEL_FONT_SIZE),
        FontChoice::Preferred => load_preferred(),
    };

    match loaded {
        Ok(font) => {
            log::debug!("label font: {}", font.name());
            Box::new(font)
        }
        Err(e) => {
            log::warn!("{e}; using built-in label font");
            Box::new(BitmapFont::default())
        }
    }
}

fn load_preferred() -> Result<ScalableFont, FontError> {
    let candidates = font_candidates(PREFERRED_FONT);
    for path in &candidates {
        if !path.is_file() {
            continue;
        }
        match ScalableFont::load(path, LABEL_FONT_SIZE) {
            Ok(font) => return Ok(font),
            Err(e) => log::debug!("skipping {}: {e}", path.display()),
        }
    }
    Err(FontError::NotFound(PREFERRED_FONT.to_string()))
}

/// Places a font file named `file` is looked for, in order.
fn font_candidates(file: &str) -> Vec<PathBuf> {
    const FONT_DIRS: &[&str] = &[
        "C:\\Windows\\Fonts",
        "/Library/Fonts",
        "/System/Library/Fonts/Supplemental",
        "/usr/share/fonts/truetype/msttcorefonts",
        "/usr/share/fonts/TTF",
        "/usr/share/fonts/truetype",
        "/usr/local/share/fonts",
    ];

    let capitalised = capitalise(file);
    let mut candidates = vec![PathBuf::from(file)];
    for dir in FONT_DIRS {
        let dir = Path::new(dir);
        candidates.push(dir.join(file));
        if capitalised != file {
            candidates.push(dir.join(&capitalised));
        }
    }
    candidates
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Why a scalable font could not be used.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io(PathBuf, io::Error),
    /// The file is not a usable font.
    Invalid(PathBuf, ab_glyph::InvalidFont),
    /// No candidate location held the font.
    NotFound(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "cannot read font {}: {e}", path.display()),
            Self::Invalid(path, e) => write!(f, "invalid font {}: {e}", path.display()),
            Self::NotFound(name) => write!(f, "font {name} not found"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Invalid(_, e) => Some(e),
            Self::NotFound(_) => None,
        }
    }
}
