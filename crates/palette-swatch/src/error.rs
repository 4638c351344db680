//! Rendering errors.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RenderError {
    /// Nothing to draw.
    EmptyPalette,
    /// More colours than one image holds.
    TooWide(usize),
    /// The PNG encoder failed, including failures of the output sink.
    Encode(png::EncodingError),
    /// A file could not be created or written.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "cannot render an empty palette"),
            Self::TooWide(n) => write!(
                f,
                "palette of {n} colours is too wide to render (at most {})",
                crate::render::MAX_SWATCHES
            ),
            Self::Encode(e) => write!(f, "PNG encode error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::EmptyPalette | Self::TooWide(_) => None,
        }
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        Self::Encode(e)
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
