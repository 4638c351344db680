//! Saving rendered palettes to disk.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use palette_core::{Color, Palette};

use crate::error::RenderError;
use crate::render::SwatchRenderer;

/// MIME type of the downloadable image.
pub const PNG_MIME: &str = "image/png";

/// Save `colors` as a PNG file at `path`.
pub fn save_png(renderer: &SwatchRenderer, colors: &[Color], path: &Path) -> Result<(), RenderError> {
    // Render first so a bad palette never leaves an empty file behind
    let png = renderer.render_png(colors)?;
    let file = fs::File::create(path)?;
    let mut w = BufWriter::new(file);
    w.write_all(&png)?;
    w.flush()?;
    Ok(())
}

/// Save `palette` as `{Scheme}_palette.png` inside `dir` and return the
/// path written.
pub fn save_palette_png(
    renderer: &SwatchRenderer,
    palette: &Palette,
    dir: &Path,
) -> Result<PathBuf, RenderError> {
    let path = dir.join(palette.scheme().file_name());
    save_png(renderer, palette.colors(), &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BitmapFont;
    use palette_core::{Scheme, generate_palette};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("palette-swatch-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn saves_with_scheme_file_name() {
        let dir = temp_dir("save");
        let renderer = SwatchRenderer::with_font(Box::new(BitmapFont::default()), Color::WHITE);
        let palette = generate_palette(Color::rgb(63, 81, 181), Scheme::Triadic);

        let path = save_palette_png(&renderer, &palette, &dir).expect("save");
        assert_eq!(path, dir.join("Triadic_palette.png"));
        let bytes = fs::read(&path).expect("read back");
        assert_eq!(&bytes[..4], b"\x89PNG");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_palette_writes_nothing() {
        let dir = temp_dir("empty");
        let renderer = SwatchRenderer::with_font(Box::new(BitmapFont::default()), Color::WHITE);
        let path = dir.join("empty.png");

        assert!(matches!(
            save_png(&renderer, &[], &path),
            Err(RenderError::EmptyPalette)
        ));
        assert!(!path.exists());

        let _ = fs::remove_dir_all(dir);
    }
}
