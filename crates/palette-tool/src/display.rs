//! Terminal swatches: one coloured block per colour, side by side, with its
//! hex code underneath.

use std::fmt::Write;

use palette_core::{Color, Palette};

/// Block width in terminal columns.
const SWATCH_WIDTH: usize = 12;
/// Block height in terminal rows.
const SWATCH_ROWS: usize = 3;
const GAP: &str = "  ";
const RESET: &str = "\x1b[0m";

fn background(color: Color) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Draw `palette` with 24-bit ANSI colour, headed by the scheme name.
#[must_use]
pub fn render_swatches(palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} palette for {}", palette.scheme(), palette.base().to_hex_upper());

    let blank = " ".repeat(SWATCH_WIDTH);
    for _ in 0..SWATCH_ROWS {
        let row: Vec<String> = palette
            .iter()
            .map(|&c| format!("{}{blank}{RESET}", background(c)))
            .collect();
        let _ = writeln!(out, "{}", row.join(GAP));
    }

    let captions: Vec<String> = palette
        .hex_codes()
        .into_iter()
        .map(|hex| format!("{hex:<SWATCH_WIDTH$}"))
        .collect();
    let _ = writeln!(out, "{}", captions.join(GAP).trim_end());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::{Scheme, generate_palette};

    #[test]
    fn one_block_and_caption_per_colour() {
        let palette = generate_palette(Color::rgb(255, 0, 0), Scheme::Triadic);
        let text = render_swatches(&palette);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + SWATCH_ROWS + 1);
        assert_eq!(lines[0], "Triadic palette for #FF0000");
        for row in &lines[1..=SWATCH_ROWS] {
            assert_eq!(row.matches("\x1b[48;2;").count(), 3);
            assert!(row.contains("\x1b[48;2;0;255;0m"));
        }
        assert_eq!(lines[SWATCH_ROWS + 1], "#FF0000       #00FF00       #0000FF");
    }

    #[test]
    fn captions_line_up_with_blocks() {
        let palette = generate_palette(Color::rgb(63, 81, 181), Scheme::Complementary);
        let text = render_swatches(&palette);
        let caption = text.lines().last().expect("caption line");
        let second = caption.find("#B").expect("second caption");
        assert_eq!(second, SWATCH_WIDTH + GAP.len());
    }
}
