//! ARGB32 framebuffer the swatches are drawn into.

use palette_core::Color;

/// A width × height grid of opaque ARGB32 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// A black frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = vec![Color::BLACK.to_argb32(); width as usize * height as usize];
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.index(x as i32, y as i32)?;
        Some(argb_to_color(self.pixels[i]))
    }

    /// Fill `[x0, x1) × [y0, y1)`, clipped to the frame.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let argb = color.to_argb32();
        let stride = self.width as usize;
        for y in y0 as usize..y1 as usize {
            let row = y * stride;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(argb);
        }
    }

    /// Mix `color` over one pixel with the given coverage (0.0 to 1.0).
    ///
    /// Off-frame coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let a = coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }

        let dst = argb_to_color(self.pixels[i]);
        let mix = |s: u8, d: u8| -> u8 {
            let s = f32::from(s);
            let d = f32::from(d);
            (d + (s - d) * a).round().clamp(0.0, 255.0) as u8
        };
        self.pixels[i] = Color::rgb(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b))
            .to_argb32();
    }

    /// Packed 8-bit RGB bytes, the layout the PNG encoder expects.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for &pixel in &self.pixels {
            rgb.push(((pixel >> 16) & 0xFF) as u8);
            rgb.push(((pixel >> 8) & 0xFF) as u8);
            rgb.push((pixel & 0xFF) as u8);
        }
        rgb
    }
}

fn argb_to_color(pixel: u32) -> Color {
    Color::rgb(
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}
