//! In-memory pixel buffers and the drawing primitives the layout needs.
//!
//! Buffers hold one 16-bit panel word per pixel in row-major order. Nothing
//! here touches the bus; finished buffers are handed to the panel driver.

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::prelude::RawData;

use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::layout::{Frame, Region};

/// Steps of the corner inset used by [`Framebuffer::rounded_rect`].
const CORNER_STEPS: u16 = 4;

#[inline]
pub fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<u16>,
}

impl Framebuffer {
    pub fn new(width: u16, height: u16, background: Rgb565) -> Self {
        Self {
            width,
            height,
            pixels: vec![raw(background); width as usize * height as usize],
        }
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill row `y` from `x1` up to but excluding `x2`, clipped to the buffer.
    pub fn h_line(&mut self, x1: u16, x2: u16, y: u16, color: Rgb565) {
        if y >= self.height {
            return;
        }
        let x2 = x2.min(self.width);
        if x1 >= x2 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x1 as usize..row + x2 as usize].fill(raw(color));
    }

    /// Solid rectangle whose corners are cut by a four-step inset, which
    /// reads as rounded on the panel.
    pub fn rounded_rect(&mut self, frame: Frame, color: Rgb565) {
        let Frame { x, y, w, h } = frame;
        if w < 2 * CORNER_STEPS || h < 2 * CORNER_STEPS {
            return;
        }
        for step in 0..CORNER_STEPS {
            let inset = CORNER_STEPS - step;
            self.h_line(x + inset, x + w - inset, y + step, color);
            self.h_line(x + inset, x + w - inset, y + h - 1 - step, color);
        }
        for row in y + CORNER_STEPS..y + h - CORNER_STEPS {
            self.h_line(x, x + w, row, color);
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), one glyph cell per
    /// character. Cells are opaque and clipped at the buffer edges.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Rgb565,
        background: Rgb565,
    ) -> Result<(), font::Error> {
        let front = raw(color);
        let back = raw(background);
        let width = self.width as usize;
        let mut cursor = x as usize;

        for ch in text.chars() {
            let glyph = font::glyph(ch)?;
            for row in 0..GLYPH_HEIGHT {
                let py = y as usize + row;
                if py >= self.height as usize {
                    break;
                }
                for col in 0..GLYPH_WIDTH {
                    let px = cursor + col;
                    if px >= width {
                        break;
                    }
                    self.pixels[py * width + px] = if font::pixel_on(glyph, row, col) {
                        front
                    } else {
                        back
                    };
                }
            }
            cursor += GLYPH_WIDTH;
        }
        Ok(())
    }
}

/// Pixel buffer dedicated to one field region, reused across updates.
#[derive(Debug, Clone)]
pub struct FieldBuffer {
    region: Region,
    canvas: Framebuffer,
}

impl FieldBuffer {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            canvas: Framebuffer::new(region.width(), region.height(), Rgb565::new(0, 0, 0)),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Render `text` into the whole field. Shorter text is padded with
    /// spaces; longer text is cut at the field width.
    pub fn render(&mut self, text: &str, color: Rgb565, background: Rgb565) -> Result<(), font::Error> {
        let len = self.region.len as usize;
        let fitted: String = text.chars().chain(core::iter::repeat(' ')).take(len).collect();
        self.canvas.draw_text(0, 0, &fitted, color, background)
    }

    pub fn pixels(&self) -> &[u16] {
        self.canvas.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Field;

    const FG: Rgb565 = Rgb565::new(31, 63, 31);
    const BG: Rgb565 = Rgb565::new(0, 0, 8);
    const WIN: Rgb565 = Rgb565::new(4, 8, 4);

    #[test]
    fn h_line_is_half_open_and_clipped() {
        let mut fb = Framebuffer::new(10, 2, BG);
        fb.h_line(2, 5, 1, FG);
        assert_eq!(fb.pixel(1, 1), Some(raw(BG)));
        assert_eq!(fb.pixel(2, 1), Some(raw(FG)));
        assert_eq!(fb.pixel(4, 1), Some(raw(FG)));
        assert_eq!(fb.pixel(5, 1), Some(raw(BG)));

        fb.h_line(8, 40, 0, FG);
        assert_eq!(fb.pixel(9, 0), Some(raw(FG)));
        fb.h_line(0, 10, 7, FG);
    }

    #[test]
    fn rounded_rect_cuts_corners() {
        let mut fb = Framebuffer::new(40, 20, BG);
        fb.rounded_rect(Frame { x: 2, y: 1, w: 30, h: 12 }, WIN);

        // Top row inset by four on each side.
        assert_eq!(fb.pixel(5, 1), Some(raw(BG)));
        assert_eq!(fb.pixel(6, 1), Some(raw(WIN)));
        assert_eq!(fb.pixel(27, 1), Some(raw(WIN)));
        assert_eq!(fb.pixel(28, 1), Some(raw(BG)));
        // Fourth row inset by one.
        assert_eq!(fb.pixel(2, 4), Some(raw(BG)));
        assert_eq!(fb.pixel(3, 4), Some(raw(WIN)));
        // Body spans the full width.
        assert_eq!(fb.pixel(2, 5), Some(raw(WIN)));
        assert_eq!(fb.pixel(31, 5), Some(raw(WIN)));
        assert_eq!(fb.pixel(32, 5), Some(raw(BG)));
        // Bottom row mirrors the top.
        assert_eq!(fb.pixel(5, 12), Some(raw(BG)));
        assert_eq!(fb.pixel(6, 12), Some(raw(WIN)));
        assert_eq!(fb.pixel(6, 13), Some(raw(BG)));
    }

    #[test]
    fn draw_text_advances_by_glyph_width() {
        let mut fb = Framebuffer::new(40, 20, BG);
        fb.draw_text(1, 2, "11", FG, WIN).unwrap();
        // '1' row 1 is 0x0600: columns 5 and 6 of each cell
        assert_eq!(fb.pixel(1 + 5, 3), Some(raw(FG)));
        assert_eq!(fb.pixel(1 + 11 + 5, 3), Some(raw(FG)));
        // unset glyph pixels take the window colour, outside stays background
        assert_eq!(fb.pixel(1, 2), Some(raw(WIN)));
        assert_eq!(fb.pixel(0, 2), Some(raw(BG)));
        assert_eq!(fb.pixel(23, 2), Some(raw(BG)));
    }

    #[test]
    fn draw_text_clips_at_edges() {
        let mut fb = Framebuffer::new(15, 10, BG);
        fb.draw_text(8, 0, "WW", FG, WIN).unwrap();
        assert_eq!(fb.pixels().len(), 150);
    }

    #[test]
    fn draw_text_rejects_unsupported() {
        let mut fb = Framebuffer::new(40, 20, BG);
        assert_eq!(
            fb.draw_text(0, 0, "a\u{e9}", FG, WIN),
            Err(font::Error::Unsupported('\u{e9}'))
        );
    }

    #[test]
    fn field_buffer_pads_and_truncates() {
        let region = Field::Cpu.region();
        let mut field = FieldBuffer::new(region);
        assert_eq!(field.pixels().len(), 16 * 4 * 11);

        field.render("7", FG, WIN).unwrap();
        let padded = field.pixels().to_vec();
        let expected = font::rasterize("7   ", FG, WIN).unwrap();
        assert_eq!(padded, expected);

        field.render("12345678", FG, WIN).unwrap();
        let expected = font::rasterize("1234", FG, WIN).unwrap();
        assert_eq!(field.pixels(), expected.as_slice());
    }
}
