//! Fixed 11x16 bitmap font.
//!
//! The table covers the contiguous code range `0x1F..=0x7E`: every printable
//! ASCII character plus a degree sign stored at `0x1F`. Each glyph is 16 rows
//! of 16 bits, bit 15 being the leftmost pixel; only the top 11 bits are used.

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::prelude::RawData;

pub const GLYPH_WIDTH: usize = 11;
pub const GLYPH_HEIGHT: usize = 16;

/// Character code of the first table entry.
pub const FIRST_CODE: u32 = 0x1F;
/// Character code of the last table entry (`~`).
pub const LAST_CODE: u32 = 0x7E;
/// Code point the degree glyph is stored under.
pub const DEGREE: char = '\u{1f}';

pub type Glyph = [u16; GLYPH_HEIGHT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Character outside the glyph table
    Unsupported(char),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Unsupported(ch) => write!(f, "no glyph for {:?}", ch),
        }
    }
}

impl std::error::Error for Error {}

/// Look up the glyph for `ch`. `'°'` is accepted as an alias of [`DEGREE`].
pub fn glyph(ch: char) -> Result<&'static Glyph, Error> {
    let code = if ch == '°' { FIRST_CODE } else { ch as u32 };
    if !(FIRST_CODE..=LAST_CODE).contains(&code) {
        return Err(Error::Unsupported(ch));
    }
    Ok(&GLYPHS[(code - FIRST_CODE) as usize])
}

pub fn is_supported(ch: char) -> bool {
    glyph(ch).is_ok()
}

/// Replace characters the table cannot render with `?`.
///
/// Text that does not originate from this crate (host names, interface
/// names, file system paths) goes through here before rasterization.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| if is_supported(ch) { ch } else { '?' })
        .collect()
}

/// Whether the pixel at (`row`, `col`) of `glyph` is set.
#[inline]
pub fn pixel_on(glyph: &Glyph, row: usize, col: usize) -> bool {
    (glyph[row] << col) & 0x8000 != 0
}

/// Pixel width of `text` when drawn with this font.
pub fn text_width(text: &str) -> usize {
    text.chars().count() * GLYPH_WIDTH
}

/// Rasterize `text` into a row-major buffer of `GLYPH_HEIGHT` rows by
/// `text_width(text)` columns. Every pixel is written: set bits take
/// `color`, the rest take `background`.
pub fn rasterize(text: &str, color: Rgb565, background: Rgb565) -> Result<Vec<u16>, Error> {
    let front = RawU16::from(color).into_inner();
    let back = RawU16::from(background).into_inner();
    let glyphs = text.chars().map(glyph).collect::<Result<Vec<_>, _>>()?;
    let width = glyphs.len() * GLYPH_WIDTH;
    let mut pixels = vec![back; width * GLYPH_HEIGHT];

    for (i, glyph) in glyphs.iter().enumerate() {
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if pixel_on(glyph, row, col) {
                    pixels[row * width + i * GLYPH_WIDTH + col] = front;
                }
            }
        }
    }
    Ok(pixels)
}


#[rustfmt::skip]
static GLYPHS: [Glyph; 96] = [
    // °
    [
        0x0000, 0x0E00, 0x1B00, 0x3180, 0x3180, 0x1B00, 0x0E00, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // space
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // !
    [
        0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
        0x0C00, 0x0000, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // "
    [
        0x0000, 0x0000, 0x0CC0, 0x0CC0, 0x0880, 0x0880, 0x0880, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // #
    [
        0x0000, 0x0D80, 0x0D80, 0x0D80, 0x0D80, 0x3FC0, 0x1B00, 0x3FC0,
        0x1B00, 0x1B00, 0x1B00, 0x1B00, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // $
    [
        0x0400, 0x1F00, 0x3180, 0x3180, 0x3800, 0x1E00, 0x0F00, 0x0380,
        0x3180, 0x3180, 0x1F00, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000,
    ],
    // %
    [
        0x0000, 0x1800, 0x2400, 0x2400, 0x18C0, 0x0780, 0x1E00, 0x3180,
        0x0240, 0x0240, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // &
    [
        0x0000, 0x0000, 0x0F00, 0x1800, 0x1800, 0x1800, 0x0C00, 0x1D80,
        0x3700, 0x3300, 0x1D80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // '
    [
        0x0000, 0x0000, 0x0300, 0x0300, 0x0200, 0x0200, 0x0200, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // (
    [
        0x0000, 0x0300, 0x0300, 0x0600, 0x0E00, 0x0C00, 0x0C00, 0x0C00,
        0x0C00, 0x0E00, 0x0600, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000,
    ],
    // )
    [
        0x0000, 0x1800, 0x1800, 0x0C00, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0C00, 0x1C00, 0x1800, 0x0000, 0x0000, 0x0000,
    ],
    // *
    [
        0x0000, 0x0600, 0x0600, 0x3FC0, 0x3FC0, 0x0F00, 0x1F80, 0x1980,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // +
    [
        0x0000, 0x0000, 0x0000, 0x0400, 0x0400, 0x0400, 0x3F80, 0x0400,
        0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // ,
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0600, 0x0400, 0x0C00, 0x0800, 0x0800, 0x0000, 0x0000,
    ],
    // -
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F80, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // .
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // /
    [
        0x00C0, 0x00C0, 0x0180, 0x0180, 0x0300, 0x0300, 0x0600, 0x0C00,
        0x0C00, 0x1800, 0x1800, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000,
    ],
    // 0
    [
        0x0000, 0x0E00, 0x1B00, 0x3180, 0x3180, 0x3180, 0x3180, 0x3180,
        0x3180, 0x1B00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 1
    [
        0x0000, 0x0600, 0x0E00, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 2
    [
        0x0000, 0x0F00, 0x1980, 0x3180, 0x3180, 0x0300, 0x0600, 0x0C00,
        0x1800, 0x3000, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 3
    [
        0x0000, 0x1F00, 0x2180, 0x0180, 0x0300, 0x1F00, 0x0380, 0x0180,
        0x0180, 0x2180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 4
    [
        0x0000, 0x0700, 0x0700, 0x0F00, 0x0B00, 0x1B00, 0x1300, 0x3300,
        0x3F80, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 5
    [
        0x0000, 0x1F80, 0x1800, 0x1800, 0x1800, 0x1F00, 0x0180, 0x0180,
        0x0180, 0x2180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 6
    [
        0x0000, 0x0780, 0x1C00, 0x1800, 0x3000, 0x3700, 0x3980, 0x3180,
        0x3180, 0x1980, 0x0F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 7
    [
        0x0000, 0x7F00, 0x0300, 0x0300, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 8
    [
        0x0000, 0x1F00, 0x3180, 0x3180, 0x3180, 0x1F00, 0x3180, 0x3180,
        0x3180, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // 9
    [
        0x0000, 0x1E00, 0x3300, 0x3180, 0x3180, 0x3380, 0x1D80, 0x0180,
        0x0300, 0x0700, 0x3C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // :
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000,
        0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // ;
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0300, 0x0300, 0x0000, 0x0000,
        0x0000, 0x0600, 0x0400, 0x0800, 0x0800, 0x0000, 0x0000, 0x0000,
    ],
    // <
    [
        0x0000, 0x0000, 0x0300, 0x0600, 0x0C00, 0x1800, 0x3000, 0x1800,
        0x0C00, 0x0600, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // =
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F80, 0x0000, 0x3F80,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // >
    [
        0x0000, 0x0000, 0x1800, 0x0C00, 0x0600, 0x0300, 0x0180, 0x0300,
        0x0600, 0x0C00, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // ?
    [
        0x0000, 0x0000, 0x1F00, 0x3180, 0x3180, 0x0180, 0x0700, 0x0C00,
        0x0C00, 0x0000, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // @
    [
        0x0000, 0x0E00, 0x1100, 0x2100, 0x2100, 0x2700, 0x2900, 0x2900,
        0x2700, 0x2000, 0x1100, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // A
    [
        0x0000, 0x0000, 0x0F00, 0x0F00, 0x0900, 0x1980, 0x1980, 0x1F80,
        0x30C0, 0x30C0, 0x70E0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // B
    [
        0x0000, 0x0000, 0x3F00, 0x3180, 0x3180, 0x3180, 0x3F00, 0x3180,
        0x3180, 0x3180, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // C
    [
        0x0000, 0x0000, 0x1F00, 0x3080, 0x6040, 0x6000, 0x6000, 0x6000,
        0x6040, 0x3080, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // D
    [
        0x0000, 0x0000, 0x3F00, 0x3180, 0x30C0, 0x30C0, 0x30C0, 0x30C0,
        0x30C0, 0x3180, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // E
    [
        0x0000, 0x0000, 0x3F80, 0x3000, 0x3000, 0x3000, 0x3E00, 0x3000,
        0x3000, 0x3000, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // F
    [
        0x0000, 0x0000, 0x3FC0, 0x3000, 0x3000, 0x3000, 0x3E00, 0x3000,
        0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // G
    [
        0x0000, 0x0000, 0x1F00, 0x3080, 0x6000, 0x6000, 0x6000, 0x6780,
        0x6180, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // H
    [
        0x0000, 0x0000, 0x3180, 0x3180, 0x3180, 0x3180, 0x3F80, 0x3180,
        0x3180, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // I
    [
        0x0000, 0x0000, 0x0F00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // J
    [
        0x0000, 0x0000, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x6300,
        0x6300, 0x6300, 0x3E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // K
    [
        0x0000, 0x0000, 0x30C0, 0x3180, 0x3300, 0x3600, 0x3C00, 0x3E00,
        0x3300, 0x3180, 0x30C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // L
    [
        0x0000, 0x0000, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800,
        0x1800, 0x1800, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // M
    [
        0x0000, 0x0000, 0x60C0, 0x60C0, 0x71C0, 0x7BC0, 0x6AC0, 0x6EC0,
        0x64C0, 0x60C0, 0x60C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // N
    [
        0x0000, 0x0000, 0x3180, 0x3180, 0x3980, 0x3D80, 0x3580, 0x3780,
        0x3380, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // O
    [
        0x0000, 0x0000, 0x1F00, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x60C0,
        0x60C0, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // P
    [
        0x0000, 0x0000, 0x3F00, 0x3180, 0x3180, 0x3180, 0x3180, 0x3F00,
        0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // Q
    [
        0x0000, 0x0000, 0x1F00, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x64C0,
        0x66C0, 0x3380, 0x1EC0, 0x0040, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // R
    [
        0x0000, 0x0000, 0x3F00, 0x3180, 0x3180, 0x3180, 0x3E00, 0x3300,
        0x3180, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // S
    [
        0x0000, 0x0000, 0x1F00, 0x3180, 0x3180, 0x3800, 0x1F00, 0x0380,
        0x3180, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // T
    [
        0x0000, 0x0000, 0x7F80, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
        0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // U
    [
        0x0000, 0x0000, 0x3180, 0x3180, 0x3180, 0x3180, 0x3180, 0x3180,
        0x3180, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // V
    [
        0x0000, 0x0000, 0x3180, 0x3180, 0x3180, 0x1B00, 0x1B00, 0x1B00,
        0x0A00, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // W
    [
        0x0000, 0x0000, 0x60C0, 0x60C0, 0x64C0, 0x6EC0, 0x6EC0, 0x2A80,
        0x3B80, 0x3B80, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // X
    [
        0x0000, 0x0000, 0x3180, 0x3180, 0x1B00, 0x0E00, 0x0E00, 0x0E00,
        0x1B00, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // Y
    [
        0x0000, 0x0000, 0x30C0, 0x30C0, 0x1980, 0x0F00, 0x0F00, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // Z
    [
        0x0000, 0x0000, 0x3F80, 0x0180, 0x0300, 0x0600, 0x0400, 0x0C00,
        0x1800, 0x3000, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // [
    [
        0x0000, 0x0780, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0600, 0x0780, 0x0000, 0x0000, 0x0000,
    ],
    // \
    [
        0x3000, 0x3000, 0x1800, 0x1800, 0x0C00, 0x0C00, 0x0600, 0x0300,
        0x0300, 0x0180, 0x0180, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000,
    ],
    // ]
    [
        0x0000, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0600, 0x1E00, 0x0000, 0x0000, 0x0000,
    ],
    // ^
    [
        0x0400, 0x0A00, 0x0A00, 0x1100, 0x2080, 0x2080, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // _
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFE0,
    ],
    // `
    [
        0x0800, 0x0400, 0x0200, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // a
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x0180, 0x0180, 0x1F80,
        0x3180, 0x3380, 0x1D80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // b
    [
        0x0000, 0x3000, 0x3000, 0x3000, 0x3700, 0x3980, 0x30C0, 0x30C0,
        0x30C0, 0x3980, 0x3700, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // c
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3180, 0x6080, 0x6000,
        0x6080, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // d
    [
        0x0000, 0x0180, 0x0180, 0x0180, 0x1D80, 0x3380, 0x6180, 0x6180,
        0x6180, 0x3380, 0x1D80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // e
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3180, 0x60C0, 0x7FC0,
        0x6000, 0x30C0, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // f
    [
        0x0000, 0x0780, 0x0C00, 0x0C00, 0x0C00, 0x1F80, 0x0C00, 0x0C00,
        0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // g
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1D80, 0x3380, 0x6180, 0x6180,
        0x6180, 0x3380, 0x1D80, 0x0180, 0x0180, 0x1F00, 0x0000, 0x0000,
    ],
    // h
    [
        0x0000, 0x3000, 0x3000, 0x3000, 0x3700, 0x3980, 0x3180, 0x3180,
        0x3180, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // i
    [
        0x0000, 0x0600, 0x0600, 0x0000, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // j
    [
        0x0000, 0x0300, 0x0300, 0x0000, 0x0300, 0x0300, 0x0300, 0x0300,
        0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x1E00, 0x0000, 0x0000,
    ],
    // k
    [
        0x0000, 0x3000, 0x3000, 0x3000, 0x3700, 0x3600, 0x3C00, 0x3C00,
        0x3600, 0x3300, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // l
    [
        0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // m
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3F80, 0x36C0, 0x36C0, 0x36C0,
        0x36C0, 0x36C0, 0x36C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // n
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3700, 0x3980, 0x3180, 0x3180,
        0x3180, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // o
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3180, 0x60C0, 0x60C0,
        0x60C0, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // p
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3700, 0x3980, 0x30C0, 0x30C0,
        0x30C0, 0x3980, 0x3700, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000,
    ],
    // q
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1D80, 0x3380, 0x6180, 0x6180,
        0x6180, 0x3380, 0x1D80, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000,
    ],
    // r
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1B80, 0x1CC0, 0x1800, 0x1800,
        0x1800, 0x1800, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // s
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3180, 0x3C00, 0x1F00,
        0x0380, 0x3180, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // t
    [
        0x0000, 0x0600, 0x0600, 0x0600, 0x1F80, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0380, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // u
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3180, 0x3180, 0x3180, 0x3180,
        0x3180, 0x3380, 0x1D80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // v
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3180, 0x3180, 0x3180, 0x1B00,
        0x1B00, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // w
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x60C0, 0x60C0, 0x64C0, 0x6EC0,
        0x3B80, 0x3B80, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // x
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3180, 0x1B00, 0x0E00, 0x0E00,
        0x0E00, 0x1B00, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // y
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x30C0, 0x30C0, 0x1980, 0x1980,
        0x0B00, 0x0F00, 0x0600, 0x0600, 0x0C00, 0x1800, 0x0000, 0x0000,
    ],
    // z
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x3F80, 0x0180, 0x0300, 0x0E00,
        0x1800, 0x3000, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // {
    [
        0x0000, 0x0600, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x1800,
        0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0600, 0x0000, 0x0000, 0x0000,
    ],
    // |
    [
        0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
        0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000,
    ],
    // }
    [
        0x0000, 0x0C00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0300,
        0x0600, 0x0600, 0x0600, 0x0600, 0x0C00, 0x0000, 0x0000, 0x0000,
    ],
    // ~
    [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x2480, 0x0300,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ],
];
