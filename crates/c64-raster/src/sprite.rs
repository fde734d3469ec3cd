//! Sprite decoding and rasterizing.
//!
//! A sprite is 21 rows of 3 bytes. Each row is read as a 24-bit value,
//! MSB = leftmost pixel.
//!
//! - Hi-res: 24 one-bit pixels per row. Set = foreground, clear = background.
//! - Multicolour: 12 two-bit fields per row, each twice as wide as a hi-res
//!   pixel. `00` = background, `01`/`10`/`11` = foreground 0/1/2.
//!
//! Both rasterizers draw every pixel, background included, as a solid
//! `scale`-sized block clipped against the framebuffer.

use crate::framebuffer::Framebuffer;
use crate::palette::Palette;
use crate::snapshot::SpriteData;

/// Sprite width in hi-res pixels.
pub const SPRITE_WIDTH: usize = 24;

/// Sprite height in rows.
pub const SPRITE_HEIGHT: usize = 21;

/// Multicolour fields per row.
pub const MC_SPRITE_WIDTH: usize = 12;

/// How a sprite's bits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpriteMode {
    HiRes,
    Multicolour,
}

impl SpriteMode {
    /// Output pixels per decoded field at scale 1.
    #[must_use]
    pub const fn pixel_width(self) -> u32 {
        match self {
            Self::HiRes => 1,
            Self::Multicolour => 2,
        }
    }
}

/// Row `row` as a 24-bit value.
#[must_use]
pub fn row_bits(data: &SpriteData, row: usize) -> u32 {
    let base = row * 3;
    (u32::from(data[base]) << 16) | (u32::from(data[base + 1]) << 8) | u32::from(data[base + 2])
}

/// Split a row into 24 one-bit pixels, left to right.
#[must_use]
pub fn hires_pixels(mut bits: u32) -> [u8; SPRITE_WIDTH] {
    let mut pixels = [0; SPRITE_WIDTH];
    for px in &mut pixels {
        *px = u8::from(bits & 0x80_0000 != 0);
        bits = (bits & 0x7F_FFFF) << 1;
    }
    pixels
}

/// Split a row into 12 two-bit fields, left to right.
#[must_use]
pub fn multicolour_pixels(mut bits: u32) -> [u8; MC_SPRITE_WIDTH] {
    let mut fields = [0; MC_SPRITE_WIDTH];
    for field in &mut fields {
        *field = ((bits & 0xC0_0000) >> 22) as u8;
        bits = (bits & 0x3F_FFFF) << 2;
    }
    fields
}

/// Decode one row in the given mode.
#[must_use]
pub fn decode_row(data: &SpriteData, row: usize, mode: SpriteMode) -> Vec<u8> {
    let bits = row_bits(data, row);
    match mode {
        SpriteMode::HiRes => hires_pixels(bits).to_vec(),
        SpriteMode::Multicolour => multicolour_pixels(bits).to_vec(),
    }
}

/// Origin of block `n` of size `step` counted from `origin`, or `None` once
/// it falls outside the `i32` coordinate space.
fn block_origin(origin: i32, n: usize, step: u32) -> Option<i32> {
    i32::try_from(i64::from(origin) + n as i64 * i64::from(step)).ok()
}

/// Draw a hi-res sprite at `(x0, y0)`.
pub fn draw_sprite(
    fb: &mut Framebuffer,
    palette: &Palette,
    data: &SpriteData,
    x0: i32,
    y0: i32,
    scale: u32,
    bg: u8,
    fg: u8,
) {
    debug_assert!(bg < 16 && fg < 16, "colour index out of range");
    let colours = [palette.bgra(bg), palette.bgra(fg)];

    for row in 0..SPRITE_HEIGHT {
        let Some(y) = block_origin(y0, row, scale) else {
            break;
        };
        for (column, &px) in hires_pixels(row_bits(data, row)).iter().enumerate() {
            let Some(x) = block_origin(x0, column, scale) else {
                break;
            };
            fb.fill_block(x, y, scale, scale, colours[usize::from(px)]);
        }
    }
}

/// Draw a multicolour sprite at `(x0, y0)`.
///
/// `colours` holds the palette index for each field value:
/// `[bg, fg0, fg1, fg2]`.
pub fn draw_mc_sprite(
    fb: &mut Framebuffer,
    palette: &Palette,
    data: &SpriteData,
    x0: i32,
    y0: i32,
    scale: u32,
    colours: [u8; 4],
) {
    debug_assert!(colours.iter().all(|&c| c < 16), "colour index out of range");
    let colours = colours.map(|c| palette.bgra(c));
    let width = scale.saturating_mul(2);

    for row in 0..SPRITE_HEIGHT {
        let Some(y) = block_origin(y0, row, scale) else {
            break;
        };
        for (column, &field) in multicolour_pixels(row_bits(data, row)).iter().enumerate() {
            let Some(x) = block_origin(x0, 2 * column, scale) else {
                break;
            };
            fb.fill_block(x, y, width, scale, colours[usize::from(field)]);
        }
    }
}

/// Draw a sprite in either mode. Hi-res uses `colours[0]` and `colours[1]`.
pub fn draw_sprite_mode(
    fb: &mut Framebuffer,
    palette: &Palette,
    data: &SpriteData,
    mode: SpriteMode,
    x0: i32,
    y0: i32,
    scale: u32,
    colours: [u8; 4],
) {
    match mode {
        SpriteMode::HiRes => {
            draw_sprite(fb, palette, data, x0, y0, scale, colours[0], colours[1]);
        }
        SpriteMode::Multicolour => draw_mc_sprite(fb, palette, data, x0, y0, scale, colours),
    }
}
