//! Dithered glyph rasterizer.
//!
//! Glyph colours are given as bytes holding two palette indices: the low
//! nibble is colour A, the high nibble colour B. Each output sub-pixel picks
//! A or B on a checkerboard, so a pair of different colours reads as an
//! in-between shade and a pair of equal colours is a flat fill.

use crate::charset::{Glyph, GlyphStore};
use crate::framebuffer::Framebuffer;
use crate::palette::Palette;

/// Glyph width and height in source pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Two palette indices packed in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherPair {
    /// Low nibble, used on even checkerboard squares.
    pub a: u8,
    /// High nibble, used on odd checkerboard squares.
    pub b: u8,
}

impl DitherPair {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            a: byte & 0x0F,
            b: byte >> 4,
        }
    }

    /// A pair that renders as one flat colour.
    #[must_use]
    pub const fn flat(index: u8) -> Self {
        Self {
            a: index & 0x0F,
            b: index & 0x0F,
        }
    }

    #[must_use]
    pub const fn to_byte(self) -> u8 {
        (self.b << 4) | (self.a & 0x0F)
    }

    #[must_use]
    pub const fn is_flat(self) -> bool {
        self.a == self.b
    }

    fn bgra(self, palette: &Palette) -> [[u8; 4]; 2] {
        [palette.bgra(self.a), palette.bgra(self.b)]
    }
}

/// Checkerboard phase of a glyph-local sub-pixel: `false` selects colour A,
/// `true` colour B.
///
/// `sub_row` and `sub_col` count output pixels from the glyph's top-left
/// corner, after scaling.
#[must_use]
pub const fn dither_phase(sub_row: u32, sub_col: u32) -> bool {
    (sub_row + sub_col) & 1 == 1
}

/// Draw screen code `symbol` from the character ROM.
pub fn draw_glyph(
    fb: &mut Framebuffer,
    palette: &Palette,
    glyphs: &GlyphStore,
    x0: i32,
    y0: i32,
    symbol: u8,
    scale: u32,
    bg: u8,
    fg: u8,
) {
    let glyph = glyphs.glyph(symbol);
    draw_glyph_bitmap(fb, palette, &glyph, x0, y0, scale, bg, fg);
}

/// Draw an 8x8 bitmap at `(x0, y0)`, each source pixel a `scale x scale`
/// block. Set bits use the `fg` pair, clear bits the `bg` pair.
pub fn draw_glyph_bitmap(
    fb: &mut Framebuffer,
    palette: &Palette,
    glyph: &Glyph,
    x0: i32,
    y0: i32,
    scale: u32,
    bg: u8,
    fg: u8,
) {
    let bg = DitherPair::from_byte(bg).bgra(palette);
    let fg = DitherPair::from_byte(fg).bgra(palette);
    let scale = i64::from(scale);
    let (x0, y0) = (i64::from(x0), i64::from(y0));

    for (row, &bits) in (0i64..).zip(glyph.iter()) {
        let rows = visible(y0 + row * scale, scale, fb.height());
        for py in rows {
            let sub_row = py - y0;
            let mut pixels = bits;
            for column in 0..i64::from(GLYPH_SIZE) {
                let pair = if pixels & 0x80 != 0 { &fg } else { &bg };
                for px in visible(x0 + column * scale, scale, fb.width()) {
                    let sub_col = px - x0;
                    let phase = dither_phase((sub_row & 1) as u32, (sub_col & 1) as u32);
                    fb.put(px as i32, py as i32, pair[usize::from(phase)]);
                }
                pixels <<= 1;
            }
        }
    }
}

/// Part of the span `[start, start + len)` inside `[0, limit)`.
fn visible(start: i64, len: i64, limit: u32) -> std::ops::Range<i64> {
    start.max(0)..(start + len).min(i64::from(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::default()
    }

    /// Straight port of the two-toggle loop the checkerboard was derived
    /// from: one flip per horizontal sub-pixel, one per vertical sub-row,
    /// whether or not the pixel lands in the buffer.
    fn reference_draw(
        fb: &mut Framebuffer,
        palette: &Palette,
        glyph: &Glyph,
        x0: i32,
        y0: i32,
        scale: u32,
        bg: u8,
        fg: u8,
    ) {
        let bg = [palette.bgra(bg & 0x0F), palette.bgra(bg >> 4)];
        let fg = [palette.bgra(fg & 0x0F), palette.bgra(fg >> 4)];
        let mut toggler = 0usize;
        for row in 0..8u32 {
            let pixels = glyph[row as usize];
            for y in 0..scale {
                let yy = (row * scale + y) as i32 + y0;
                if yy >= 0 && yy < fb.height() as i32 {
                    let mut pixel = pixels;
                    for column in 0..8u32 {
                        let pair = if pixel & 0x80 != 0 { &fg } else { &bg };
                        for x in 0..scale {
                            let xx = (column * scale + x) as i32 + x0;
                            fb.put(xx, yy, pair[toggler]);
                            toggler ^= 1;
                        }
                        pixel = (pixel & 0x7F) << 1;
                    }
                }
                toggler ^= 1;
            }
        }
    }

    const GLYPH_A: Glyph = [0x18, 0x3C, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00];

    #[test]
    fn pair_from_byte() {
        let pair = DitherPair::from_byte(0x65);
        assert_eq!(pair, DitherPair { a: 5, b: 6 });
        assert_eq!(pair.to_byte(), 0x65);
        assert!(!pair.is_flat());
        assert!(DitherPair::flat(0x1C).is_flat());
        assert_eq!(DitherPair::flat(0x1C).to_byte(), 0xCC);
    }

    #[test]
    fn checkerboard_phase() {
        assert!(!dither_phase(0, 0));
        assert!(dither_phase(0, 1));
        assert!(dither_phase(1, 0));
        assert!(!dither_phase(1, 1));
        assert!(!dither_phase(7, 9));
    }

    #[test]
    fn matches_toggle_loop() {
        let palette = palette();
        for scale in 1..=4 {
            for (x0, y0) in [(0, 0), (3, 5), (-5, -3), (20, 18), (-1, 30)] {
                let mut ours = Framebuffer::new(40, 36);
                let mut reference = Framebuffer::new(40, 36);
                draw_glyph_bitmap(&mut ours, &palette, &GLYPH_A, x0, y0, scale, 0x42, 0x7F);
                reference_draw(&mut reference, &palette, &GLYPH_A, x0, y0, scale, 0x42, 0x7F);
                assert!(
                    ours.as_bytes() == reference.as_bytes(),
                    "scale {scale} origin ({x0}, {y0}) differs"
                );
            }
        }
    }

    #[test]
    fn bits_select_foreground() {
        let palette = palette();
        let mut fb = Framebuffer::new(8, 8);
        let glyph = [0x80, 0, 0, 0, 0, 0, 0, 0];
        draw_glyph_bitmap(&mut fb, &palette, &glyph, 0, 0, 1, 0x00, 0x11);
        assert_eq!(fb.pixel(0, 0), Some(palette.bgra(1)));
        assert_eq!(fb.pixel(1, 0), Some(palette.bgra(0)));
        assert_eq!(fb.pixel(0, 1), Some(palette.bgra(0)));
    }

    #[test]
    fn scale_replicates_columns() {
        let palette = palette();
        let mut fb = Framebuffer::new(16, 16);
        let glyph = [0xAA; 8];
        draw_glyph_bitmap(&mut fb, &palette, &glyph, 0, 0, 2, 0x00, 0x11);
        for y in 0..16 {
            for x in 0..16 {
                let set = (x / 2) % 2 == 0;
                let expect = if set { palette.bgra(1) } else { palette.bgra(0) };
                assert_eq!(fb.pixel(x, y), Some(expect), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn equal_nibbles_are_flat() {
        let palette = palette();
        for scale in 1..=3 {
            let size = 8 * scale;
            let mut fb = Framebuffer::new(size, size);
            draw_glyph_bitmap(&mut fb, &palette, &[0; 8], 0, 0, scale, 0x66, 0x11);
            let blue = palette.bgra(6);
            for y in 0..size as i32 {
                for x in 0..size as i32 {
                    assert_eq!(fb.pixel(x, y), Some(blue));
                }
            }
        }
    }

    #[test]
    fn different_nibbles_alternate() {
        let palette = palette();
        let mut fb = Framebuffer::new(16, 16);
        draw_glyph_bitmap(&mut fb, &palette, &[0; 8], 0, 0, 2, 0x42, 0x00);
        let a = palette.bgra(2);
        let b = palette.bgra(4);
        assert_eq!(fb.pixel(0, 0), Some(a));
        assert_eq!(fb.pixel(1, 0), Some(b));
        assert_eq!(fb.pixel(0, 1), Some(b));
        assert_eq!(fb.pixel(1, 1), Some(a));
        assert_eq!(fb.pixel(15, 15), Some(a));
    }

    #[test]
    fn clipped_glyph_leaves_rest_untouched() {
        let palette = palette();
        let mut fb = Framebuffer::new(8, 8);
        let marker = [1, 2, 3, 4];
        fb.fill_block(0, 0, 8, 8, marker);

        draw_glyph_bitmap(&mut fb, &palette, &[0xFF; 8], -4, -4, 1, 0x00, 0x11);
        for y in 0..8 {
            for x in 0..8 {
                let expect = if x < 4 && y < 4 { palette.bgra(1) } else { marker };
                assert_eq!(fb.pixel(x, y), Some(expect), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn huge_scale_is_clipped() {
        let palette = palette();
        let mut fb = Framebuffer::new(8, 8);
        let glyph = [0x80, 0, 0, 0, 0, 0, 0, 0];
        draw_glyph_bitmap(&mut fb, &palette, &glyph, 0, 0, 1 << 30, 0x00, 0x11);
        assert!(fb.as_bytes().chunks_exact(4).all(|px| px == palette.bgra(1)));

        draw_glyph_bitmap(&mut fb, &palette, &glyph, 0, 0, u32::MAX, 0x00, 0x42);
        assert_eq!(fb.pixel(0, 0), Some(palette.bgra(2)));
        assert_eq!(fb.pixel(1, 0), Some(palette.bgra(4)));
        assert_eq!(fb.pixel(7, 7), Some(palette.bgra(2)));
    }

    #[test]
    fn huge_scale_keeps_phase_past_the_origin() {
        let palette = palette();
        let mut fb = Framebuffer::new(4, 4);
        // Glyph starts one pixel up and left: sub-pixel (1, 1) lands on (0, 0).
        draw_glyph_bitmap(&mut fb, &palette, &[0; 8], -1, -1, 1 << 29, 0x42, 0x00);
        assert_eq!(fb.pixel(0, 0), Some(palette.bgra(2)));
        assert_eq!(fb.pixel(1, 0), Some(palette.bgra(4)));
    }

    #[test]
    fn glyph_from_store() {
        let mut rom = vec![0; 4096];
        rom[2048 + 8 * 3] = 0xFF;
        let store = GlyphStore::from_bytes(rom).expect("valid");
        let palette = palette();
        let mut fb = Framebuffer::new(8, 8);
        draw_glyph(&mut fb, &palette, &store, 0, 0, 3, 1, 0x00, 0x77);
        assert_eq!(fb.pixel(7, 0), Some(palette.bgra(7)));
        assert_eq!(fb.pixel(7, 1), Some(palette.bgra(0)));
    }
}
