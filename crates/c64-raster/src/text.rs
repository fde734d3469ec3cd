//! Text layout on top of the glyph rasterizer.

use crate::charset::{GlyphStore, screen_code};
use crate::framebuffer::Framebuffer;
use crate::glyph::{GLYPH_SIZE, draw_glyph};
use crate::palette::Palette;

/// How a string is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Integer magnification.
    pub scale: u32,
    /// Extra source pixels between characters (and lines).
    pub spacing: u32,
    /// Use the reverse-video glyphs.
    pub reverse: bool,
    /// Background dither pair.
    pub bg: u8,
    /// Foreground dither pair.
    pub fg: u8,
}

impl TextStyle {
    #[must_use]
    pub const fn new(scale: u32, bg: u8, fg: u8) -> Self {
        Self {
            scale,
            spacing: 0,
            reverse: false,
            bg,
            fg,
        }
    }

    /// Output pixels from one character cell to the next.
    #[must_use]
    pub const fn advance(&self) -> u32 {
        self.scale.saturating_mul(GLYPH_SIZE.saturating_add(self.spacing))
    }

    /// Pixel origin of a `(line, col)` character cell.
    #[must_use]
    pub fn cell_origin(&self, line: u32, col: u32) -> (i32, i32) {
        let step = i64::from(self.advance());
        let clamp = |n: u32| i32::try_from(step * i64::from(n)).unwrap_or(i32::MAX);
        (clamp(col), clamp(line))
    }
}

/// Draw `text` (ASCII bytes) starting at `(x0, y0)`.
pub fn print_string(
    fb: &mut Framebuffer,
    palette: &Palette,
    glyphs: &GlyphStore,
    text: &str,
    x0: i32,
    y0: i32,
    style: &TextStyle,
) {
    let advance = i32::try_from(style.advance()).unwrap_or(i32::MAX);
    let mut x = x0;
    for byte in text.bytes() {
        let symbol = screen_code(byte, style.reverse);
        draw_glyph(fb, palette, glyphs, x, y0, symbol, style.scale, style.bg, style.fg);
        x = x.saturating_add(advance);
    }
}

/// Draw `text` at a character-grid position.
pub fn print_string_line_col(
    fb: &mut Framebuffer,
    palette: &Palette,
    glyphs: &GlyphStore,
    text: &str,
    line: u32,
    col: u32,
    style: &TextStyle,
) {
    let (x0, y0) = style.cell_origin(line, col);
    print_string(fb, palette, glyphs, text, x0, y0, style);
}
