//! Sprite browser screen.
//!
//! Layout (640 x 512):
//!
//! - Line 0: `# NNN` sprite number and `@ $HHHH` its byte address, at 4x.
//! - Line 1: `(o: NNN)` base offset, at 4x.
//! - An 8 x 8 grid of sprites at 2x starting at (32, 80), 52 pixels apart
//!   horizontally and 48 vertically, each grid row labelled at 1x with
//!   the number of its first sprite.
//!
//! Every frame is drawn from scratch: clear, labels, grid.

use log::trace;

use crate::charset::GlyphStore;
use crate::framebuffer::Framebuffer;
use crate::palette::Palette;
use crate::session::Session;
use crate::snapshot::{SPRITE_INDEX_MASK, SPRITE_RECORD_SIZE, Snapshot, sprite_address};
use crate::sprite::draw_sprite_mode;
use crate::text::{TextStyle, print_string_line_col};

/// Browser framebuffer width.
pub const FB_WIDTH: u32 = 640;

/// Browser framebuffer height.
pub const FB_HEIGHT: u32 = 512;

/// Sprites per grid row and column.
pub const GRID_SIZE: u16 = 8;

/// Magnification of grid sprites.
pub const GRID_SCALE: u32 = 2;

const GRID_X: i32 = 32;
const GRID_Y: i32 = 80;
const GRID_DX: i32 = 52;
const GRID_DY: i32 = 48;

/// Header label magnification.
const HEADER_SCALE: u32 = 4;

const NUMBER_STYLE: TextStyle = TextStyle::new(HEADER_SCALE, 0x00, 0x65);
const ADDRESS_STYLE: TextStyle = TextStyle::new(HEADER_SCALE, 0x00, 0x27);
const OFFSET_STYLE: TextStyle = TextStyle::new(HEADER_SCALE, 0x42, 0x7F);
const ROW_LABEL_STYLE: TextStyle = TextStyle::new(1, 0x00, 0xA8);

/// First text line of the grid row labels (1x cells), and lines per row.
const ROW_LABEL_LINE: u32 = 10;
const ROW_LABEL_STRIDE: u32 = 6;

/// Loaded assets the browser draws from.
pub struct Scene {
    palette: Palette,
    glyphs: GlyphStore,
    snapshot: Snapshot,
}

impl Scene {
    #[must_use]
    pub fn new(palette: Palette, glyphs: GlyphStore, snapshot: Snapshot) -> Self {
        Self {
            palette,
            glyphs,
            snapshot,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphStore {
        &self.glyphs
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// A framebuffer sized for the browser layout.
    #[must_use]
    pub fn framebuffer() -> Framebuffer {
        Framebuffer::new(FB_WIDTH, FB_HEIGHT)
    }

    /// Redraw the whole screen for `session`.
    pub fn compose(&self, fb: &mut Framebuffer, session: &Session) {
        fb.clear();
        self.draw_header(fb, session);

        let colours = session.colours();
        for row in 0..GRID_SIZE {
            let label = format!("#{:03}", cell_index(session, row, 0));
            let line = ROW_LABEL_LINE + u32::from(row) * ROW_LABEL_STRIDE;
            self.print(fb, &label, line, 0, &ROW_LABEL_STYLE);

            for col in 0..GRID_SIZE {
                let address = self.cell_address(session, row, col);
                let data = self.snapshot.sprite_at(address as i64);
                let (x, y) = cell_position(row, col);
                draw_sprite_mode(
                    fb,
                    &self.palette,
                    &data,
                    session.mode,
                    x,
                    y,
                    GRID_SCALE,
                    colours,
                );
            }
        }
    }

    /// Clamped snapshot address of grid cell `(row, col)`.
    #[must_use]
    pub fn cell_address(&self, session: &Session, row: u16, col: u16) -> usize {
        let index = cell_index(session, row, col);
        let raw = sprite_address(session.offset, index);
        let address = self.snapshot.clamp_address(raw);
        if i64::try_from(address).ok() != Some(raw) {
            trace!("sprite {index}: address {raw} clamped to {address}");
        }
        address
    }

    fn draw_header(&self, fb: &mut Framebuffer, session: &Session) {
        let index = session.sprite_index & SPRITE_INDEX_MASK;
        let number = format!("# {index:03}");
        let address = format!("@ ${:04x}", usize::from(index) * SPRITE_RECORD_SIZE);
        let offset = format!("(o: {:03})", session.offset);

        self.print(fb, &number, 0, 0, &NUMBER_STYLE);
        self.print(fb, &address, 0, 13, &ADDRESS_STYLE);
        self.print(fb, &offset, 1, 0, &OFFSET_STYLE);
    }

    fn print(&self, fb: &mut Framebuffer, text: &str, line: u32, col: u32, style: &TextStyle) {
        print_string_line_col(fb, &self.palette, &self.glyphs, text, line, col, style);
    }
}

/// Sprite index shown in grid cell `(row, col)`, wrapped to 10 bits.
#[must_use]
pub fn cell_index(session: &Session, row: u16, col: u16) -> u16 {
    session
        .sprite_index
        .wrapping_add(row * GRID_SIZE + col)
        & SPRITE_INDEX_MASK
}

/// Top-left pixel of grid cell `(row, col)`.
#[must_use]
pub fn cell_position(row: u16, col: u16) -> (i32, i32) {
    (
        GRID_X + GRID_DX * i32::from(col),
        GRID_Y + GRID_DY * i32::from(row),
    )
}
