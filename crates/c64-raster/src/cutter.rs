//! Sprite cutting: one sprite as a standalone indexed bitmap.
//!
//! The cut is square, `24 * scale` on each side: `scale` blank rows on top,
//! the 21 sprite rows, then `2 * scale` blank rows. Pixel values are the
//! decoded bit (hi-res, 0-1) or field (multicolour, 0-3); value 0 is
//! treated as transparent by the outline pass and by exporters.

use crate::snapshot::SpriteData;
use crate::sprite::{SPRITE_HEIGHT, SPRITE_WIDTH, SpriteMode, decode_row};

/// Blank sprite rows above the sprite.
const PAD_TOP: usize = 1;

/// Blank sprite rows below the sprite.
const PAD_BOTTOM: usize = 2;

/// Quarter-turn rotations of a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Cw90,
    /// 90 degrees counter-clockwise.
    Ccw90,
    /// 180 degrees.
    Half,
}

impl Rotation {
    /// Parse a rotation in degrees (`90`, `-90`, `270`, `180`, `-180`).
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            90 => Some(Self::Cw90),
            270 => Some(Self::Ccw90),
            180 => Some(Self::Half),
            _ => None,
        }
    }
}

/// Indexed square bitmap of one sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteCut {
    size: usize,
    pixels: Vec<u8>,
}

impl SpriteCut {
    /// Decode `data` at `scale` (at least 1).
    #[must_use]
    pub fn cut(data: &SpriteData, mode: SpriteMode, scale: usize) -> Self {
        let scale = scale.max(1);
        let size = SPRITE_WIDTH * scale;
        let mut pixels = vec![0; size * size];
        let block_width = mode.pixel_width() as usize * scale;

        for row in 0..SPRITE_HEIGHT {
            let values = decode_row(data, row, mode);
            for dy in 0..scale {
                let line = ((PAD_TOP + row) * scale + dy) * size;
                for (column, &value) in values.iter().enumerate() {
                    let start = line + column * block_width;
                    pixels[start..start + block_width].fill(value);
                }
            }
        }
        debug_assert_eq!((PAD_TOP + SPRITE_HEIGHT + PAD_BOTTOM) * scale, size);

        Self { size, pixels }
    }

    /// Width and height in pixels.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.size && y < self.size {
            Some(self.pixels[y * self.size + x])
        } else {
            None
        }
    }

    /// Rows of pixel values, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.size)
    }

    /// Replace every set pixel that touches a transparent pixel (or the
    /// edge) in any of the 8 directions with `index`.
    pub fn outline(&mut self, index: u8) {
        let source = self.pixels.clone();
        let size = self.size as isize;
        let transparent = |x: isize, y: isize| {
            x < 0 || y < 0 || x >= size || y >= size || source[(y * size + x) as usize] == 0
        };

        for y in 0..size {
            for x in 0..size {
                if source[(y * size + x) as usize] == 0 {
                    continue;
                }
                let border = (-1..=1)
                    .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
                    .any(|(dx, dy)| transparent(x + dx, y + dy));
                if border {
                    self.pixels[(y * size + x) as usize] = index;
                }
            }
        }
    }

    /// Flip left-right.
    pub fn mirror_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.size) {
            row.reverse();
        }
    }

    /// Flip top-bottom.
    pub fn mirror_vertical(&mut self) {
        let size = self.size;
        for y in 0..size / 2 {
            let (top, bottom) = self.pixels.split_at_mut((size - 1 - y) * size);
            top[y * size..(y + 1) * size].swap_with_slice(&mut bottom[..size]);
        }
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        let size = self.size;
        match rotation {
            Rotation::Half => {
                self.mirror_horizontal();
                self.mirror_vertical();
            }
            Rotation::Cw90 | Rotation::Ccw90 => {
                let mut rotated = vec![0; self.pixels.len()];
                for y in 0..size {
                    for x in 0..size {
                        let (nx, ny) = if rotation == Rotation::Cw90 {
                            (size - 1 - y, x)
                        } else {
                            (y, size - 1 - x)
                        };
                        rotated[ny * size + nx] = self.pixels[y * size + x];
                    }
                }
                self.pixels = rotated;
            }
        }
    }

    /// Map each pixel value `v` to `table[v]`; values past the table stay.
    pub fn remap(&mut self, table: &[u8]) {
        for px in &mut self.pixels {
            if let Some(&mapped) = table.get(usize::from(*px)) {
                *px = mapped;
            }
        }
    }
}
