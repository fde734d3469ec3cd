//! Character ROM access and text encoding.
//!
//! The character ROM is 4,096 bytes: two 2,048-byte sets of 256 glyphs. The
//! browser only uses the second set (lower case / upper case), starting at
//! offset 2,048. Each glyph is 8 bytes, one per row, MSB = leftmost pixel.
//! Screen codes 128-255 are the reversed glyphs, already inverted in the
//! ROM data.

use crate::error::ImageSizeError;

/// Character ROM size in bytes.
pub const CHARSET_SIZE: usize = 4096;

/// Offset of the glyph set used for text.
const GLYPH_SET_OFFSET: usize = 2048;

/// Bytes per glyph (8 rows of 8 pixels).
pub const GLYPH_BYTES: usize = 8;

/// Added to a screen code to select its reverse-video glyph.
pub const REVERSE_OFFSET: u8 = 128;

/// One 8x8 glyph, one byte per row.
pub type Glyph = [u8; GLYPH_BYTES];

/// Read-only character ROM.
pub struct GlyphStore {
    data: Vec<u8>,
}

impl GlyphStore {
    /// Wrap a character ROM image.
    ///
    /// Images shorter than [`CHARSET_SIZE`] are rejected; bytes past it are
    /// dropped.
    pub fn from_bytes(mut data: Vec<u8>) -> Result<Self, ImageSizeError> {
        if data.len() < CHARSET_SIZE {
            return Err(ImageSizeError {
                what: "character ROM",
                expected: CHARSET_SIZE,
                actual: data.len(),
            });
        }
        data.truncate(CHARSET_SIZE);
        Ok(Self { data })
    }

    /// Glyph bitmap for a screen code.
    #[must_use]
    pub fn glyph(&self, symbol: u8) -> Glyph {
        let start = GLYPH_SET_OFFSET + usize::from(symbol) * GLYPH_BYTES;
        let mut glyph = [0; GLYPH_BYTES];
        glyph.copy_from_slice(&self.data[start..start + GLYPH_BYTES]);
        glyph
    }

    /// Raw ROM bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Map an ASCII byte to a screen code for the text glyph set.
///
/// `@` is screen code 0; `A`-`_` and the space/punctuation/digit block keep
/// their values; lower case folds onto the letters; anything with the top
/// bit set loses it.
#[must_use]
pub const fn ascii_to_screen_code(ascii: u8) -> u8 {
    match ascii {
        0x40 => 0,
        0x41..=0x5F | 0x20..=0x3F => ascii,
        0x60..=0x7F => ascii - 0x60,
        _ => ascii & 0x7F,
    }
}

/// Screen code for `ascii`, optionally in reverse video.
#[must_use]
pub const fn screen_code(ascii: u8, reverse: bool) -> u8 {
    let code = ascii_to_screen_code(ascii);
    if reverse {
        code.wrapping_add(REVERSE_OFFSET)
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_rom() -> GlyphStore {
        // Each glyph row holds its own screen code so lookups are checkable.
        let mut data = vec![0xEE; GLYPH_SET_OFFSET];
        for code in 0..=255u8 {
            data.extend_from_slice(&[code; GLYPH_BYTES]);
        }
        GlyphStore::from_bytes(data).expect("valid ROM")
    }

    #[test]
    fn rejects_short_rom() {
        let err = GlyphStore::from_bytes(vec![0; 4095]).err().expect("too short");
        assert_eq!(err.expected, CHARSET_SIZE);
        assert_eq!(err.actual, 4095);
    }

    #[test]
    fn truncates_long_rom() {
        let store = GlyphStore::from_bytes(vec![0; 8192]).expect("valid");
        assert_eq!(store.data().len(), CHARSET_SIZE);
    }

    #[test]
    fn glyph_lookup_uses_second_set() {
        let store = numbered_rom();
        assert_eq!(store.glyph(0), [0; 8]);
        assert_eq!(store.glyph(1), [1; 8]);
        assert_eq!(store.glyph(0xFF), [0xFF; 8]);
    }

    #[test]
    fn ascii_mapping() {
        assert_eq!(ascii_to_screen_code(b'@'), 0);
        assert_eq!(ascii_to_screen_code(b'A'), 0x41);
        assert_eq!(ascii_to_screen_code(b'_'), 0x5F);
        assert_eq!(ascii_to_screen_code(b' '), 0x20);
        assert_eq!(ascii_to_screen_code(b'0'), 0x30);
        assert_eq!(ascii_to_screen_code(b'?'), 0x3F);
        assert_eq!(ascii_to_screen_code(b'`'), 0);
        assert_eq!(ascii_to_screen_code(b'a'), 1);
        assert_eq!(ascii_to_screen_code(b'f'), 6);
        assert_eq!(ascii_to_screen_code(0x7F), 0x1F);
        assert_eq!(ascii_to_screen_code(0xC1), 0x41);
        assert_eq!(ascii_to_screen_code(0x1F), 0x1F);
    }

    #[test]
    fn reverse_adds_128() {
        assert_eq!(screen_code(b'A', true), 0xC1);
        assert_eq!(screen_code(b'a', true), 0x81);
        assert_eq!(screen_code(b'a', false), 0x01);
    }
}
