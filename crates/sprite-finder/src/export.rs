//! Cut sprites as C arrays of `0xRRGGBBAA` words.
//!
//! ```text
//! unsigned int name_007[] = {
//!   0x00000000, 0x00000000, ...,
//!   ...
//! };
//! ```
//!
//! Pixel value 0 is transparent. Other values go through a colour table
//! to a palette index and come out opaque.

use std::path::Path;

use c64_raster::{Palette, SpriteCut};

/// A line is broken before the next word once it holds more than this
/// many characters of words (separators not counted).
const WRAP_COLUMN: usize = 74;

/// Accumulates words into the body of a C array.
#[derive(Debug)]
pub struct CArrayWriter {
    name: String,
    body: String,
    col: usize,
    first: bool,
}

impl CArrayWriter {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            body: String::new(),
            col: 0,
            first: true,
        }
    }

    fn push_word(&mut self, word: &str) {
        if self.col > WRAP_COLUMN {
            self.body.push_str(",\n");
            self.first = true;
            self.col = 0;
        }
        self.body.push_str(if self.first { "  " } else { ", " });
        self.first = false;
        self.body.push_str(word);
        self.col += word.len();
    }

    pub fn push_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.push_word(&format!("0x{r:02x}{g:02x}{b:02x}{a:02x}"));
    }

    #[must_use]
    pub fn finish(self) -> String {
        format!("unsigned int {}[] = {{\n{}\n}};", self.name, self.body)
    }
}

/// Array name for sprite `number` cut from `snapshot`: the letters of the
/// file name, lowercased, plus the zero-padded number.
#[must_use]
pub fn sprite_name(snapshot: &Path, number: u16) -> String {
    let file = snapshot
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut letters: String = file
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        letters.push_str("sprite");
    }
    format!("{letters}_{number:03}")
}

/// Render `cut` as a C array.
///
/// `table[v]` is the palette index of pixel value `v`; values past the
/// table are used as palette indices directly.
#[must_use]
pub fn to_c_array(cut: &SpriteCut, name: &str, palette: &Palette, table: &[u8]) -> String {
    let mut writer = CArrayWriter::new(name);
    for &value in cut.pixels() {
        if value == 0 {
            writer.push_rgba(0, 0, 0, 0);
        } else {
            let index = table.get(usize::from(value)).copied().unwrap_or(value);
            let rgb = palette.resolve(index);
            writer.push_rgba(rgb.r, rgb.g, rgb.b, 0xFF);
        }
    }
    writer.finish()
}
