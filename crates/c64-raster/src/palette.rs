//! C64 colour palette.
//!
//! 16 colours indexed 0-15. The default table is a bright, slightly lifted
//! rendition (black is 0x101010) that keeps dithered shades distinguishable
//! on modern displays.

/// Number of entries in a C64 palette.
pub const PALETTE_SIZE: usize = 16;

/// Default palette as 24-bit RGB values.
pub const DEFAULT_RGB24: [u32; PALETTE_SIZE] = [
    0x10_1010, // 0: Black
    0xFF_FFFF, // 1: White
    0xE0_4040, // 2: Red
    0x60_FFFF, // 3: Cyan
    0xE0_60E0, // 4: Purple
    0x40_E040, // 5: Green
    0x40_40E0, // 6: Blue
    0xFF_FF40, // 7: Yellow
    0xE0_A040, // 8: Orange
    0x9C_7448, // 9: Brown
    0xFF_A0A0, // 10: Light Red
    0x54_5454, // 11: Dark Grey
    0x88_8888, // 12: Medium Grey
    0xA0_FFA0, // 13: Light Green
    0xA0_A0FF, // 14: Light Blue
    0xC0_C0C0, // 15: Light Grey
];

/// Colour names for diagnostics.
pub const COLOUR_NAMES: [&str; PALETTE_SIZE] = [
    "Black",
    "White",
    "Red",
    "Cyan",
    "Purple",
    "Green",
    "Blue",
    "Yellow",
    "Orange",
    "Brown",
    "Light Red",
    "Dark Grey",
    "Medium Grey",
    "Light Green",
    "Light Blue",
    "Light Grey",
];

/// RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Framebuffer pixel bytes: B, G, R, then opaque alpha.
    #[must_use]
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, 0xFF]
    }
}

/// A 16-colour lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: [Rgb; PALETTE_SIZE],
}

impl Palette {
    #[must_use]
    pub const fn new(colours: [Rgb; PALETTE_SIZE]) -> Self {
        Self { colours }
    }

    /// Build a palette from `0xRRGGBB` values.
    #[must_use]
    pub fn from_rgb24(values: &[u32; PALETTE_SIZE]) -> Self {
        Self {
            colours: values.map(Rgb::from_rgb24),
        }
    }

    /// Look up a colour. Only the low nibble of `index` is used.
    #[must_use]
    pub fn resolve(&self, index: u8) -> Rgb {
        self.colours[usize::from(index & 0x0F)]
    }

    /// Look up a colour, rejecting indices outside 0-15.
    #[must_use]
    pub fn try_resolve(&self, index: u8) -> Option<Rgb> {
        self.colours.get(usize::from(index)).copied()
    }

    /// Pixel bytes for a colour index, masked to 4 bits.
    #[must_use]
    pub fn bgra(&self, index: u8) -> [u8; 4] {
        self.resolve(index).to_bgra()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_rgb24(&DEFAULT_RGB24)
    }
}

/// Name of a colour index, masked to 4 bits.
#[must_use]
pub fn colour_name(index: u8) -> &'static str {
    COLOUR_NAMES[usize::from(index & 0x0F)]
}
