//! Memory snapshot used as sprite memory.
//!
//! A snapshot is a flat dump of the machine (69,948 bytes for a VICE
//! snapshot). Sprites are 64-byte records: 21 rows of 3 bytes, then one
//! padding byte. Record addresses are computed relative to a base offset
//! that skips the snapshot header (132 bytes by default), and every
//! address is clamped into the image before slicing.

use crate::error::ImageSizeError;

/// Snapshot size in bytes.
pub const SNAPSHOT_SIZE: usize = 69_948;

/// Bytes per sprite record (63 data bytes plus padding).
pub const SPRITE_RECORD_SIZE: usize = 64;

/// Pixel data bytes per sprite record.
pub const SPRITE_DATA_SIZE: usize = 63;

/// Sprite indices are 10 bits: 1,024 records.
pub const SPRITE_INDEX_MASK: u16 = 0x3FF;

/// Offset of RAM within a snapshot file.
pub const DEFAULT_BASE_OFFSET: i64 = 132;

/// Pixel data of one sprite: 21 rows x 3 bytes, MSB = leftmost pixel.
pub type SpriteData = [u8; SPRITE_DATA_SIZE];

/// Read-only snapshot image.
pub struct Snapshot {
    data: Vec<u8>,
}

impl Snapshot {
    /// Wrap a snapshot image.
    ///
    /// Images shorter than [`SNAPSHOT_SIZE`] are rejected; bytes past it
    /// are dropped.
    pub fn from_bytes(mut data: Vec<u8>) -> Result<Self, ImageSizeError> {
        if data.len() < SNAPSHOT_SIZE {
            return Err(ImageSizeError {
                what: "snapshot",
                expected: SNAPSHOT_SIZE,
                actual: data.len(),
            });
        }
        data.truncate(SNAPSHOT_SIZE);
        Ok(Self { data })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Highest address a full sprite record can start at.
    #[must_use]
    pub fn max_record_address(&self) -> usize {
        self.data.len() - SPRITE_RECORD_SIZE
    }

    /// Clamp a computed address into `[0, len - 64]`.
    #[must_use]
    pub fn clamp_address(&self, address: i64) -> usize {
        let max = self.max_record_address();
        match usize::try_from(address) {
            Ok(addr) => addr.min(max),
            Err(_) => 0,
        }
    }

    /// Sprite data at `address`, clamped into the image.
    #[must_use]
    pub fn sprite_at(&self, address: i64) -> SpriteData {
        let start = self.clamp_address(address);
        let mut sprite = [0; SPRITE_DATA_SIZE];
        sprite.copy_from_slice(&self.data[start..start + SPRITE_DATA_SIZE]);
        sprite
    }

    /// Raw snapshot bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Unclamped address of sprite `index` relative to `offset`.
#[must_use]
pub fn sprite_address(offset: i64, index: u16) -> i64 {
    offset.saturating_add(SPRITE_RECORD_SIZE as i64 * i64::from(index & SPRITE_INDEX_MASK))
}
