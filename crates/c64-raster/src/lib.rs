//! Commodore 64 bitmap decoder and compositor.
//!
//! Turns raw C64 graphics data into BGRA pixels: 8x8 character glyphs from
//! a character ROM, 24x21 hi-res sprites and 12x21 multicolour sprites
//! sliced out of a memory snapshot. Everything draws at an integer scale
//! and is clipped against the framebuffer, never rejected.
//!
//! The [`Scene`] lays out the sprite browser: a few status labels and an
//! 8x8 grid of sprites taken from consecutive 64-byte records, driven by a
//! [`Session`] that the input layer mutates between frames.

pub mod charset;
pub mod cutter;
mod error;
pub mod framebuffer;
pub mod glyph;
pub mod palette;
pub mod scene;
pub mod session;
pub mod snapshot;
pub mod sprite;
pub mod text;

pub use charset::{GlyphStore, ascii_to_screen_code};
pub use cutter::{Rotation, SpriteCut};
pub use error::ImageSizeError;
pub use framebuffer::Framebuffer;
pub use palette::{Palette, Rgb};
pub use scene::Scene;
pub use session::{Command, Session};
pub use snapshot::{Snapshot, SpriteData};
pub use sprite::SpriteMode;
pub use text::TextStyle;
