//! Browser session state and the commands that change it.
//!
//! The session is a handful of integers read by the scene on every frame
//! and written only by the input layer between frames. Every adjustment
//! keeps colours in 4 bits and the sprite index in 10 bits.

use crate::snapshot::{DEFAULT_BASE_OFFSET, SPRITE_INDEX_MASK};
use crate::sprite::SpriteMode;

/// Sprite index step of the `w`/`s` keys.
pub const ROW_STEP: u16 = 32;

/// Browser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Session {
    /// Multicolour or hi-res decoding.
    pub mode: SpriteMode,
    /// First sprite shown (0-1023).
    pub sprite_index: u16,
    /// Base address of sprite 0 within the snapshot.
    pub offset: i64,
    /// Background colour index.
    pub bg: u8,
    /// Foreground colour indices. Hi-res sprites use only `fg[0]`.
    pub fg: [u8; 3],
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: SpriteMode::Multicolour,
            sprite_index: 0,
            offset: DEFAULT_BASE_OFFSET,
            bg: 0x0,
            fg: [0xF, 0xC, 0xB],
        }
    }
}

/// A discrete adjustment from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the background colour by +1/-1.
    Background(i8),
    /// Step foreground colour `n` (0-2) by +1/-1.
    Foreground(usize, i8),
    /// Switch between hi-res and multicolour.
    ToggleMode,
    /// Move the sprite index by a signed amount (wraps at 1024).
    Sprite(i16),
    /// Jump to the next 64-sprite boundary.
    NextBank,
    /// Move the base offset by a signed amount of bytes.
    Offset(i64),
    /// Leave the browser.
    Quit,
}

impl Session {
    /// Apply one command. Returns `false` for [`Command::Quit`].
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Background(step) => self.bg = step_colour(self.bg, step),
            Command::Foreground(n, step) => {
                if let Some(fg) = self.fg.get_mut(n) {
                    *fg = step_colour(*fg, step);
                }
            }
            Command::ToggleMode => {
                self.mode = match self.mode {
                    SpriteMode::HiRes => SpriteMode::Multicolour,
                    SpriteMode::Multicolour => SpriteMode::HiRes,
                };
            }
            Command::Sprite(delta) => {
                self.sprite_index =
                    self.sprite_index.wrapping_add_signed(delta) & SPRITE_INDEX_MASK;
            }
            Command::NextBank => {
                self.sprite_index = ((self.sprite_index & SPRITE_INDEX_MASK) + 0x40) & 0x3C0;
            }
            Command::Offset(delta) => self.offset = self.offset.saturating_add(delta),
            Command::Quit => return false,
        }
        true
    }

    /// Copy with every field forced back into range (for loaded state).
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            sprite_index: self.sprite_index & SPRITE_INDEX_MASK,
            bg: self.bg & 0x0F,
            fg: self.fg.map(|c| c & 0x0F),
            ..self
        }
    }

    /// Colour indices in multicolour field order: `[bg, fg0, fg1, fg2]`.
    #[must_use]
    pub fn colours(&self) -> [u8; 4] {
        [
            self.bg & 0x0F,
            self.fg[0] & 0x0F,
            self.fg[1] & 0x0F,
            self.fg[2] & 0x0F,
        ]
    }
}

fn step_colour(colour: u8, step: i8) -> u8 {
    colour.wrapping_add_signed(step) & 0x0F
}
