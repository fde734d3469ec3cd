//! Keyboard input for the browser.
//!
//! Two layers:
//! 1. `command_for_key` maps a key byte to a session [`Command`].
//! 2. `InputQueue` holds timed key events for scripted runs.

use std::collections::VecDeque;

use c64_raster::Command;
use c64_raster::session::ROW_STEP;

pub const KEY_BACKSPACE: u8 = 0x08;
pub const KEY_RETURN: u8 = 0x0D;
pub const KEY_ESCAPE: u8 = 0x1B;

/// Shifted `4` on the keyboards the browser was laid out for.
pub const KEY_SHIFT_4: u8 = 0xA4;

/// Map a key to the session command it triggers.
///
/// Digits `1`-`4` step the background and the three foreground colours up,
/// their shifted symbols step them down.
#[must_use]
pub fn command_for_key(key: u8) -> Option<Command> {
    let command = match key {
        b'1' => Command::Background(1),
        b'!' => Command::Background(-1),
        b'2' => Command::Foreground(0, 1),
        b'"' => Command::Foreground(0, -1),
        b'3' => Command::Foreground(1, 1),
        b'#' => Command::Foreground(1, -1),
        b'4' => Command::Foreground(2, 1),
        KEY_SHIFT_4 => Command::Foreground(2, -1),
        b'm' => Command::ToggleMode,
        b' ' => Command::Sprite(1),
        KEY_BACKSPACE => Command::Sprite(-1),
        b'w' => Command::Sprite(-(ROW_STEP as i16)),
        b's' => Command::Sprite(ROW_STEP as i16),
        b'a' => Command::Offset(-1),
        b'd' => Command::Offset(1),
        KEY_RETURN => Command::NextBank,
        KEY_ESCAPE => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Turn script text into key bytes.
///
/// `\n` is Return, `\e` Escape, `\b` backspace and `\\` a backslash.
/// Characters above U+00FF are dropped.
#[must_use]
pub fn parse_keys(text: &str) -> Vec<u8> {
    let mut keys = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        let key = if ch == '\\' {
            match chars.next() {
                Some('n') => KEY_RETURN,
                Some('e') => KEY_ESCAPE,
                Some('b') => KEY_BACKSPACE,
                Some('\\') | None => b'\\',
                Some(other) => {
                    keys.push(b'\\');
                    match u8::try_from(other) {
                        Ok(byte) => byte,
                        Err(_) => continue,
                    }
                }
            }
        } else {
            match u8::try_from(ch) {
                Ok(byte) => byte,
                Err(_) => continue,
            }
        };
        keys.push(key);
    }
    keys
}

/// A timed key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Frame at which the key is delivered.
    pub frame: u64,
    pub key: u8,
}

/// Timed input queue for scripted key sequences.
///
/// Events are sorted by frame and drained at the start of each frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<KeyEvent>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one event, keeping frame order (stable for equal frames).
    pub fn push(&mut self, event: KeyEvent) {
        let pos = self
            .events
            .iter()
            .position(|e| e.frame > event.frame)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event);
    }

    /// Enqueue `keys` one per frame from `start_frame`.
    /// Returns the next free frame.
    pub fn enqueue_keys(&mut self, keys: &[u8], start_frame: u64) -> u64 {
        let mut frame = start_frame;
        for &key in keys {
            self.push(KeyEvent { frame, key });
            frame += 1;
        }
        frame
    }

    /// Remove and return every key due at or before `frame`.
    pub fn take_due(&mut self, frame: u64) -> Vec<u8> {
        let mut due = Vec::new();
        while let Some(event) = self.events.front() {
            if event.frame > frame {
                break;
            }
            due.push(event.key);
            self.events.pop_front();
        }
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
