//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (race logic, terminal rendering, input backends).
//!
//! # Key Tokens
//!
//! Input backends translate raw key presses into a tiny vocabulary before
//! anything reaches the race logic:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `Char(c)` | A single printable character |
//! | `Confirm` | Submit the current line (Return) |
//! | `Erase` | Remove the last character (BackSpace) |
//! | `Abort` | Quit immediately, no scoring (Escape) |
//!
//! Every other key is dropped by the backend.
//!
//! # Display Surfaces
//!
//! A [`TextSurface`] is a mutable line of text with a position and a color.
//! The race logic only edits the text; layout, color and flush timing belong
//! to the renderer, which draws anything implementing [`Renderable`].
//!
//! # Examples
//!
//! ```
//! use keyrace_types::{KeyToken, Phase, TextSurface, Rgb, Renderable};
//!
//! let token = KeyToken::from_name("Return").unwrap();
//! assert_eq!(token, KeyToken::Confirm);
//!
//! let mut field = TextSurface::new(0, 4, Rgb::new(255, 220, 32));
//! field.append("ada");
//! field.pop();
//! assert_eq!(field.text(), "ad");
//!
//! assert_eq!(Phase::Lobby.as_str(), "lobby");
//! ```

use std::fmt;

/// Default number of keyboards that may join one session.
pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Upper bound accepted for the max-player setting.
pub const MAX_PLAYERS_LIMIT: usize = 8;

/// How long the final scoreboard stays on screen before exit (milliseconds).
pub const SETTLE_DELAY_MS: u64 = 5000;

/// Suffix appended to a player's field once their name is confirmed.
pub const READY_MARKER: &str = " READY";

/// Status line shown while players enter their names.
pub const LOBBY_PROMPT: &str = "Please type your name and then hit Return.";

/// Status line shown once the word list has run out.
pub const FINISHED_BANNER: &str = "Game over. Final scores:";

/// Player field colors, assigned by join order and cycled past the end.
pub const PLAYER_COLORS: [Rgb; 4] = [
    Rgb::new(255, 220, 32),
    Rgb::new(32, 128, 255),
    Rgb::new(64, 255, 0),
    Rgb::new(255, 0, 64),
];

/// Status line color.
pub const STATUS_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Opaque identifier of a physical keyboard.
///
/// Two distinct keyboards always carry distinct ids; one keyboard keeps its
/// id for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kbd{}", self.0)
    }
}

/// Logical key tokens understood by the race logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Confirm,
    Erase,
    Abort,
}

impl KeyToken {
    /// Parse a key name as used by keysym tables.
    ///
    /// Single-character names become [`KeyToken::Char`]. Multi-character
    /// names other than the three control keys are not part of the
    /// vocabulary.
    ///
    /// ```
    /// use keyrace_types::KeyToken;
    ///
    /// assert_eq!(KeyToken::from_name("a"), Some(KeyToken::Char('a')));
    /// assert_eq!(KeyToken::from_name("BackSpace"), Some(KeyToken::Erase));
    /// assert_eq!(KeyToken::from_name("Escape"), Some(KeyToken::Abort));
    /// assert_eq!(KeyToken::from_name("Shift_L"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c.is_control() {
                None
            } else {
                Some(KeyToken::Char(c))
            };
        }
        match name {
            "Return" => Some(KeyToken::Confirm),
            "BackSpace" => Some(KeyToken::Erase),
            "Escape" => Some(KeyToken::Abort),
            _ => None,
        }
    }

    /// The character carried by a `Char` token.
    pub fn as_char(&self) -> Option<char> {
        match self {
            KeyToken::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Lobby,
    Racing,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::Racing => "racing",
            Phase::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anything the renderer can draw: a line of text at a position in a color.
pub trait Renderable {
    fn text(&self) -> &str;
    /// Column and row, in terminal cells.
    fn position(&self) -> (u16, u16);
    fn color(&self) -> Rgb;
}

/// A mutable line of text owned by the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    x: u16,
    y: u16,
    color: Rgb,
}

impl TextSurface {
    pub fn new(x: u16, y: u16, color: Rgb) -> Self {
        Self {
            text: String::new(),
            x,
            y,
            color,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn append(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn replace(&mut self, s: &str) {
        self.text.clear();
        self.text.push_str(s);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Renderable for TextSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    fn color(&self) -> Rgb {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_map_to_tokens() {
        assert_eq!(KeyToken::from_name("z"), Some(KeyToken::Char('z')));
        assert_eq!(KeyToken::from_name("7"), Some(KeyToken::Char('7')));
        assert_eq!(KeyToken::from_name("Return"), Some(KeyToken::Confirm));
        assert_eq!(KeyToken::from_name("space"), None);
        assert_eq!(KeyToken::from_name("\t"), None);
        assert_eq!(KeyToken::from_name(""), None);
    }

    #[test]
    fn surface_edits_only_touch_text() {
        let mut s = TextSurface::new(3, 9, PLAYER_COLORS[1]).with_text("ab");
        s.push('c');
        assert_eq!(s.text(), "abc");
        assert_eq!(s.pop(), Some('c'));
        s.replace("xyz");
        assert_eq!(s.text(), "xyz");
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.position(), (3, 9));
        assert_eq!(s.color(), PLAYER_COLORS[1]);
    }

    #[test]
    fn device_id_display_is_stable() {
        assert_eq!(DeviceId(12).to_string(), "kbd12");
    }
}
