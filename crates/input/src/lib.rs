//! Input sources (engine-facing).
//!
//! This crate turns raw key presses into `(DeviceId, KeyToken)` events and
//! delivers them over a `std::sync::mpsc` channel, one reader thread per
//! source. The race logic never sees auto-repeat, releases, or keys outside
//! the token vocabulary.
//!
//! Two backends exist:
//!
//! - [`terminal`]: the controlling terminal via crossterm, as a single
//!   keyboard. Good for solo play and testing.
//! - [`keyboards`] (Linux): every physical keyboard under `/dev/input` via
//!   evdev, each with its own device id. This is the multiplayer setup.

pub mod map;
pub mod terminal;

#[cfg(target_os = "linux")]
pub mod keyboards;

pub use keyrace_types as types;

use types::{DeviceId, KeyToken};

pub use map::{is_abort, map_key_event};
pub use terminal::{spawn_terminal_reader, TerminalMode, TERMINAL_DEVICE};

#[cfg(target_os = "linux")]
pub use keyboards::{key_to_token, list_keyboards, spawn_keyboard_readers, KeyboardInfo};

/// Event delivered to the dispatcher loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { device: DeviceId, token: KeyToken },
    /// The display should be redrawn from scratch.
    Resize,
    /// A source stopped delivering events.
    Disconnected { device: DeviceId },
}
