//! Key mapping from terminal events to key tokens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyrace_types::KeyToken;

/// Map a terminal key press to a token.
///
/// Printable characters pass through as typed. Modified chords other than
/// Shift, and keys outside the vocabulary, map to `None`.
pub fn map_key_event(key: KeyEvent) -> Option<KeyToken> {
    if is_abort(key) {
        return Some(KeyToken::Abort);
    }
    match key.code {
        KeyCode::Enter => Some(KeyToken::Confirm),
        KeyCode::Backspace => Some(KeyToken::Erase),
        KeyCode::Char(c)
            if !c.is_control() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            Some(KeyToken::Char(c))
        }
        _ => None,
    }
}

/// Check if key should end the game immediately.
pub fn is_abort(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
