//! Linux evdev backend: one player controller per physical keyboard.
//!
//! Each keyboard under `/dev/input/event*` gets its own reader thread. Key
//! presses are mapped from the unshifted key, so `KEY_A` is always `'a'`.
//! Auto-repeat and release events never leave this module.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{bail, Result};
use evdev::{Device, InputEventKind, Key};

use crate::types::{DeviceId, KeyToken};
use crate::InputEvent;

/// evdev key event value for a fresh press (0 = release, 2 = auto-repeat).
const KEY_PRESS: i32 = 1;

const LETTERS: [(Key, char); 26] = [
    (Key::KEY_A, 'a'),
    (Key::KEY_B, 'b'),
    (Key::KEY_C, 'c'),
    (Key::KEY_D, 'd'),
    (Key::KEY_E, 'e'),
    (Key::KEY_F, 'f'),
    (Key::KEY_G, 'g'),
    (Key::KEY_H, 'h'),
    (Key::KEY_I, 'i'),
    (Key::KEY_J, 'j'),
    (Key::KEY_K, 'k'),
    (Key::KEY_L, 'l'),
    (Key::KEY_M, 'm'),
    (Key::KEY_N, 'n'),
    (Key::KEY_O, 'o'),
    (Key::KEY_P, 'p'),
    (Key::KEY_Q, 'q'),
    (Key::KEY_R, 'r'),
    (Key::KEY_S, 's'),
    (Key::KEY_T, 't'),
    (Key::KEY_U, 'u'),
    (Key::KEY_V, 'v'),
    (Key::KEY_W, 'w'),
    (Key::KEY_X, 'x'),
    (Key::KEY_Y, 'y'),
    (Key::KEY_Z, 'z'),
];

const DIGITS: [(Key, char); 10] = [
    (Key::KEY_0, '0'),
    (Key::KEY_1, '1'),
    (Key::KEY_2, '2'),
    (Key::KEY_3, '3'),
    (Key::KEY_4, '4'),
    (Key::KEY_5, '5'),
    (Key::KEY_6, '6'),
    (Key::KEY_7, '7'),
    (Key::KEY_8, '8'),
    (Key::KEY_9, '9'),
];

/// A keyboard found under `/dev/input`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardInfo {
    pub id: DeviceId,
    pub path: PathBuf,
    pub name: String,
}

/// Map an evdev key code to a token.
pub fn key_to_token(key: Key) -> Option<KeyToken> {
    let token = match key {
        Key::KEY_ENTER | Key::KEY_KPENTER => KeyToken::Confirm,
        Key::KEY_BACKSPACE => KeyToken::Erase,
        Key::KEY_ESC => KeyToken::Abort,
        _ => KeyToken::Char(key_char(key)?),
    };
    Some(token)
}

fn key_char(key: Key) -> Option<char> {
    LETTERS
        .iter()
        .chain(DIGITS.iter())
        .find(|(k, _)| *k == key)
        .map(|&(_, c)| c)
}

/// Device id from the event node number (`/dev/input/event7` -> 7).
fn node_id(path: &Path) -> Option<DeviceId> {
    path.file_name()?
        .to_str()?
        .strip_prefix("event")?
        .parse::<u32>()
        .ok()
        .map(DeviceId)
}

fn is_keyboard(device: &Device) -> bool {
    device
        .supported_keys()
        .is_some_and(|keys| keys.contains(Key::KEY_ENTER) && keys.contains(Key::KEY_A))
}

fn open_keyboards() -> Vec<(KeyboardInfo, Device)> {
    let mut found: Vec<(KeyboardInfo, Device)> = evdev::enumerate()
        .filter(|(_, device)| is_keyboard(device))
        .enumerate()
        .map(|(index, (path, device))| {
            let id = node_id(&path).unwrap_or(DeviceId(index as u32));
            let name = device.name().unwrap_or("unnamed keyboard").to_string();
            (KeyboardInfo { id, path, name }, device)
        })
        .collect();
    found.sort_by_key(|(info, _)| info.id);
    found
}

/// List keyboards without reading from them.
pub fn list_keyboards() -> Vec<KeyboardInfo> {
    open_keyboards().into_iter().map(|(info, _)| info).collect()
}

/// Start one reader thread per keyboard, all sending into `tx`.
///
/// With `grab`, keystrokes are taken exclusively and no longer reach the
/// terminal or the desktop.
pub fn spawn_keyboard_readers(tx: &Sender<InputEvent>, grab: bool) -> Result<Vec<KeyboardInfo>> {
    let keyboards = open_keyboards();
    if keyboards.is_empty() {
        bail!("no keyboards found under /dev/input (is the user in the `input` group?)");
    }

    let mut infos = Vec::with_capacity(keyboards.len());
    for (info, mut device) in keyboards {
        if grab {
            if let Err(err) = device.grab() {
                tracing::warn!(device = %info.id, error = %err, "could not grab keyboard");
            }
        }
        let id = info.id;
        let tx = tx.clone();
        thread::Builder::new()
            .name(format!("evdev-{}", id.0))
            .spawn(move || read_keyboard(device, id, tx))?;
        tracing::info!(device = %id, path = %info.path.display(), name = %info.name, "listening");
        infos.push(info);
    }
    Ok(infos)
}

fn read_keyboard(mut device: Device, id: DeviceId, tx: Sender<InputEvent>) {
    loop {
        let events = match device.fetch_events() {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(device = %id, error = %err, "keyboard read failed");
                let _ = tx.send(InputEvent::Disconnected { device: id });
                return;
            }
        };
        for event in events {
            let InputEventKind::Key(key) = event.kind() else {
                continue;
            };
            if event.value() != KEY_PRESS {
                continue;
            }
            if let Some(token) = key_to_token(key) {
                if tx.send(InputEvent::Key { device: id, token }).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_unshifted() {
        assert_eq!(key_to_token(Key::KEY_A), Some(KeyToken::Char('a')));
        assert_eq!(key_to_token(Key::KEY_Z), Some(KeyToken::Char('z')));
        assert_eq!(key_to_token(Key::KEY_0), Some(KeyToken::Char('0')));
        assert_eq!(key_to_token(Key::KEY_9), Some(KeyToken::Char('9')));
    }

    #[test]
    fn control_keys_map_to_tokens() {
        assert_eq!(key_to_token(Key::KEY_ENTER), Some(KeyToken::Confirm));
        assert_eq!(key_to_token(Key::KEY_KPENTER), Some(KeyToken::Confirm));
        assert_eq!(key_to_token(Key::KEY_BACKSPACE), Some(KeyToken::Erase));
        assert_eq!(key_to_token(Key::KEY_ESC), Some(KeyToken::Abort));
    }

    #[test]
    fn other_keys_are_dropped() {
        assert_eq!(key_to_token(Key::KEY_LEFTSHIFT), None);
        assert_eq!(key_to_token(Key::KEY_SPACE), None);
        assert_eq!(key_to_token(Key::KEY_F1), None);
    }

    #[test]
    fn node_id_parses_event_number() {
        assert_eq!(node_id(Path::new("/dev/input/event12")), Some(DeviceId(12)));
        assert_eq!(node_id(Path::new("/dev/input/mouse0")), None);
    }
}
