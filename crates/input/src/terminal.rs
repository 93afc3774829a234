//! Terminal backend: the controlling terminal is a single keyboard.
//!
//! Events are read from `/dev/tty` (crossterm `use-dev-tty`), which leaves
//! stdin free for the word stream.

use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::{DeviceId, KeyToken};
use crate::InputEvent;

/// Device id used for every key read from the terminal.
///
/// Kept outside the range of evdev event node numbers.
pub const TERMINAL_DEVICE: DeviceId = DeviceId(u32::MAX);

/// What the terminal reader forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// The terminal is the only keyboard.
    Keys,
    /// Keys come from elsewhere; forward only resizes and abort. Reading
    /// still drains the tty so stray keystrokes never reach the shell.
    Passive,
}

/// Start the terminal reader thread.
pub fn spawn_terminal_reader(tx: Sender<InputEvent>, mode: TerminalMode) -> Result<()> {
    thread::Builder::new()
        .name("tty-input".to_string())
        .spawn(move || read_terminal(tx, mode))?;
    Ok(())
}

/// Translate one terminal event.
///
/// Only fresh presses count; auto-repeat and release are dropped here.
pub fn translate(event: Event, mode: TerminalMode) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let token = map_key_event(key)?;
            if mode == TerminalMode::Passive && token != KeyToken::Abort {
                return None;
            }
            Some(InputEvent::Key {
                device: TERMINAL_DEVICE,
                token,
            })
        }
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn read_terminal(tx: Sender<InputEvent>, mode: TerminalMode) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "terminal read failed");
                if mode == TerminalMode::Keys {
                    let _ = tx.send(InputEvent::Disconnected {
                        device: TERMINAL_DEVICE,
                    });
                }
                return;
            }
        };
        if let Some(input) = translate(event, mode) {
            if tx.send(input).is_err() {
                return;
            }
        }
    }
}
