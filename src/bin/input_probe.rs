//! Input probe: lists detected keyboards and echoes the tokens each one
//! produces. Use it to check the multi-keyboard setup before a game.
//!
//! Press Escape on any keyboard to quit.

use anyhow::Result;

#[cfg(target_os = "linux")]
fn main() -> Result<()> {
    use std::sync::mpsc;

    use keyrace::input::{list_keyboards, spawn_keyboard_readers, InputEvent};
    use keyrace::types::KeyToken;

    let grab = std::env::args().skip(1).any(|arg| arg == "--grab");

    let keyboards = list_keyboards();
    if keyboards.is_empty() {
        println!("no keyboards found under /dev/input (is the user in the `input` group?)");
        return Ok(());
    }
    for kbd in &keyboards {
        println!("{}  {}  {}", kbd.id, kbd.path.display(), kbd.name);
    }

    let (tx, rx) = mpsc::channel();
    spawn_keyboard_readers(&tx, grab)?;
    drop(tx);

    println!("press keys on any keyboard; Escape quits");
    for event in rx {
        match event {
            InputEvent::Key { device, token } => {
                println!("{device}: {token:?}");
                if token == KeyToken::Abort {
                    break;
                }
            }
            InputEvent::Disconnected { device } => println!("{device}: disconnected"),
            InputEvent::Resize => {}
        }
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() -> Result<()> {
    println!("input-probe needs evdev, which is only available on Linux");
    Ok(())
}
