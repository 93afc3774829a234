//! Typing race runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! Keystrokes arrive from reader threads over a channel, the session
//! processes them one at a time, and the display is redrawn after each.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use keyrace::config::{Config, InputBackend};
use keyrace::core::{Flow, LineWords, ScoreRule, Session, WordSource};
use keyrace::input::{spawn_terminal_reader, InputEvent, TerminalMode};
use keyrace::logging::init_logging;
use keyrace::term::{FrameBuffer, RaceView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::parse();
    let _log_guard = init_logging(config.log_file.as_deref())?;
    tracing::info!(?config, "starting");

    let mut words = open_words(&config)?;
    let (inputs, sources) = spawn_inputs(&config)?;
    let mut session = Session::with_rule(config.session_config(), config.scoring_kind());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(
        &mut term,
        &mut session,
        &mut words,
        &inputs,
        sources,
        config.settle_delay(),
    );

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Flow::Finished => {
            for line in session.scoreboard() {
                println!("{line}");
            }
        }
        Flow::Aborted | Flow::Continue => println!("aborted, no scores recorded."),
    }
    Ok(())
}

fn open_words(config: &Config) -> Result<LineWords<Box<dyn BufRead>>> {
    let reader: Box<dyn BufRead> = match &config.words {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open word list {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("no word list: pipe words into stdin or pass --words <FILE>");
            }
            Box::new(stdin.lock())
        }
    };
    Ok(LineWords::new(reader))
}

/// Start the reader threads. Returns the channel and how many keyboards
/// feed it.
fn spawn_inputs(config: &Config) -> Result<(Receiver<InputEvent>, usize)> {
    let (tx, rx) = mpsc::channel();
    let sources = match config.input {
        InputBackend::Terminal => {
            spawn_terminal_reader(tx, TerminalMode::Keys)?;
            1
        }
        InputBackend::Evdev => {
            let keyboards = spawn_keyboards(&tx, config.grab)?;
            spawn_terminal_reader(tx, TerminalMode::Passive)?;
            keyboards
        }
    };
    Ok((rx, sources))
}

#[cfg(target_os = "linux")]
fn spawn_keyboards(tx: &mpsc::Sender<InputEvent>, grab: bool) -> Result<usize> {
    let keyboards = keyrace::input::spawn_keyboard_readers(tx, grab)?;
    Ok(keyboards.len())
}

#[cfg(not(target_os = "linux"))]
fn spawn_keyboards(_tx: &mpsc::Sender<InputEvent>, _grab: bool) -> Result<usize> {
    bail!("the evdev input backend is only available on Linux; use --input terminal")
}

fn run<R, W>(
    term: &mut TerminalRenderer,
    session: &mut Session<R>,
    words: &mut W,
    inputs: &Receiver<InputEvent>,
    mut live_sources: usize,
    settle: Duration,
) -> Result<Flow>
where
    R: ScoreRule,
    W: WordSource,
{
    let view = RaceView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        draw(term, &view, session, &mut fb)?;

        let event = inputs.recv().context("all input sources closed")?;
        match event {
            InputEvent::Key { device, token } => match session.handle_key(device, token, words)? {
                Flow::Continue => {}
                Flow::Finished => {
                    draw(term, &view, session, &mut fb)?;
                    thread::sleep(settle);
                    return Ok(Flow::Finished);
                }
                Flow::Aborted => return Ok(Flow::Aborted),
            },
            InputEvent::Resize => term.invalidate(),
            InputEvent::Disconnected { device } => {
                tracing::warn!(%device, "input source closed");
                live_sources = live_sources.saturating_sub(1);
                if live_sources == 0 {
                    bail!("every keyboard has disconnected");
                }
            }
        }
    }
}

fn draw<R: ScoreRule>(
    term: &mut TerminalRenderer,
    view: &RaceView,
    session: &Session<R>,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(session.surfaces(), session.phase(), Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
