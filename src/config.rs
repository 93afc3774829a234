//! Command-line and environment configuration.
//!
//! Every option can also be set through a `KEYRACE_*` environment variable.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::core::{ScoringKind, SessionConfig};
use crate::types::{DEFAULT_MAX_PLAYERS, MAX_PLAYERS_LIMIT, SETTLE_DELAY_MS};

/// Where keystrokes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputBackend {
    /// The controlling terminal, as a single player.
    Terminal,
    /// Every keyboard under /dev/input, one player each (Linux).
    Evdev,
}

impl Default for InputBackend {
    fn default() -> Self {
        if cfg!(target_os = "linux") {
            InputBackend::Evdev
        } else {
            InputBackend::Terminal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scoring {
    /// One point per player still racing when you finish.
    #[default]
    Rank,
    /// 3, 2, 1 points for the first three finishers.
    Podium,
}

impl From<Scoring> for ScoringKind {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::Rank => ScoringKind::Rank,
            Scoring::Podium => ScoringKind::Podium,
        }
    }
}

/// Local multiplayer typing race: every keyboard is a player.
///
/// Words are read one per line from --words or standard input.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maximum number of keyboards that may join.
    #[arg(long, env = "KEYRACE_MAX_PLAYERS", default_value_t = DEFAULT_MAX_PLAYERS, value_parser = parse_max_players)]
    pub max_players: usize,

    /// Input backend.
    #[arg(long, env = "KEYRACE_INPUT", value_enum, default_value_t = InputBackend::default())]
    pub input: InputBackend,

    /// Take keyboards exclusively (evdev only).
    #[arg(long, env = "KEYRACE_GRAB")]
    pub grab: bool,

    /// Word list, one word per line. Defaults to standard input.
    #[arg(long, env = "KEYRACE_WORDS")]
    pub words: Option<PathBuf>,

    /// Scoring rule.
    #[arg(long, env = "KEYRACE_SCORING", value_enum, default_value_t = Scoring::default())]
    pub scoring: Scoring,

    /// How long the final scoreboard stays up, in milliseconds.
    #[arg(long, env = "KEYRACE_SETTLE_MS", default_value_t = SETTLE_DELAY_MS)]
    pub settle_ms: u64,

    /// Write logs to this file (filter with KEYRACE_LOG, default `info`).
    #[arg(long, env = "KEYRACE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_players: self.max_players,
        }
    }

    pub fn scoring_kind(&self) -> ScoringKind {
        self.scoring.into()
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

fn parse_max_players(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if (1..=MAX_PLAYERS_LIMIT).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_PLAYERS_LIMIT}"))
    }
}
