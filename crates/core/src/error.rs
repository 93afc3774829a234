//! Error taxonomy for the race logic.
//!
//! Every variant is fatal to the session: nothing is retried. Running out of
//! words is not an error; [`crate::WordSource::next_word`] reports it as
//! `Ok(None)`.

use keyrace_types::DeviceId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// An unseen keyboard pressed a key after every player slot was taken.
    #[error("too many players: all {max_players} slots are taken")]
    CapacityExceeded { max_players: usize },

    /// An unseen keyboard pressed a key while a race was running.
    #[error("{device} cannot join while a race is running")]
    IllegalJoin { device: DeviceId },

    /// An internal invariant was breached.
    #[error("invariant violated: {0}")]
    Invariant(&'static str),

    /// The word stream could not be read.
    #[error("failed to read next word: {0}")]
    WordSource(#[from] std::io::Error),
}
