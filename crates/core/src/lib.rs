//! Core race logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state machine of a local typing
//! race where every attached keyboard is its own player. It never touches a
//! terminal or an input device: keystrokes arrive as
//! ([`DeviceId`](types::DeviceId), [`KeyToken`](types::KeyToken)) pairs and
//! words arrive through the [`WordSource`] trait, so every rule can be driven
//! from tests.
//!
//! # Module Structure
//!
//! - [`player`]: per-player typing progress, readiness, score
//! - [`registry`]: keyboard-to-player mapping with a fixed slot capacity
//! - [`round`]: the [`Session`] state machine (lobby, racing, finished)
//! - [`scoring`]: points per finisher, pluggable via [`ScoreRule`]
//! - [`words`]: word streams from text lines or in-memory lists
//! - [`display`]: the text surfaces a session edits
//! - [`error`]: fatal conditions
//!
//! # Game Rules
//!
//! - **Lobby**: each keyboard types a name and confirms with Return. The race
//!   starts once every registered player has confirmed.
//! - **Racing**: players retype the shared word; wrong keys are ignored.
//!   Finishing earns one point per player still racing.
//! - **Finished**: the word list ran out; the scoreboard replaces the fields.
//!
//! # Example
//!
//! ```
//! use keyrace_core::{Flow, ListWords, Session, SessionConfig};
//! use keyrace_types::{DeviceId, KeyToken, Phase};
//!
//! let mut words = ListWords::new(["hi"]);
//! let mut session = Session::new(SessionConfig::default());
//! let kbd = DeviceId(3);
//!
//! for c in "ada".chars() {
//!     session.handle_key(kbd, KeyToken::Char(c), &mut words).unwrap();
//! }
//! session.handle_key(kbd, KeyToken::Confirm, &mut words).unwrap();
//! assert_eq!(session.phase(), Phase::Racing);
//! assert_eq!(session.target_word(), "hi");
//!
//! session.handle_key(kbd, KeyToken::Char('h'), &mut words).unwrap();
//! let flow = session.handle_key(kbd, KeyToken::Char('i'), &mut words).unwrap();
//! assert_eq!(flow, Flow::Finished);
//! assert_eq!(session.scoreboard()[0].to_string(), "player ada has 0 points.");
//! ```

pub mod display;
pub mod error;
pub mod player;
pub mod registry;
pub mod round;
pub mod scoring;
pub mod words;

pub use keyrace_types as types;

// Re-export commonly used types for convenience
pub use display::Display;
pub use error::GameError;
pub use player::PlayerState;
pub use registry::DeviceRegistry;
pub use round::{Flow, ScoreLine, Session, SessionConfig};
pub use scoring::{PodiumScore, RankScore, ScoreRule, ScoringKind};
pub use words::{LineWords, ListWords, WordSource};
