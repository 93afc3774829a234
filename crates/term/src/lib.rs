//! Terminal display for the race.
//!
//! Text surfaces are laid out into a framebuffer by [`RaceView`] and flushed
//! by [`TerminalRenderer`], which only rewrites the cells that changed.
//!
//! Goals:
//! - Keep the race logic free of any terminal code
//! - Draw anything that implements [`Renderable`](types::Renderable)
//! - Leave stdin alone so it can carry the word list

pub mod fb;
pub mod race_view;
pub mod renderer;

pub use keyrace_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use race_view::{RaceView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
