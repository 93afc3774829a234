//! keyrace (workspace facade crate).
//!
//! Re-exports the member crates as `keyrace::{core,input,term,types}` and
//! holds the runner's configuration and logging setup shared by the
//! binaries.

pub use keyrace_core as core;
pub use keyrace_input as input;
pub use keyrace_term as term;
pub use keyrace_types as types;

pub mod config;
pub mod logging;
