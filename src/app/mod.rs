//! newsatlas application module.
//!
//! Owns the terminal lifecycle, the worker tasks, and the event loop that is
//! the single writer of [`crate::state::AppState`].

/// Channel bundle shared by the event loop and the workers.
mod channels;
/// Event loop and outcome handlers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;
/// Background fetch workers and the terminal event thread.
pub mod workers;

pub use runtime::{HEADLESS_ENV, run};
