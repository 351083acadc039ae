//! Library entry for newsatlas exposing the runtime and core logic for the
//! binary and integration tests.

pub mod app;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod store;
pub mod ui;
