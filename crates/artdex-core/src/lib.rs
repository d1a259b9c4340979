//! Core infrastructure for the Artdex service.
//!
//! Holds the application state and builder, the host-auth extractors, and
//! the settings subsystem. Feature crates depend on this; adapters do not.

pub mod app;
pub mod extract;
pub mod prelude;
pub mod settings;

pub use app::{App, AppBuilder, AppState};

// vim: ts=4
