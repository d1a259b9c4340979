//! Settings subsystem
//!
//! One process-wide `ArtSettings` instance: defaults at startup, persisted
//! values loaded over them, mutated only through the administrative update
//! operation. Reads always observe the latest committed update.

pub mod handler;
pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{ArtSettings, UpdateArtSettings};

// vim: ts=4
