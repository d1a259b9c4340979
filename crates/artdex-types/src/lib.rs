//! Shared types, adapter traits, and core utilities for the Artdex service.
//!
//! This crate contains the foundational types that are shared between the
//! server crate, the feature crates, and the store adapter implementations.
//! Keeping them in a separate crate lets adapters compile in parallel with
//! the feature modules.

pub mod art_store;
pub mod error;
pub mod notify_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
