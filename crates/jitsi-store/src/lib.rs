//! # jitsi-store
//!
//! Persistent settings store for jitsi-slash (SQLite-backed).

pub mod store;

pub use store::{Store, UserSettingsStore};
