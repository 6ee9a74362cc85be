//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`session`] — In-memory [`SessionStore`](crate::session::SessionStore)
//!   for tests that must not touch the filesystem.
//! - [`fixtures`] — Factories for wire types and enveloped JSON bodies.

pub mod fixtures;
pub mod session;

pub use session::MemorySession;
