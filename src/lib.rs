//! Pitboss - operator console for a trading-platform backend.
//!
//! This crate provides a command-line console for the administrative API
//! of a trading platform: user management, KYC review, transaction
//! approval, trading accounts and positions, the currency-pair catalog,
//! payment methods, platform settings, and a live system dashboard.
//!
//! # Architecture
//!
//! Every command flows through the same layers:
//!
//! - [`cli`] - clap command tree, handlers, and terminal rendering
//! - [`api`] - typed HTTP client over the backend's enveloped JSON API
//! - [`view`] - screen state, pagination, search debounce, and polling
//! - [`session`] - on-disk bearer session shared across invocations
//!
//! Handlers receive an explicit [`cli::context::CliContext`] holding the
//! loaded configuration and the API client. Nothing network-facing reaches
//! for globals, so a test can wire its own session store and base URL.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`error`] - Error types for the crate
//! - [`testkit`] - Fixtures and in-memory session store for tests
//!
//! # Features
//!
//! - `testkit` - Expose [`testkit`] to integration tests
//!
//! # Example
//!
//! ```no_run
//! use pitboss::cli::context::CliContext;
//! use pitboss::config::Config;
//!
//! # fn main() -> pitboss::error::Result<()> {
//! let config = Config::default();
//! let ctx = CliContext::new(config)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
