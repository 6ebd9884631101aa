//! Structured logging for the picker.
//!
//! The library only emits `tracing` events and spans; this module installs the
//! subscriber that prints them. Hosts embedding the library may install their
//! own subscriber instead.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use post_visibility::observability::init_tracing;
//! use post_visibility::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("picker starting");
//! ```

mod init;

pub use init::init_tracing;
