//! post-visibility: the visibility picker flow of a blogging app.
//!
//! A post can be Public, Private, or Password protected. This crate provides:
//! - A state machine for choosing one of the three, including password entry
//! - A single-shot commit channel that reports the final choice exactly once
//! - A cancellable delayed commit for saved passwords
//! - Presentation view models for hosts that draw the picker
//! - A pass-through adapter for media search grids
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation host (main.rs, or an embedding app)   │  ← Gestures in, view model out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Flow Runtime (flow/)                               │  ← Commit channel
//! │  - Executes actions                                 │  ← Delayed commit task
//! │  - Teardown cancels pending commits                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Phase transitions                                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                   ┌───────────────────┐
//! │ Domain        │                   │ UI (ui/)          │
//! │ (domain/)     │                   │ - View models     │
//! │ - Post        │                   └───────────────────┘
//! │ - Visibility  │
//! │ - Errors      │
//! └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selector state machine with event/action model
//! - [`domain`]: Core domain types (post, visibility, errors)
//! - [`flow`]: Runtime owner of one picker instance
//! - [`media`]: Media search grid adapter
//! - [`ui`]: View models
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! # async fn demo() -> post_visibility::Result<()> {
//! use post_visibility::{Config, Post, PostStatus, PostVisibility, VisibilityChoice, VisibilityFlow};
//!
//! let post = Post::new(Some(PostStatus::Draft), None);
//! let (mut flow, receiver) = VisibilityFlow::new(&post, &Config::default())?;
//!
//! flow.select_visibility(PostVisibility::Protected);
//! flow.update_password_draft("hunter2");
//! flow.commit_password();
//!
//! let choice = receiver.await?;
//! assert_eq!(choice, VisibilityChoice::Protected { password: "hunter2".into() });
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Tagged Phases
//!
//! The selector's state is a sum type (`Idle`, `EnteringPassword`, `Committing`,
//! `Committed`), so a focused password field always belongs to a protected choice
//! and a public choice never carries a password.
//!
//! ## Exactly-Once Commit
//!
//! The commit sender is moved out of the flow by the first commit. Once a commit
//! has started, every further gesture is ignored.

pub mod app;
pub mod domain;
pub mod flow;
pub mod media;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, SelectorPhase, SelectorState};
pub use domain::{Post, PostStatus, PostVisibility, Result, VisibilityChoice, VisibilityError};
pub use flow::{CommitReceiver, VisibilityFlow};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Default delay between saving a password and committing it.
const DEFAULT_COMMIT_DELAY_MS: u64 = 550;

/// Longest accepted commit delay.
const MAX_COMMIT_DELAY_MS: u64 = 10_000;

/// Default minimum media search term length.
const DEFAULT_MIN_SEARCH_LENGTH: usize = 2;

/// Picker configuration.
///
/// # Example
///
/// ```toml
/// commit_delay_ms = 550
/// min_search_length = 2
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between saving a password and committing it, so an on-screen
    /// keyboard can dismiss first. Default: 550 ms
    pub commit_delay: Duration,

    /// Shortest media search term that is sent to the source; shorter terms
    /// cancel the search. Default: 2
    pub min_search_length: usize,

    /// Tracing filter directive, e.g. `debug` or `post_visibility=trace`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_delay: Duration::from_millis(DEFAULT_COMMIT_DELAY_MS),
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            trace_level: None,
        }
    }
}

/// On-disk shape of [`Config`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    commit_delay_ms: Option<u64>,
    min_search_length: Option<usize>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map, e.g. host-provided settings.
    ///
    /// # Parsing Rules
    ///
    /// - `commit_delay_ms`: milliseconds, at most 10 000 (falls back to 550)
    /// - `min_search_length`: positive integer (falls back to 2)
    /// - `trace_level`: copied as-is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use post_visibility::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("commit_delay_ms".to_string(), "300".to_string());
    /// map.insert("min_search_length".to_string(), "zero".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.commit_delay, Duration::from_millis(300));
    /// assert_eq!(config.min_search_length, 2);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let commit_delay_ms = config
            .get("commit_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms <= MAX_COMMIT_DELAY_MS)
            .unwrap_or(DEFAULT_COMMIT_DELAY_MS);

        let min_search_length = config
            .get("min_search_length")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MIN_SEARCH_LENGTH);

        Self {
            commit_delay: Duration::from_millis(commit_delay_ms),
            min_search_length,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::Io`] if the file cannot be read,
    /// [`VisibilityError::Toml`] if it is not valid TOML or has unknown keys, and
    /// [`VisibilityError::Config`] if a value is out of range.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)?;

        let defaults = Self::default();
        let config = Self {
            commit_delay: file
                .commit_delay_ms
                .map_or(defaults.commit_delay, Duration::from_millis),
            min_search_length: file.min_search_length.unwrap_or(defaults.min_search_length),
            trace_level: file.trace_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::Config`] for a zero `min_search_length` or a
    /// commit delay above 10 seconds.
    pub fn validate(&self) -> Result<()> {
        if self.min_search_length == 0 {
            return Err(VisibilityError::Config(
                "min_search_length must be at least 1".to_string(),
            ));
        }
        if self.commit_delay > Duration::from_millis(MAX_COMMIT_DELAY_MS) {
            return Err(VisibilityError::Config(format!(
                "commit_delay_ms must be at most {MAX_COMMIT_DELAY_MS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.commit_delay, Duration::from_millis(550));
        assert_eq!(config.min_search_length, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_map_rejects_out_of_range_delay() {
        let map = BTreeMap::from([
            ("commit_delay_ms".to_string(), "60000".to_string()),
            ("trace_level".to_string(), "debug".to_string()),
        ]);
        let config = Config::from_map(&map);
        assert_eq!(config.commit_delay, Duration::from_millis(550));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_file_reads_partial_toml() {
        let file = write_config("commit_delay_ms = 200\n");
        let config = Config::from_file(file.path()).expect("valid config");
        assert_eq!(config.commit_delay, Duration::from_millis(200));
        assert_eq!(config.min_search_length, 2);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let file = write_config("commit_delay = 200\n");
        assert!(matches!(Config::from_file(file.path()), Err(VisibilityError::Toml(_))));
    }

    #[test]
    fn from_file_rejects_zero_search_length() {
        let file = write_config("min_search_length = 0\n");
        assert!(matches!(Config::from_file(file.path()), Err(VisibilityError::Config(_))));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Config::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(VisibilityError::Io(_))));
    }
}
