//! Error types for the visibility picker.
//!
//! This module defines the centralized error type [`VisibilityError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Selector operations
//! themselves never fail (invalid gestures are ignored); errors only surface at the
//! boundary with configuration, the async runtime, and the commit channel.

use thiserror::Error;

/// The main error type for visibility picker operations.
///
/// # Examples
///
/// ```
/// use post_visibility::VisibilityError;
///
/// fn validate_config() -> Result<(), VisibilityError> {
///     Err(VisibilityError::Config("commit delay too long".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum VisibilityError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML or has mistyped keys.
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A deferred commit was requested outside of an async runtime.
    ///
    /// The password commit is scheduled on the current tokio runtime; hosts that
    /// drive the flow from a plain thread get this instead of a panic.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The flow was torn down before a choice was committed.
    ///
    /// Observed by the receiving half of the commit channel when the flow is
    /// dismissed or dropped, including while a password commit was still pending.
    #[error("visibility picker dismissed without a commit")]
    Dismissed,
}

/// A specialized `Result` type for visibility picker operations.
pub type Result<T> = std::result::Result<T, VisibilityError>;
