//! Error types for countdown operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors while constructing or observing a countdown
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("invalid countdown target '{input}': {reason}")]
    InvalidTarget { input: String, reason: String },

    #[error("countdown target '{input}' does not exist in the local time zone")]
    NonexistentLocalTime { input: String },

    #[error("fixed offset of {seconds}s is out of range")]
    InvalidOffset { seconds: i32 },

    #[error("countdown target '{input}' is outside the supported time range")]
    OutOfRange { input: String },

    #[error("countdown engine has been dropped")]
    Closed,
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("failed to locate configuration file")]
    Locate(#[source] confy::ConfyError),

    #[error("configuration file {path} does not exist")]
    Missing { path: PathBuf },
}
