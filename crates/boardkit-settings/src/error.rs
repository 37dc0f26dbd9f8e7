//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings operations.
///
/// Load-side failures are usually recoverable (callers fall back to
/// defaults); save-side failures are reported to the user.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be loaded.
    #[error("Failed to load settings from {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// The settings file could not be saved.
    #[error("Failed to save settings to {path}: {reason}")]
    Save { path: PathBuf, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error in a legacy config.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
