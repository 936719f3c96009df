//! Error types for configuration loading and project composition.
//!
//! Every variant is fatal at startup: configuration is a one-shot path, so
//! nothing here is retried or downgraded to a default. Each variant carries
//! the offending key, path, or name so the message alone identifies the fix.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Environment resolution errors
    #[error("missing configuration for '{key}': {reason}")]
    MissingConfiguration { key: String, reason: String },

    // Settings file errors
    #[error("failed to load settings file {}: {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },

    #[error("settings file {} has an invalid shape: {detail}", .path.display())]
    Schema { path: PathBuf, detail: String },

    // Project composition errors
    #[error("unknown device '{name}': no such entry in the device registry")]
    UnknownDevice { name: String },

    #[error("duplicate project name '{name}': every produced project must be uniquely named")]
    DuplicateProjectName { name: String },
}
