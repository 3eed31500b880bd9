//! Error types for the sftp-organizer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Connection-level errors (fatal to the run)
    #[error("SFTP connection failed: {0}")]
    Connection(String),

    #[error("Remote path not found: {0}")]
    RemoteMissing(String),

    // Per-file transfer errors (reported, never abort the batch)
    #[error("Transfer failed for '{name}': {message}")]
    Transfer { name: String, message: String },

    // Run completed but some files failed
    #[error("{0} file(s) failed during the run")]
    PartialFailure(u64),

    // Local root errors
    #[error("Local directory unavailable: {}", .0.display())]
    DirectoryUnavailable(PathBuf),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // SSH/SFTP protocol errors
    #[error("SSH error: {0}")]
    Ssh(#[from] ssh2::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 1;
    pub const CONNECTION_ERROR: i32 = 2;
    pub const DOWNLOAD_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 4;
}
