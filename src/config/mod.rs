//! Configuration module for the sftp-organizer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging (see `cli::args`)
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ClassifierConfig, Config, LocalConfig, SftpConfig, FALLBACK_DIR_NAME};
pub use validation::validate_config;
