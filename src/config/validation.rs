//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration. Runs before any network or
/// filesystem work.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host(&config.sftp.host)?;
    validate_port(config.sftp.port)?;
    validate_username(&config.sftp.username)?;
    validate_password(&config.sftp.password)?;
    validate_remote_base_path(&config.sftp.remote_base_path)?;

    Ok(())
}

/// Validate the remote host.
pub fn validate_host(host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(Error::MissingConfig("sftp.host".to_string()));
    }

    Ok(())
}

/// Validate the SSH port.
pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(Error::ConfigValidation {
            field: "sftp.port".to_string(),
            message: "Port must be between 1 and 65535".to_string(),
        });
    }

    Ok(())
}

/// Validate the login user.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::MissingConfig("sftp.username".to_string()));
    }

    Ok(())
}

/// Validate the login password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::MissingConfig(
            "sftp.password (or SFTP_PASSWORD environment variable)".to_string(),
        ));
    }

    // Check for placeholder values
    let lower = password.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_password") {
        return Err(Error::ConfigValidation {
            field: "sftp.password".to_string(),
            message: "Password appears to be a placeholder. Please provide the actual credential."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the remote base path.
pub fn validate_remote_base_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::MissingConfig("sftp.remote_base_path".to_string()));
    }

    Ok(())
}
