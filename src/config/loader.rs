//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sftp: SftpConfig,

    #[serde(default)]
    pub local: LocalConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// SFTP connection settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SftpConfig {
    /// Remote host name or address.
    pub host: String,

    /// SSH port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Login user.
    pub username: String,

    /// Login password. Can also come from the SFTP_PASSWORD environment
    /// variable via the CLI.
    #[serde(default)]
    pub password: String,

    /// Remote directory to list and download from.
    #[serde(default = "default_remote_base_path")]
    pub remote_base_path: String,
}

/// Local filing settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalConfig {
    /// Base directory downloads are filed under. When absent or unwritable
    /// the fallback under the user's home directory is used.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,
}

/// Filename classification settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Literal marker that introduces an MMddyyyy digit run in one known
    /// feed's filenames. Empty disables the prefixed heuristic.
    #[serde(default = "default_prefix_marker")]
    pub prefix_marker: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            prefix_marker: default_prefix_marker(),
        }
    }
}

fn default_port() -> u16 {
    22
}

fn default_remote_base_path() -> String {
    "/".to_string()
}

fn default_prefix_marker() -> String {
    "Malla_CHB_".to_string()
}

/// Folder name used when falling back under the user's home directory.
pub const FALLBACK_DIR_NAME: &str = "DescargasFTP";

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sftp: SftpConfig {
                host: String::new(),
                port: default_port(),
                username: String::new(),
                password: String::new(),
                remote_base_path: default_remote_base_path(),
            },
            local: LocalConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[sftp]
host = "feed.example.com"
username = "descarga"
password = "secreto"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sftp.host, "feed.example.com");
        assert_eq!(config.sftp.port, 22);
        assert_eq!(config.sftp.remote_base_path, "/");
        assert_eq!(config.classifier.prefix_marker, "Malla_CHB_");
        assert!(config.local.download_directory.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[sftp]
host = "feed.example.com"
port = 2222
username = "descarga"
password = "secreto"
remote_base_path = "/salida/diaria"

[local]
download_directory = "/srv/descargas"

[classifier]
prefix_marker = "Feed_XY_"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sftp.port, 2222);
        assert_eq!(config.sftp.remote_base_path, "/salida/diaria");
        assert_eq!(
            config.local.download_directory,
            Some(PathBuf::from("/srv/descargas"))
        );
        assert_eq!(config.classifier.prefix_marker, "Feed_XY_");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
