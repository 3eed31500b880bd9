//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// SFTP feed downloader and organizer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "sftp-organizer",
    version,
    about = "Download files from an SFTP feed and file them into date-based folders",
    long_about = "Downloads every file from a remote SFTP directory and files it under\n\
                  {base}/{year}/{month}/{day} folders derived from the date embedded in\n\
                  its name. Files without a recognizable date go to a sin_fecha bucket."
)]
pub struct Args {
    /// Remote SFTP host.
    #[arg(long)]
    pub host: Option<String>,

    /// Remote SSH port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Login user.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Login password.
    #[arg(short, long, env = "SFTP_PASSWORD")]
    pub password: Option<String>,

    /// Remote directory to download from.
    #[arg(short, long = "remote-path")]
    pub remote_path: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Literal filename marker recognized by the prefixed-date heuristic.
    #[arg(long = "prefix-marker")]
    pub prefix_marker: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the banner and configuration summary.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.sftp.host = host;
        }

        if let Some(port) = self.port {
            config.sftp.port = port;
        }

        if let Some(user) = self.user {
            config.sftp.username = user;
        }

        if let Some(password) = self.password {
            config.sftp.password = password;
        }

        if let Some(remote_path) = self.remote_path {
            config.sftp.remote_base_path = remote_path;
        }

        if let Some(dir) = self.download_directory {
            config.local.download_directory = Some(dir);
        }

        if let Some(marker) = self.prefix_marker {
            config.classifier.prefix_marker = marker;
        }
    }
}
