//! SFTP implementation of the remote source.

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::Path;

use ssh2::{Session, Sftp};

use crate::config::SftpConfig;
use crate::error::{Error, Result};
use crate::remote::{RemoteEntry, RemoteSource};

/// Remote source backed by an SSH session's SFTP subsystem.
pub struct SftpSource {
    session: Session,
    sftp: Sftp,
}

impl SftpSource {
    /// Open a TCP connection, perform the SSH handshake, authenticate with
    /// the configured password, and start the SFTP subsystem.
    pub fn connect(config: &SftpConfig) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let tcp = TcpStream::connect(&addr)
            .map_err(|e| Error::Connection(format!("cannot reach {}: {}", addr, e)))?;

        let mut session = Session::new()
            .map_err(|e| Error::Connection(format!("session setup failed: {}", e)))?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| Error::Connection(format!("handshake with {} failed: {}", addr, e)))?;

        session
            .userauth_password(&config.username, &config.password)
            .map_err(|e| {
                Error::Connection(format!(
                    "authentication failed for '{}': {}",
                    config.username, e
                ))
            })?;

        let sftp = session
            .sftp()
            .map_err(|e| Error::Connection(format!("SFTP subsystem failed: {}", e)))?;

        tracing::debug!("SFTP session established with {}", addr);
        Ok(Self { session, sftp })
    }

    /// Close the SSH session. Errors during disconnect are ignored; the
    /// transfer work is already done by the time this runs.
    pub fn disconnect(&self) {
        let _ = self.session.disconnect(None, "done", None);
    }
}

impl RemoteSource for SftpSource {
    fn exists(&self, path: &str) -> Result<bool> {
        match self.sftp.stat(Path::new(path)) {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    fn list_entries(&self, path: &str) -> Result<Vec<RemoteEntry>> {
        let entries = self.sftp.readdir(Path::new(path))?;

        Ok(entries
            .into_iter()
            .filter_map(|(entry_path, stat)| {
                let name = entry_path.file_name()?.to_str()?.to_string();
                Some(RemoteEntry {
                    name,
                    is_directory: stat.is_dir(),
                })
            })
            .collect())
    }

    fn download(&self, remote_path: &str, local_path: &Path) -> Result<u64> {
        let transfer_err = |message: String| Error::Transfer {
            name: remote_path.to_string(),
            message,
        };

        let mut remote_file = self
            .sftp
            .open(Path::new(remote_path))
            .map_err(|e| transfer_err(e.to_string()))?;
        let mut local_file = File::create(local_path)?;
        let bytes =
            io::copy(&mut remote_file, &mut local_file).map_err(|e| transfer_err(e.to_string()))?;
        Ok(bytes)
    }
}
