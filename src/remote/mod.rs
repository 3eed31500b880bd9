//! Remote source boundary.
//!
//! Provides:
//! - The `RemoteSource` trait the orchestration loop works against
//! - The ssh2-backed SFTP implementation

pub mod sftp;

use std::path::Path;

use crate::error::Result;

pub use sftp::SftpSource;

/// One entry from a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub is_directory: bool,
}

impl RemoteEntry {
    /// Whether this entry should be downloaded: not hidden, not a directory,
    /// and the name cannot escape the local base when joined to it.
    pub fn is_candidate(&self) -> bool {
        !self.is_directory
            && !self.name.starts_with('.')
            && !self.name.contains("..")
            && !self.name.contains('/')
            && !self.name.contains('\\')
    }
}

/// A source of remote files. Listing and transfer are blocking calls.
pub trait RemoteSource {
    /// Whether a remote path exists.
    fn exists(&self, path: &str) -> Result<bool>;

    /// List the entries directly under a remote directory.
    fn list_entries(&self, path: &str) -> Result<Vec<RemoteEntry>>;

    /// Download a remote file to a local path, returning bytes written.
    fn download(&self, remote_path: &str, local_path: &Path) -> Result<u64>;
}
