//! Daily run log.
//!
//! Human-readable, append-only record of what a run did, written under the
//! local base directory and echoed to the console. This is an injected
//! capability: the filer and the orchestration loop receive a `&RunLog`
//! rather than reaching for a global channel. Diagnostics go through
//! `tracing` separately.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Appends timestamped lines to a per-day log file and echoes them to the
/// console. File write failures are swallowed; losing a log line must never
/// interrupt file processing.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Create a log writing to `descarga_log_{yyyyMMdd}.txt` under `base`.
    pub fn new(base: &Path) -> Self {
        let name = format!("descarga_log_{}.txt", Local::now().format("%Y%m%d"));
        Self {
            path: base.join(name),
        }
    }

    /// Log a message to console and the daily file.
    pub fn log(&self, message: &str) {
        println!("{}", message);

        let line = format!(
            "[{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            tracing::debug!("could not append to run log {}: {}", self.path.display(), e);
        }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new(dir.path());

        log.log("first");
        log.log("second");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        // Nonexistent parent directory: the file can never be created.
        let log = RunLog::new(Path::new("/nonexistent/base/dir"));
        log.log("dropped");
    }
}
