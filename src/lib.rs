//! SFTP Organizer - download a remote feed and file it by date.
//!
//! This library downloads files from a remote SFTP directory and files each
//! one into a date-derived folder hierarchy under a local base directory.
//!
//! # Features
//!
//! - Ordered filename date heuristics (weekly ranges, prefixed compact
//!   dates, day-month-year runs, compact numeric dates)
//! - Deterministic, idempotent filing with a no-date fallback bucket
//! - Resume safety: already-downloaded files are re-filed, never re-fetched
//! - Daily append-only run log next to the downloads
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sftp_organizer::{organize, Classifier, RunLog};
//!
//! let classifier = Classifier::new("Malla_CHB_");
//! let base = Path::new("/srv/descargas");
//! let log = RunLog::new(base);
//!
//! let name = "31Jul2025_reporte.csv";
//! organize(&classifier, name, &base.join(name), base, &log);
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod filer;
pub mod logging;
pub mod output;
pub mod remote;

// Re-exports for convenience
pub use classify::{ClassificationResult, Classifier};
pub use config::Config;
pub use error::{Error, Result};
pub use filer::{destination_dir, organize, OrganizeOutcome};
pub use logging::RunLog;
pub use remote::{RemoteEntry, RemoteSource, SftpSource};
