//! Filing downloaded files into the date-derived folder tree.
//!
//! Provides:
//! - Destination path building from a classification
//! - The organize step: create the destination, move the file, never
//!   overwrite

pub mod paths;

use std::fs;
use std::path::Path;

use crate::classify::Classifier;
use crate::logging::RunLog;

pub use paths::{destination_dir, ensure_dir, NO_DATE_BUCKET};

/// Terminal state of organizing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeOutcome {
    /// File was moved into its destination directory.
    Moved,
    /// A same-named file already exists at the destination; nothing changed.
    SkippedExists,
    /// Directory creation or the move itself failed; the file stays where
    /// it was.
    Failed,
}

/// Classify `filename` and move the file at `current_path` into its
/// destination under `base`.
///
/// Errors are reported through `log` and folded into the returned outcome;
/// one file failing must not abort the batch. Idempotent: re-running on an
/// already-filed name finds the destination occupied and skips.
pub fn organize(
    classifier: &Classifier,
    filename: &str,
    current_path: &Path,
    base: &Path,
    log: &RunLog,
) -> OrganizeOutcome {
    let classification = classifier.classify(filename);
    let dest_dir = destination_dir(base, &classification);

    if let Err(e) = ensure_dir(&dest_dir) {
        log.log(&format!(
            "Error creando directorio destino {}: {}",
            dest_dir.display(),
            e
        ));
        return OrganizeOutcome::Failed;
    }

    let dest_path = dest_dir.join(filename);
    if dest_path.exists() {
        log.log(&format!(
            "Ya existe en destino, no se sobrescribe: {}",
            dest_path.display()
        ));
        return OrganizeOutcome::SkippedExists;
    }

    match fs::rename(current_path, &dest_path) {
        Ok(()) => {
            log.log(&format!("Archivo organizado en: {}", dest_path.display()));
            OrganizeOutcome::Moved
        }
        Err(e) => {
            log.log(&format!("Error organizando {}: {}", filename, e));
            OrganizeOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new("Malla_CHB_")
    }

    fn write_file(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"contenido").unwrap();
        path
    }

    #[test]
    fn test_moves_dated_file_into_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path();
        let log = RunLog::new(base);
        let source = write_file(base, "31Jul2025_reporte.csv");

        let outcome = organize(&classifier(), "31Jul2025_reporte.csv", &source, base, &log);

        assert_eq!(outcome, OrganizeOutcome::Moved);
        assert!(!source.exists());
        assert!(base
            .join("2025/07 Julio/31Jul2025/31Jul2025_reporte.csv")
            .is_file());
    }

    #[test]
    fn test_undated_file_goes_to_no_date_bucket() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path();
        let log = RunLog::new(base);
        let source = write_file(base, "randomfile.txt");

        let outcome = organize(&classifier(), "randomfile.txt", &source, base, &log);

        assert_eq!(outcome, OrganizeOutcome::Moved);
        assert!(base.join("sin_fecha/randomfile.txt").is_file());
    }

    #[test]
    fn test_second_call_skips_without_overwriting() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path();
        let log = RunLog::new(base);
        let source = write_file(base, "31Jul2025_reporte.csv");

        organize(&classifier(), "31Jul2025_reporte.csv", &source, base, &log);

        // A fresh download of the same name arrives at the base again.
        let again = write_file(base, "31Jul2025_reporte.csv");
        fs::write(&again, b"otro contenido").unwrap();

        let outcome = organize(&classifier(), "31Jul2025_reporte.csv", &again, base, &log);

        assert_eq!(outcome, OrganizeOutcome::SkippedExists);
        // The new copy stays where it was; the filed one is untouched.
        assert!(again.exists());
        let filed = base.join("2025/07 Julio/31Jul2025/31Jul2025_reporte.csv");
        assert_eq!(fs::read(&filed).unwrap(), b"contenido");
    }

    #[test]
    fn test_missing_source_fails_without_panicking() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path();
        let log = RunLog::new(base);
        let missing = base.join("31Jul2025_gone.csv");

        let outcome = organize(&classifier(), "31Jul2025_gone.csv", &missing, base, &log);

        assert_eq!(outcome, OrganizeOutcome::Failed);
    }
}
