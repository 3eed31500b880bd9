//! Destination path building.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::classify::{spanish_abbrev, spanish_name, title_case, ClassificationResult};
use crate::error::Result;

/// Bucket for files whose name yields no parsable date.
pub const NO_DATE_BUCKET: &str = "sin_fecha";

/// Compute the destination directory for a classification under `base`.
///
/// Dated files go to `{base}/{yyyy}/{MM} {Month}/{dd}{Mon}{yyyy}`, e.g.
/// `base/2025/07 Julio/31Jul2025`; undated files go to `{base}/sin_fecha`.
/// Pure function of its inputs.
pub fn destination_dir(base: &Path, classification: &ClassificationResult) -> PathBuf {
    match classification.date {
        Some(date) => base
            .join(date.year().to_string())
            .join(month_folder(date))
            .join(day_folder(date)),
        None => base.join(NO_DATE_BUCKET),
    }
}

/// Month folder name: zero-padded number plus title-cased Spanish name,
/// "07 Julio".
fn month_folder(date: NaiveDate) -> String {
    format!(
        "{:02} {}",
        date.month(),
        title_case(spanish_name(date.month()))
    )
}

/// Day folder name: zero-padded day, title-cased Spanish abbreviation
/// without punctuation, four-digit year, "31Jul2025".
fn day_folder(date: NaiveDate) -> String {
    format!(
        "{:02}{}{}",
        date.day(),
        title_case(spanish_abbrev(date.month())),
        date.year()
    )
}

/// Ensure a directory exists, creating it recursively if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(y: i32, m: u32, d: u32) -> ClassificationResult {
        ClassificationResult {
            date: NaiveDate::from_ymd_opt(y, m, d),
            is_weekly: false,
        }
    }

    #[test]
    fn test_dated_destination_format() {
        let dir = destination_dir(Path::new("/base"), &classified(2025, 7, 31));
        assert_eq!(dir, PathBuf::from("/base/2025/07 Julio/31Jul2025"));
    }

    #[test]
    fn test_single_digit_day_and_month_are_padded() {
        let dir = destination_dir(Path::new("/base"), &classified(2025, 8, 5));
        assert_eq!(dir, PathBuf::from("/base/2025/08 Agosto/05Ago2025"));
    }

    #[test]
    fn test_no_date_bucket() {
        let dir = destination_dir(Path::new("/base"), &ClassificationResult::default());
        assert_eq!(dir, PathBuf::from("/base/sin_fecha"));
    }

    #[test]
    fn test_deterministic() {
        let base = Path::new("/srv/descargas");
        let c = classified(2024, 2, 29);
        assert_eq!(destination_dir(base, &c), destination_dir(base, &c));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call on an existing directory is a no-op.
        ensure_dir(&nested).unwrap();
    }
}
