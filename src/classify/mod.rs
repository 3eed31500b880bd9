//! Filename classification.
//!
//! Provides:
//! - Ordered date-extraction heuristics over filenames
//! - The static month-name table shared with destination path building

pub mod heuristics;
pub mod months;

use chrono::NaiveDate;

use heuristics::HeuristicSet;

pub use heuristics::DateCandidate;
pub use months::{month_from_name, spanish_abbrev, spanish_name, title_case};

/// Result of classifying one filename.
///
/// Invariant: `date == None` implies `is_weekly == false`; a weekly marker
/// only exists alongside a resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    /// The calendar date extracted from the filename, if any.
    pub date: Option<NaiveDate>,
    /// Whether the filename described a weekly date range.
    pub is_weekly: bool,
}

/// Classifies filenames into an optional date plus a weekly flag.
///
/// Classification is deterministic and side-effect-free: the same filename
/// always yields the same result. Unparseable names are not errors; they
/// yield an empty result and are routed to the no-date bucket by the filer.
pub struct Classifier {
    heuristics: HeuristicSet,
}

impl Classifier {
    /// Create a classifier. `prefix_marker` configures the literal token
    /// recognized by the prefixed-compact heuristic (empty disables it).
    pub fn new(prefix_marker: &str) -> Self {
        Self {
            heuristics: HeuristicSet::new(prefix_marker),
        }
    }

    /// Classify a filename. Never fails.
    pub fn classify(&self, filename: &str) -> ClassificationResult {
        match self.heuristics.apply(filename) {
            Some(candidate) => ClassificationResult {
                date: Some(candidate.date),
                is_weekly: candidate.weekly,
            },
            None => ClassificationResult::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_name_yields_empty_result() {
        let classifier = Classifier::new("Malla_CHB_");
        let result = classifier.classify("randomfile.txt");
        assert_eq!(result.date, None);
        assert!(!result.is_weekly);
    }

    #[test]
    fn test_weekly_flag_requires_date() {
        let classifier = Classifier::new("Malla_CHB_");
        // Weekly phrasing with an unresolvable month: no date, so no flag.
        let result = classifier.classify("del 1 al 7 de brumario 2025");
        assert_eq!(result.date, None);
        assert!(!result.is_weekly);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = Classifier::new("Malla_CHB_");
        let first = classifier.classify("31Jul2025_reporte.csv");
        let second = classifier.classify("31Jul2025_reporte.csv");
        assert_eq!(first, second);
        assert!(first.date.is_some());
    }
}
