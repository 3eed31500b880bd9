//! Ordered filename date heuristics.
//!
//! Each heuristic is a pure matcher from a filename to an optional validated
//! date. They are evaluated in a fixed priority order and the first match
//! wins; an invalid calendar date (day 32, month 13, Feb 30) makes the
//! heuristic a non-match and evaluation falls through to the next one.

use chrono::NaiveDate;
use regex::Regex;

/// A validated date extracted from a filename, plus whether the filename
/// described a weekly range rather than a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCandidate {
    pub date: NaiveDate,
    pub weekly: bool,
}

impl DateCandidate {
    fn daily(date: NaiveDate) -> Self {
        Self {
            date,
            weekly: false,
        }
    }

    fn weekly(date: NaiveDate) -> Self {
        Self { date, weekly: true }
    }
}

type Heuristic = fn(&HeuristicSet, &str) -> Option<DateCandidate>;

/// The compiled heuristics, applied in priority order.
pub struct HeuristicSet {
    weekly_range: Regex,
    prefixed_compact: Option<Regex>,
    day_month_year: Regex,
    compact_numeric: Regex,
}

/// Priority order. First successful match wins; nothing after it runs.
const ORDER: [Heuristic; 4] = [
    HeuristicSet::match_weekly_range,
    HeuristicSet::match_prefixed_compact,
    HeuristicSet::match_day_month_year,
    HeuristicSet::match_compact_numeric,
];

impl HeuristicSet {
    /// Build the heuristic set. `prefix_marker` is the literal token that
    /// introduces an `MMddyyyy` run in one known feed's naming convention
    /// (e.g. `Malla_CHB_`); an empty marker disables that heuristic.
    pub fn new(prefix_marker: &str) -> Self {
        let prefixed_compact = if prefix_marker.is_empty() {
            None
        } else {
            let pattern = format!(r"{}(\d{{8}})", regex::escape(prefix_marker));
            Some(Regex::new(&pattern).expect("valid escaped prefix pattern"))
        };

        Self {
            weekly_range: Regex::new(
                r"(?i)del\s+(\d{1,2})\s+al\s+(\d{1,2})\s+de\s+([A-Za-záéíóúñÑ]+)\s+(\d{4})",
            )
            .expect("valid weekly range pattern"),
            prefixed_compact,
            day_month_year: Regex::new(r"(\d{1,2})([A-Za-z]{3,})(\d{4})")
                .expect("valid day-month-year pattern"),
            compact_numeric: Regex::new(r"(\d{2})(\d{2})(\d{4})")
                .expect("valid compact numeric pattern"),
        }
    }

    /// Apply the heuristics in order and return the first match.
    pub fn apply(&self, filename: &str) -> Option<DateCandidate> {
        ORDER.iter().find_map(|heuristic| heuristic(self, filename))
    }

    /// Weekly range in natural language: "del 26 al 31 de julio 2025".
    /// The range's end day becomes the file's date.
    fn match_weekly_range(&self, filename: &str) -> Option<DateCandidate> {
        let caps = self.weekly_range.captures(filename)?;
        let end_day: u32 = caps[2].parse().ok()?;
        let month = super::months::month_from_name(&caps[3])?;
        let year: i32 = caps[4].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, end_day).map(DateCandidate::weekly)
    }

    /// Configured literal marker followed by eight digits read as MMddyyyy.
    /// This format is fixed; no day/month disambiguation applies.
    fn match_prefixed_compact(&self, filename: &str) -> Option<DateCandidate> {
        let caps = self.prefixed_compact.as_ref()?.captures(filename)?;
        let digits = &caps[1];
        let month: u32 = digits[0..2].parse().ok()?;
        let day: u32 = digits[2..4].parse().ok()?;
        let year: i32 = digits[4..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(DateCandidate::daily)
    }

    /// Day, alphabetic month, four-digit year with no separators: "31Jul2025".
    fn match_day_month_year(&self, filename: &str) -> Option<DateCandidate> {
        let caps = self.day_month_year.captures(filename)?;
        let day: u32 = caps[1].parse().ok()?;
        let month = super::months::month_from_name(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(DateCandidate::daily)
    }

    /// Compact eight-digit run split as two 2-digit groups and a year.
    /// A second group above 12 can only be a day, so the first group is the
    /// month; otherwise day-first is assumed.
    fn match_compact_numeric(&self, filename: &str) -> Option<DateCandidate> {
        let caps = self.compact_numeric.captures(filename)?;
        let p1: u32 = caps[1].parse().ok()?;
        let p2: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;

        let (month, day) = if p2 > 12 { (p1, p2) } else { (p2, p1) };
        NaiveDate::from_ymd_opt(year, month, day).map(DateCandidate::daily)
    }
}
