//! Static bidirectional month-name table.
//!
//! Folder names must be reproducible across platforms, so the Spanish names
//! used for destination directories live in a fixed table instead of going
//! through any runtime locale service. Name-to-number resolution accepts
//! Spanish and English, full names and three-letter abbreviations.

/// Spanish month names, lowercase, indexed by month - 1.
const SPANISH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish three-letter abbreviations, lowercase, no punctuation.
const SPANISH_ABBREVS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Resolve a month name or abbreviation (Spanish or English, any case)
/// to its 1-based month number.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    let month = match name.as_str() {
        // Spanish
        "enero" | "ene" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" | "abr" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" | "ago" => 8,
        "septiembre" | "sep" | "set" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,

        // English
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,

        _ => return None,
    };
    Some(month)
}

/// Spanish full month name for a 1-based month number, lowercase.
///
/// Panics on out-of-range months; callers only pass validated dates.
pub fn spanish_name(month: u32) -> &'static str {
    SPANISH_NAMES[(month - 1) as usize]
}

/// Spanish three-letter abbreviation for a 1-based month number, lowercase.
pub fn spanish_abbrev(month: u32) -> &'static str {
    SPANISH_ABBREVS[(month - 1) as usize]
}

/// Uppercase the first letter, keep the rest as-is ("julio" -> "Julio").
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_names() {
        assert_eq!(month_from_name("enero"), Some(1));
        assert_eq!(month_from_name("julio"), Some(7));
        assert_eq!(month_from_name("diciembre"), Some(12));
    }

    #[test]
    fn test_spanish_abbreviations() {
        assert_eq!(month_from_name("ene"), Some(1));
        assert_eq!(month_from_name("ago"), Some(8));
        assert_eq!(month_from_name("dic"), Some(12));
    }

    #[test]
    fn test_september_variants() {
        assert_eq!(month_from_name("septiembre"), Some(9));
        assert_eq!(month_from_name("sep"), Some(9));
        assert_eq!(month_from_name("set"), Some(9));
    }

    #[test]
    fn test_english_names() {
        assert_eq!(month_from_name("january"), Some(1));
        assert_eq!(month_from_name("aug"), Some(8));
        assert_eq!(month_from_name("december"), Some(12));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(month_from_name("JULIO"), Some(7));
        assert_eq!(month_from_name("Jul"), Some(7));
        assert_eq!(month_from_name("AgO"), Some(8));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(month_from_name("notamonth"), None);
        assert_eq!(month_from_name(""), None);
        assert_eq!(month_from_name("juliet"), None);
    }

    #[test]
    fn test_number_to_name_round_trip() {
        for month in 1..=12 {
            assert_eq!(month_from_name(spanish_name(month)), Some(month));
            assert_eq!(month_from_name(spanish_abbrev(month)), Some(month));
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("julio"), "Julio");
        assert_eq!(title_case("jul"), "Jul");
        assert_eq!(title_case(""), "");
    }
}
