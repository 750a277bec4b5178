//! Percentage extraction from localized precipitation text.

use std::fmt;

/// Marker the backend appends to precipitation values, e.g. `４０パーセント`.
const PERCENT_MARKER: &str = "パーセント";

/// Offset between full-width digits (`０`..`９`) and ASCII digits.
const FULLWIDTH_DIGIT_OFFSET: u32 = 0xFEE0;

/// Result of extracting a precipitation chance from backend text.
///
/// The backend sends either a localized percentage or a placeholder such as
/// `－`; placeholders are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecipChance {
    Percent(i32),
    Text(String),
}

impl fmt::Display for PrecipChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecipChance::Percent(n) => write!(f, "{}", n),
            PrecipChance::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Extract a percentage from localized text.
///
/// When the percent marker is present, it is stripped, full-width digits are
/// normalized to ASCII, and the remainder is parsed as an integer. Text whose
/// remainder still fails to parse is returned as-is; text without the marker
/// is always returned unchanged.
pub fn extract_percent(input: &str) -> PrecipChance {
    if !input.contains(PERCENT_MARKER) {
        return PrecipChance::Text(input.to_string());
    }

    let stripped = input.replace(PERCENT_MARKER, "");
    let normalized: String = stripped.chars().map(normalize_digit).collect();

    match normalized.trim().parse::<i32>() {
        Ok(n) => PrecipChance::Percent(n),
        Err(_) => PrecipChance::Text(stripped),
    }
}

fn normalize_digit(c: char) -> char {
    if ('０'..='９').contains(&c) {
        // Fixed code-point offset between full-width and ASCII digits
        char::from_u32(c as u32 - FULLWIDTH_DIGIT_OFFSET).unwrap_or(c)
    } else {
        c
    }
}
