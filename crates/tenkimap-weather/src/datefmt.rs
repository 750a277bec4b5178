//! Localized display formatting for forecast dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::types::FormatError;

/// Japanese single-character weekday names, Sunday first.
const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Display context for a forecast date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateContext {
    /// 7-day board cards: `1/15日（月）`
    Week,
    /// Today popup: `15日（月）`, input is an 8-digit `YYYYMMDD` string
    Today,
    /// Pass the input through unchanged
    Raw,
}

/// Format a machine date string for display.
///
/// Empty input yields an empty string in every context. `Week` accepts any
/// machine-parseable date string; `Today` expects `YYYYMMDD`.
pub fn format_date(input: &str, context: DateContext) -> Result<String, FormatError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    match context {
        DateContext::Week => {
            let date = parse_flexible(input)
                .ok_or_else(|| FormatError::InvalidDate(input.to_string()))?;
            Ok(format!(
                "{}/{}日（{}）",
                date.month(),
                date.day(),
                weekday_ja(&date)
            ))
        }
        DateContext::Today => {
            let date = parse_compact(input)
                .ok_or_else(|| FormatError::InvalidDate(input.to_string()))?;
            Ok(format!("{}日（{}）", date.day(), weekday_ja(&date)))
        }
        DateContext::Raw => Ok(input.to_string()),
    }
}

fn weekday_ja(date: &NaiveDate) -> &'static str {
    WEEKDAYS_JA[date.weekday().num_days_from_sunday() as usize]
}

/// Parse the formats the week endpoint has been seen to emit.
fn parse_flexible(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    None
}

/// Parse an 8-digit `YYYYMMDD` string.
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y%m%d").ok()
}
