//! French long-form date formatting.

use chrono::{Datelike, NaiveDate};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Formats an ISO date (`YYYY-MM-DD`, optional time suffix) as
/// `1 janvier 2024`.
///
/// Returns `None` when the input does not start with a valid calendar date.
pub fn format_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let (date_part, rest) = (trimmed.get(..10)?, trimmed.get(10..)?);
    if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let month = MONTHS_FR[date.month0() as usize];
    Some(format!("{} {} {}", date.day(), month, date.year()))
}
