//! Project schedule duration computation.
//!
//! The dashboard content stores its start and end dates as localized
//! French strings (`"08 Décembre 2025"`). This module turns a pair of
//! those strings into the inclusive duration label shown in the header,
//! falling back to a hand-written label when the content is malformed.

use chrono::NaiveDate;

/// French month names, in calendar order. Matching is exact and
/// case-sensitive, mirroring the dashboard content.
const FRENCH_MONTHS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Decomposed `"<day> <MonthName> <year>"` date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    day: u32,
    /// 1-based calendar month.
    month: u32,
    year: i32,
}

/// Splits a localized date string into its numeric parts.
///
/// Returns `None` when the string has fewer than three tokens, the day or
/// year is not numeric, or the month name is not in [`FRENCH_MONTHS`].
fn parse_parts(input: &str) -> Option<DateParts> {
    let mut tokens = input.split_whitespace();
    let day = tokens.next()?.parse().ok()?;
    let month_name = tokens.next()?;
    let year = tokens.next()?.parse().ok()?;

    let month = FRENCH_MONTHS
        .iter()
        .position(|name| *name == month_name)
        .map(|index| index as u32 + 1)?;

    Some(DateParts { day, month, year })
}

/// Parses a localized date string into a calendar date.
///
/// Impossible dates ("31 Février 2025") are rejected along with
/// malformed strings.
fn parse_french_date(input: &str) -> Option<NaiveDate> {
    let parts = parse_parts(input)?;
    NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
}

/// Computes the inclusive duration label between two localized dates.
///
/// The span counts both the start and the end day, so equal dates yield
/// one day. The week count is the day count divided by seven, rounded
/// half away from zero (`f64::round`).
///
/// Returns `fallback` when either input fails to parse; display code must
/// never fail on malformed content.
///
/// # Examples
///
/// ```
/// use jalon_core::schedule::compute_duration;
///
/// let label = compute_duration("08 Décembre 2025", "30 Décembre 2025", "n/a");
/// assert_eq!(label, "23 jours (3 semaines)");
/// ```
pub fn compute_duration(start: &str, end: &str, fallback: &str) -> String {
    let (Some(start), Some(end)) = (parse_french_date(start), parse_french_date(end)) else {
        return fallback.to_string();
    };

    let total_days = (end - start).num_days().abs() + 1;
    let weeks = (total_days as f64 / 7.0).round() as i64;

    format!("{total_days} jours ({weeks} semaines)")
}
