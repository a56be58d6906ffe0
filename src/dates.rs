//! Lazy calendar resolution for ambiguous date tokens.
//!
//! Chat exports write dates the way the exporting device's locale does:
//! `13.01.23`, `13/01/2023`, `1/13/23`, ... Two-digit day/month pairs are
//! inherently ambiguous between day-first and month-first conventions, and
//! the export carries no locale hint. This module resolves a token with an
//! ordered chain of candidate strategies, first match wins:
//!
//! 1. Day-first templates (`%d.%m.%y`, `%d/%m/%y`, `%d.%m.%Y`, `%d/%m/%Y`)
//! 2. Month-first templates (`%m/%d/%y`, `%m.%d.%y`, `%m/%d/%Y`, `%m.%d.%Y`)
//! 3. A component heuristic: if the first component exceeds 12 the token must
//!    be day-first, if the second exceeds 12 it must be month-first; re-try
//!    the corresponding template list.
//!
//! If nothing matches, the token is unresolvable and callers pass the raw
//! string through for display ([`format_date`] does exactly that).
//!
//! Note the consequence of the ordering: for a token both conventions could
//! parse (`01.02.23`), the day-first list wins.

use chrono::{Datelike, NaiveDate};

use crate::lang::Language;

/// Day-first templates, tried before month-first.
const DAY_FIRST_FORMATS: &[&str] = &["%d.%m.%y", "%d/%m/%y", "%d.%m.%Y", "%d/%m/%Y"];

/// Month-first templates.
const MONTH_FIRST_FORMATS: &[&str] = &["%m/%d/%y", "%m.%d.%y", "%m/%d/%Y", "%m.%d.%Y"];

/// A calendar date resolved from a source token.
///
/// Deliberately not stored on [`MessageRecord`](crate::MessageRecord): the
/// record keeps the source token, and resolution happens on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParsedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for ParsedDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Day/month ordering deduced from the numeric components of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrdering {
    /// First component > 12, so it can only be a day.
    DayFirst,
    /// Second component > 12, so the first can only be a month.
    MonthFirst,
}

/// Deduces the component ordering of a date token, when its numbers force one.
///
/// Returns `None` when both components are ≤ 12 (genuinely ambiguous) or the
/// token doesn't split into numeric components.
pub fn ordering_hint(token: &str) -> Option<DateOrdering> {
    let mut parts = token.split(['.', '/']);
    let first: u32 = parts.next()?.trim().parse().ok()?;
    let second: u32 = parts.next()?.trim().parse().ok()?;

    if first > 12 && second <= 12 {
        Some(DateOrdering::DayFirst)
    } else if second > 12 && first <= 12 {
        Some(DateOrdering::MonthFirst)
    } else {
        None
    }
}

fn try_formats(token: &str, formats: &[&str]) -> Option<ParsedDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
        .map(ParsedDate::from)
}

/// Resolves a date token to a calendar date.
///
/// Returns `None` for unresolvable tokens; the caller keeps the raw token as
/// the display value in that case.
///
/// # Example
///
/// ```rust
/// use chatpress::dates::resolve_date;
///
/// let d = resolve_date("13.01.23").unwrap();
/// assert_eq!((d.year, d.month, d.day), (2023, 1, 13));
///
/// // Month-first when the second component can't be a month
/// let d = resolve_date("01/13/23").unwrap();
/// assert_eq!((d.month, d.day), (1, 13));
///
/// assert!(resolve_date("not-a-date").is_none());
/// ```
pub fn resolve_date(token: &str) -> Option<ParsedDate> {
    if let Some(date) = try_formats(token, DAY_FIRST_FORMATS) {
        return Some(date);
    }
    if let Some(date) = try_formats(token, MONTH_FIRST_FORMATS) {
        return Some(date);
    }

    match ordering_hint(token) {
        Some(DateOrdering::DayFirst) => try_formats(token, DAY_FIRST_FORMATS),
        Some(DateOrdering::MonthFirst) => try_formats(token, MONTH_FIRST_FORMATS),
        None => None,
    }
}

/// Formats a date token as `D Month YYYY` with localized month names.
///
/// Unresolvable tokens pass through unmodified — a display artifact, never an
/// error.
///
/// # Example
///
/// ```rust
/// use chatpress::dates::format_date;
/// use chatpress::lang::Language;
///
/// assert_eq!(format_date("13.01.23", Language::De), "13 Januar 2023");
/// assert_eq!(format_date("garbage", Language::De), "garbage");
/// ```
pub fn format_date(token: &str, lang: Language) -> String {
    match resolve_date(token) {
        Some(date) => {
            let months = lang.month_names();
            format!("{} {} {}", date.day, months[date.month as usize - 1], date.year)
        }
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_unambiguous() {
        // day=13 > 12, only a day-first read is valid
        let d = resolve_date("13.01.23").unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 1, 13));
    }

    #[test]
    fn test_month_first_unambiguous() {
        // second=13 can't be a month, so the first component is the month
        let d = resolve_date("01/13/23").unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 1, 13));
    }

    #[test]
    fn test_ambiguous_day_first_wins() {
        // both components ≤ 12: the explicit day-first list wins
        let d = resolve_date("01.02.23").unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 2, 1));
    }

    #[test]
    fn test_four_digit_year() {
        let d = resolve_date("26.10.2025").unwrap();
        assert_eq!((d.year, d.month, d.day), (2025, 10, 26));

        let d = resolve_date("15/01/2024").unwrap();
        assert_eq!((d.year, d.month, d.day), (2024, 1, 15));
    }

    #[test]
    fn test_single_digit_components() {
        let d = resolve_date("1.2.23").unwrap();
        assert_eq!((d.year, d.month, d.day), (2023, 2, 1));
    }

    #[test]
    fn test_unresolvable() {
        assert!(resolve_date("").is_none());
        assert!(resolve_date("13.13.23").is_none());
        assert!(resolve_date("2023-01-13").is_none());
        assert!(resolve_date("hello").is_none());
    }

    #[test]
    fn test_ordering_hint() {
        assert_eq!(ordering_hint("13.01.23"), Some(DateOrdering::DayFirst));
        assert_eq!(ordering_hint("01/13/23"), Some(DateOrdering::MonthFirst));
        assert_eq!(ordering_hint("01.02.23"), None);
        assert_eq!(ordering_hint("13.13.23"), None);
        assert_eq!(ordering_hint("garbage"), None);
    }

    #[test]
    fn test_format_date_localized() {
        assert_eq!(format_date("13.01.23", Language::En), "13 January 2023");
        assert_eq!(format_date("13.01.23", Language::De), "13 Januar 2023");
        assert_eq!(format_date("13.01.23", Language::Es), "13 Enero 2023");
        assert_eq!(format_date("13.01.23", Language::Fr), "13 Janvier 2023");
        assert_eq!(format_date("13.01.23", Language::It), "13 Gennaio 2023");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("99.99.99", Language::En), "99.99.99");
    }

    #[test]
    fn test_parsed_date_ordering() {
        let a = resolve_date("01.02.23").unwrap();
        let b = resolve_date("02.02.23").unwrap();
        assert!(a < b);
    }
}
