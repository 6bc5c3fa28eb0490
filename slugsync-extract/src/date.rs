//! Date-like field classification and canonical reformatting.
//!
//! A field counts as date-like by heuristic (its name or element markers),
//! not by a declared schema type. Date-like text that matches one of the
//! known patterns is rewritten into a compact `DDMMYYYY-HHMM` form. The
//! time-of-day in that form is the wall clock at reformat time; the source
//! date's own time is discarded.

use crate::host::FieldHandle;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use regex::{Captures, Regex};
use slugsync_types::FieldName;
use std::sync::LazyLock;

/// Source of the time-of-day used in canonical date values.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Which matcher recognized a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// English month name, day, four-digit year.
    Natural,
    /// `YYYY-MM-DD`, optionally with a time part.
    Iso,
    /// `DD.MM.YY(YY)`.
    DayMonthYear,
    /// `MM/DD/YY(YY)`, or day first when the first part cannot be a month.
    MonthDayYear,
}

/// A successfully reformatted date value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub value: String,
    pub format: DateFormat,
    pub date: NaiveDate,
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static NATURAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:date)?\s*([a-z]+)[\s-]*(\d{1,2})(?:st|nd|rd|th)?[\s,-]*(\d{4})$")
        .expect("static natural date pattern")
});

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:$|[T\s])").expect("static ISO date pattern")
});

static DOTTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4}|\d{2})\b").expect("static dotted date pattern")
});

static SLASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b").expect("static slashed date pattern")
});

/// Whether a field should go through date reformatting.
#[must_use]
pub fn is_date_field(field: &FieldName, handle: &FieldHandle) -> bool {
    field.mentions("date")
        || field.mentions("time")
        || matches!(handle.input_type.as_deref(), Some("date" | "datetime-local"))
        || ["date", "datetime", "timestamp"]
            .iter()
            .any(|ctx| handle.is_within(ctx))
        || handle.has_class("date")
        || handle.has_class("datetime")
}

/// Tries each matcher in order; the first that yields a real calendar date
/// wins. Returns `None` when nothing matches.
#[must_use]
pub fn parse_date_value(text: &str, clock: &dyn Clock) -> Option<ParsedDate> {
    let text = text.trim();
    let now = clock.now();

    if let Some(date) = NATURAL.captures(text).and_then(|c| natural_date(&c)) {
        return Some(ParsedDate {
            value: format!(
                "{}-{:02}{:02}{:02}",
                compact_date(date),
                now.hour(),
                now.minute(),
                now.second()
            ),
            format: DateFormat::Natural,
            date,
        });
    }

    let numeric = [
        (&*ISO, DateFormat::Iso),
        (&*DOTTED, DateFormat::DayMonthYear),
        (&*SLASHED, DateFormat::MonthDayYear),
    ];

    numeric.into_iter().find_map(|(pattern, format)| {
        let caps = pattern.captures(text)?;
        let date = numeric_date(&caps, format)?;
        Some(ParsedDate {
            value: format!(
                "{}-{:02}{:02}",
                compact_date(date),
                now.hour(),
                now.minute()
            ),
            format,
            date,
        })
    })
}

fn compact_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

fn natural_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month_name = caps.get(1)?.as_str().to_lowercase();
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let day = caps.get(2)?.as_str().parse().ok()?;
    let year = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn numeric_date(caps: &Captures<'_>, format: DateFormat) -> Option<NaiveDate> {
    let part = |i: usize| -> Option<u32> { caps.get(i)?.as_str().parse().ok() };
    let (a, b, c) = (part(1)?, part(2)?, part(3)?);

    let (year, month, day) = match format {
        DateFormat::Iso => (a, b, c),
        DateFormat::DayMonthYear => (full_year(caps, 3, c), b, a),
        DateFormat::MonthDayYear if a > 12 => (full_year(caps, 3, c), b, a),
        DateFormat::MonthDayYear => (full_year(caps, 3, c), a, b),
        DateFormat::Natural => return None,
    };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Two-digit years are read as 20YY.
fn full_year(caps: &Captures<'_>, group: usize, year: u32) -> u32 {
    match caps.get(group) {
        Some(m) if m.as_str().len() == 2 => 2000 + year,
        _ => year,
    }
}
