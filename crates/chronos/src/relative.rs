//! Relative-day expressions resolved against the reference date.
//!
//! Four independent recognitions run over the full text, and their results
//! are concatenated in this order:
//!
//! 1. Named days: "today", "yesterday", "tomorrow", "day before yesterday",
//!    "day after tomorrow".
//! 2. Magnitudes: "in 3 days", "next 2 weeks", "a month ago", "10 years back".
//! 3. Unit last/next: "last week", "next month", "next year".
//! 4. Weekday last/next: "last wednesday", "next friday".
//!
//! Within each recognition, results follow text order.
//!
//! Months and years are fixed spans of 30 and 365 days, not calendar-aware.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{OccurrenceError, Result};
use crate::extractor::{Extraction, Extractor, RecognizedDate, Reference};

const NAME: &str = "relative_day";

const NAMED_DAY: &str =
    r"(?i)\b(day\s+before\s+yesterday|day\s+after\s+tomorrow|yesterday|tomorrow|today)\b";

const MAGNITUDE: &str =
    r"(?i)\b(?:(next|in)\s+)?([0-9]+|a)\s+(day|week|month|year)s?(?:\s+(ago|back))?\b";

const UNIT_LAST_NEXT: &str = r"(?i)\b(last|next)\s+(week|month|year)\b";

const WEEKDAY_LAST_NEXT: &str =
    r"(?i)\b(last|next)\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b";

/// A calendar unit with its fixed length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Some(Unit::Day),
            "week" => Some(Unit::Week),
            "month" => Some(Unit::Month),
            "year" => Some(Unit::Year),
            _ => None,
        }
    }

    fn days(self) -> i64 {
        match self {
            Unit::Day => 1,
            Unit::Week => 7,
            Unit::Month => 30,
            Unit::Year => 365,
        }
    }
}

/// Which way a "last"/"next" phrase points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Last,
    Next,
}

impl Direction {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Some(Direction::Last),
            "next" => Some(Direction::Next),
            _ => None,
        }
    }

    fn sign(self) -> i64 {
        match self {
            Direction::Last => -1,
            Direction::Next => 1,
        }
    }
}

/// Parse a weekday name (case-insensitive, full names only).
fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Day offset of a named day word. Internal whitespace is normalized first.
fn named_day_offset(s: &str) -> Option<i64> {
    let words: Vec<String> = s.split_whitespace().map(str::to_ascii_lowercase).collect();
    match words.join(" ").as_str() {
        "today" => Some(0),
        "yesterday" => Some(-1),
        "tomorrow" => Some(1),
        "day before yesterday" => Some(-2),
        "day after tomorrow" => Some(2),
        _ => None,
    }
}

/// Day offset for "last/next <weekday>" given Monday-based indices (0..=6).
///
/// "last" on the same weekday goes back a full week; "last" for a later
/// weekday goes back `7 - today`. "next" for the same or a later weekday goes
/// forward `7 + target - today`; for an earlier weekday the offset is
/// `target - today`.
fn weekday_offset(direction: Direction, today: i64, target: i64) -> i64 {
    match direction {
        Direction::Last => {
            if target == today {
                -7
            } else if target < today {
                -(today - target)
            } else {
                -(7 - today)
            }
        }
        Direction::Next => {
            if target >= today {
                7 + target - today
            } else {
                target - today
            }
        }
    }
}

/// How a matched magnitude expression resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    /// Signed day delta from the reference date.
    Offset(i64),
    /// Matched but not a legal combination; contributes nothing.
    Rejected(&'static str),
}

pub struct RelativeDayExtractor {
    named_day: Regex,
    magnitude: Regex,
    unit_last_next: Regex,
    weekday_last_next: Regex,
}

impl RelativeDayExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            named_day: Regex::new(NAMED_DAY)?,
            magnitude: Regex::new(MAGNITUDE)?,
            unit_last_next: Regex::new(UNIT_LAST_NEXT)?,
            weekday_last_next: Regex::new(WEEKDAY_LAST_NEXT)?,
        })
    }

    fn named_days(&self, text: &str, today: NaiveDate, out: &mut Vec<Extraction>) {
        for caps in self.named_day.captures_iter(text) {
            if let Some(offset) = named_day_offset(&caps[1]) {
                out.push(shift(today, offset, &caps));
            }
        }
    }

    fn magnitudes(&self, text: &str, today: NaiveDate, out: &mut Vec<Extraction>) {
        for caps in self.magnitude.captures_iter(text) {
            match classify_magnitude(&caps) {
                Ok(Magnitude::Offset(delta)) => out.push(shift(today, delta, &caps)),
                Ok(Magnitude::Rejected(why)) => {
                    debug!(
                        extractor = NAME,
                        text = &caps[0],
                        reason = why,
                        "occurrence rejected"
                    );
                }
                Err(e) => out.push(Err(e)),
            }
        }
    }

    fn unit_last_next(&self, text: &str, today: NaiveDate, out: &mut Vec<Extraction>) {
        for caps in self.unit_last_next.captures_iter(text) {
            let (Some(direction), Some(unit)) =
                (Direction::parse(&caps[1]), Unit::parse(&caps[2]))
            else {
                continue;
            };
            out.push(shift(today, direction.sign() * unit.days(), &caps));
        }
    }

    fn weekday_last_next(&self, text: &str, today: NaiveDate, out: &mut Vec<Extraction>) {
        let today_index = today.weekday().num_days_from_monday() as i64;
        for caps in self.weekday_last_next.captures_iter(text) {
            let (Some(direction), Some(weekday)) =
                (Direction::parse(&caps[1]), parse_weekday(&caps[2]))
            else {
                continue;
            };
            let target_index = weekday.num_days_from_monday() as i64;
            let offset = weekday_offset(direction, today_index, target_index);
            out.push(shift(today, offset, &caps));
        }
    }
}

/// Decide the day delta of a magnitude match.
///
/// Exactly one direction marker is required: a leading "next"/"in" moves
/// forward, a trailing "ago"/"back" moves backward. The count "a" means one,
/// but "next a <unit>" is rejected.
fn classify_magnitude(caps: &Captures<'_>) -> std::result::Result<Magnitude, OccurrenceError> {
    let leading = caps.get(1).map(|m| m.as_str().to_ascii_lowercase());
    let trailing = caps.get(4).is_some();

    let sign = match (leading.is_some(), trailing) {
        (true, true) => return Ok(Magnitude::Rejected("both leading and trailing direction")),
        (false, false) => return Ok(Magnitude::Rejected("no direction")),
        (true, false) => 1,
        (false, true) => -1,
    };

    let count_str = &caps[2];
    let count: i64 = if count_str.eq_ignore_ascii_case("a") {
        if leading.as_deref() == Some("next") {
            return Ok(Magnitude::Rejected("'next a' is not a count"));
        }
        1
    } else {
        count_str
            .parse()
            .map_err(|_| OccurrenceError::new(NAME, &caps[0], "count out of range"))?
    };

    let unit = Unit::parse(&caps[3])
        .ok_or_else(|| OccurrenceError::new(NAME, &caps[0], "unknown unit"))?;
    let delta = count
        .checked_mul(unit.days())
        .ok_or_else(|| OccurrenceError::new(NAME, &caps[0], "offset out of range"))?;

    Ok(Magnitude::Offset(sign * delta))
}

/// Move `today` by `days`, reporting chrono overflow against the matched text.
fn shift(today: NaiveDate, days: i64, caps: &Captures<'_>) -> Extraction {
    Duration::try_days(days)
        .and_then(|d| today.checked_add_signed(d))
        .map(RecognizedDate::Date)
        .ok_or_else(|| OccurrenceError::new(NAME, &caps[0], "date out of range"))
}

impl Extractor for RelativeDayExtractor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, text: &str, reference: &Reference) -> Vec<Extraction> {
        let today = reference.today();
        let mut out = Vec::new();
        self.named_days(text, today, &mut out);
        self.magnitudes(text, today, &mut out);
        self.unit_last_next(text, today, &mut out);
        self.weekday_last_next(text, today, &mut out);
        out
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
