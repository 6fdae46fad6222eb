//! ISO 8601 date and date-time literals.
//!
//! Recognizes `YYYY-MM-DD`, optionally followed by `T` (either case) and an
//! hour, hour:minute, or hour:minute:second. Literals are absolute, so the
//! reference instant plays no part in resolution.

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::error::{OccurrenceError, Result};
use crate::extractor::{Extraction, Extractor, RecognizedDate, Reference};

const NAME: &str = "iso8601";

const PATTERN: &str =
    r"(?i)\b([0-9]{4})-([0-9]{2})-([0-9]{2})(?:t([0-9]{2})(?::([0-9]{2})(?::([0-9]{2}))?)?)?";

/// How much of the time of day a literal spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Granularity {
    Day,
    Hour,
    Minute,
    Second,
}

impl Granularity {
    /// Map the length of a matched token to its granularity.
    fn from_len(len: usize) -> Option<Self> {
        match len {
            10 => Some(Granularity::Day),
            13 => Some(Granularity::Hour),
            16 => Some(Granularity::Minute),
            19 => Some(Granularity::Second),
            _ => None,
        }
    }
}

pub struct IsoExtractor {
    pattern: Regex,
}

impl IsoExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(PATTERN)?,
        })
    }

    fn resolve(&self, caps: &Captures<'_>) -> Extraction {
        let token = &caps[0];
        let fail = |reason: &str| OccurrenceError::new(NAME, token, reason);

        let granularity = Granularity::from_len(token.len())
            .ok_or_else(|| fail("unexpected token length"))?;

        let field = |i: usize| -> u32 {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };
        let year: i32 = caps[1].parse().map_err(|_| fail("invalid year"))?;

        let date = NaiveDate::from_ymd_opt(year, field(2), field(3))
            .ok_or_else(|| fail("invalid calendar date"))?;

        let (hour, minute, second) = match granularity {
            Granularity::Day => (0, 0, 0),
            Granularity::Hour => (field(4), 0, 0),
            Granularity::Minute => (field(4), field(5), 0),
            Granularity::Second => (field(4), field(5), field(6)),
        };

        let dt = date
            .and_hms_opt(hour, minute, second)
            .ok_or_else(|| fail("invalid time of day"))?;

        Ok(RecognizedDate::DateTime(dt))
    }
}

impl Extractor for IsoExtractor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, text: &str, _reference: &Reference) -> Vec<Extraction> {
        self.pattern
            .captures_iter(text)
            .map(|caps| self.resolve(&caps))
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> RecognizedDate {
        let naive: NaiveDateTime = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap();
        RecognizedDate::DateTime(naive)
    }

    fn extract(text: &str) -> Vec<Extraction> {
        IsoExtractor::new()
            .unwrap()
            .extract(text, &Reference::now())
    }

    fn ok(text: &str) -> Vec<RecognizedDate> {
        extract(text).into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_granularity_from_len() {
        assert_eq!(Granularity::from_len(10), Some(Granularity::Day));
        assert_eq!(Granularity::from_len(13), Some(Granularity::Hour));
        assert_eq!(Granularity::from_len(16), Some(Granularity::Minute));
        assert_eq!(Granularity::from_len(19), Some(Granularity::Second));
        assert_eq!(Granularity::from_len(11), None);
    }

    #[test]
    fn test_day_granularity_is_midnight_date_time() {
        assert_eq!(
            ok("In 1990-01-01 we"),
            vec![dt(1990, 1, 1, 0, 0, 0)]
        );
    }

    #[test]
    fn test_each_granularity() {
        assert_eq!(ok("In 1990-01-01T10 we"), vec![dt(1990, 1, 1, 10, 0, 0)]);
        assert_eq!(ok("In 1990-01-01T10:10 we"), vec![dt(1990, 1, 1, 10, 10, 0)]);
        assert_eq!(
            ok("In 1990-01-01T10:10:10 we"),
            vec![dt(1990, 1, 1, 10, 10, 10)]
        );
    }

    #[test]
    fn test_lowercase_separator() {
        assert_eq!(ok("In 1990-01-01t10 we"), vec![dt(1990, 1, 1, 10, 0, 0)]);
        assert_eq!(
            ok("In 1990-01-01t10:10:10 we"),
            vec![dt(1990, 1, 1, 10, 10, 10)]
        );
    }

    #[test]
    fn test_multiple_in_text_order() {
        let text = "In 1990-01-01 and\n  1990-01-01T10 and\n  1990-01-01T10:10 and\n  1990-01-01T10:10:10\n we";
        assert_eq!(
            ok(text),
            vec![
                dt(1990, 1, 1, 0, 0, 0),
                dt(1990, 1, 1, 10, 0, 0),
                dt(1990, 1, 1, 10, 10, 0),
                dt(1990, 1, 1, 10, 10, 10),
            ]
        );
    }

    #[test]
    fn test_trailing_offset_is_ignored() {
        assert_eq!(
            ok("at 2026-03-15T14:00:00Z sharp"),
            vec![dt(2026, 3, 15, 14, 0, 0)]
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_an_error() {
        let out = extract("on 1990-01-32 and 1990-02-02");
        assert_eq!(out.len(), 2);
        let err = out[0].clone().unwrap_err();
        assert_eq!(err.extractor, "iso8601");
        assert_eq!(err.text, "1990-01-32");
        assert_eq!(out[1], Ok(dt(1990, 2, 2, 0, 0, 0)));
    }

    #[test]
    fn test_invalid_time_is_an_error() {
        let out = extract("at 1990-01-01T25:00");
        assert_eq!(out.len(), 1);
        assert!(out[0].is_err());
    }

    #[test]
    fn test_no_literal() {
        assert!(extract("").is_empty());
        assert!(extract("nothing here 1990/01/01").is_empty());
    }
}
