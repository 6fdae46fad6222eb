//! Named holidays: Christmas, Christmas Eve, New Year and New Year's Eve.
//!
//! Holidays resolve within the reference year, except New Year's Day, which
//! always means the *coming* January 1st.

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::error::{OccurrenceError, Result};
use crate::extractor::{Extraction, Extractor, RecognizedDate, Reference};

/// Build a date in `year`, reporting an out-of-range year against the matched text.
fn holiday_date(
    extractor: &'static str,
    caps: &Captures<'_>,
    year: i32,
    month: u32,
    day: u32,
) -> Extraction {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(RecognizedDate::Date)
        .ok_or_else(|| {
            OccurrenceError::new(extractor, &caps[0], format!("year {year} out of range"))
        })
}

/// "christmas" and "christmas eve".
pub struct ChristmasExtractor {
    pattern: Regex,
}

impl ChristmasExtractor {
    const NAME: &'static str = "christmas";

    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?i)\bchristmas(\s+eve)?\b")?,
        })
    }
}

impl Extractor for ChristmasExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, text: &str, reference: &Reference) -> Vec<Extraction> {
        let year = reference.year();
        self.pattern
            .captures_iter(text)
            .map(|caps| {
                let day = if caps.get(1).is_some() { 24 } else { 25 };
                holiday_date(Self::NAME, &caps, year, 12, day)
            })
            .collect()
    }
}

/// "new year", "new years", "new year's", "newyear", "newyears" and the same
/// followed by "eve".
pub struct NewYearExtractor {
    pattern: Regex,
}

impl NewYearExtractor {
    const NAME: &'static str = "new_year";

    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?i)\bnew\s?year'?s?(\s+eve)?\b")?,
        })
    }
}

impl Extractor for NewYearExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, text: &str, reference: &Reference) -> Vec<Extraction> {
        let year = reference.year();
        self.pattern
            .captures_iter(text)
            .map(|caps| {
                if caps.get(1).is_some() {
                    holiday_date(Self::NAME, &caps, year, 12, 31)
                } else {
                    holiday_date(Self::NAME, &caps, year + 1, 1, 1)
                }
            })
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
