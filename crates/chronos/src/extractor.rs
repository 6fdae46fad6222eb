//! The contract every extractor implements, and the values they produce.
//!
//! An [`Extractor`] scans text for one family of lexical patterns and resolves
//! each occurrence against a shared [`Reference`]. Extractors hold nothing but
//! their compiled patterns, so one instance can serve any number of calls and
//! any number of threads.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::OccurrenceError;

/// A date or date-time recognized in text.
///
/// ISO literals always produce [`RecognizedDate::DateTime`], even at day
/// granularity (with a zero time of day). Every other extractor produces
/// [`RecognizedDate::Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecognizedDate {
    /// A calendar date.
    Date(NaiveDate),
    /// A calendar date with a time of day.
    DateTime(NaiveDateTime),
}

impl RecognizedDate {
    /// The calendar date, dropping any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            RecognizedDate::Date(d) => *d,
            RecognizedDate::DateTime(dt) => dt.date(),
        }
    }

    pub fn is_date_time(&self) -> bool {
        matches!(self, RecognizedDate::DateTime(_))
    }
}

impl From<NaiveDate> for RecognizedDate {
    fn from(d: NaiveDate) -> Self {
        RecognizedDate::Date(d)
    }
}

impl From<NaiveDateTime> for RecognizedDate {
    fn from(dt: NaiveDateTime) -> Self {
        RecognizedDate::DateTime(dt)
    }
}

/// The "now" anchor shared by every extractor during one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    instant: DateTime<Utc>,
}

impl Reference {
    /// Anchor at the current system time.
    pub fn now() -> Self {
        Self { instant: Utc::now() }
    }

    /// Anchor at a caller-supplied instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The reference instant truncated to its (UTC) calendar date.
    pub fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    pub fn year(&self) -> i32 {
        self.instant.year()
    }
}

impl From<Option<DateTime<Utc>>> for Reference {
    fn from(instant: Option<DateTime<Utc>>) -> Self {
        instant.map_or_else(Reference::now, Reference::at)
    }
}

impl From<DateTime<Utc>> for Reference {
    fn from(instant: DateTime<Utc>) -> Self {
        Reference::at(instant)
    }
}

/// Outcome of resolving one occurrence.
pub type Extraction = Result<RecognizedDate, OccurrenceError>;

/// A recognizer for one family of date expressions.
///
/// Implementations must return their results in the left-to-right order the
/// occurrences appear in `text`. Occurrences that match but form an invalid
/// combination are omitted; occurrences that match but name an impossible
/// value are returned as `Err`. Empty text yields an empty vector.
pub trait Extractor: Send + Sync {
    /// Short, stable identifier used in logs and errors.
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str, reference: &Reference) -> Vec<Extraction>;
}

// ── Tests ───────────────────────────────────────────────────────────────────
