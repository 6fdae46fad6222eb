//! # chronos
//!
//! Extract dates and date-times from free-form English text.
//!
//! Given a text and an optional reference instant, chronos returns every date
//! it recognizes: ISO 8601 literals, named holidays, and relative-day
//! expressions such as "today", "3 weeks ago", "next friday" or "last month".
//!
//! ```
//! use chrono::{DateTime, NaiveDate};
//! use chronos::{parse, RecognizedDate};
//!
//! // 1978-03-20, a Monday
//! let reference = DateTime::from_timestamp(259_200_000, 0).unwrap();
//! let out = parse(Some("see you tomorrow"), Some(reference));
//! assert_eq!(
//!     out,
//!     vec![RecognizedDate::Date(NaiveDate::from_ymd_opt(1978, 3, 21).unwrap())]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`extractor`] — the [`Extractor`] contract, [`RecognizedDate`], [`Reference`]
//! - [`iso`] — ISO 8601 date and date-time literals
//! - [`holiday`] — Christmas and New Year
//! - [`relative`] — named days, "N units ago", "last/next" phrases
//! - [`engine`] — runs extractors in a fixed order and merges their results
//! - [`error`] — Error types

pub mod engine;
pub mod error;
pub mod extractor;
pub mod holiday;
pub mod iso;
pub mod relative;

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

pub use engine::{Engine, ParseMode, ParseOptions};
pub use error::{ChronosError, OccurrenceError, Result};
pub use extractor::{Extraction, Extractor, RecognizedDate, Reference};
pub use holiday::{ChristmasExtractor, NewYearExtractor};
pub use iso::IsoExtractor;
pub use relative::RelativeDayExtractor;

/// The built-in engine, compiled once per process.
fn builtin_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(|| Engine::builtin().expect("built-in patterns compile"))
}

/// Extract every recognizable date from `text`, skipping unparseable
/// occurrences.
///
/// `reference` anchors relative expressions and holiday years; when absent
/// the current system time is used. Results are grouped by extractor (ISO,
/// Christmas, New Year, relative days) and in text order within each group.
pub fn parse(text: Option<&str>, reference: Option<DateTime<Utc>>) -> Vec<RecognizedDate> {
    builtin_engine()
        .extract(text, reference)
        .unwrap_or_default()
}

/// Like [`parse`], with explicit [`ParseOptions`].
///
/// # Errors
///
/// With [`ParseMode::Strict`], returns [`ChronosError::Unparseable`] if any
/// occurrence matched but named an impossible date.
pub fn parse_with_options(
    text: Option<&str>,
    reference: Option<DateTime<Utc>>,
    options: &ParseOptions,
) -> Result<Vec<RecognizedDate>> {
    builtin_engine().extract_with(text, reference, options)
}
