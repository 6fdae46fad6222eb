//! Error types for chronos operations.

use thiserror::Error;

/// A single occurrence that matched an extractor's pattern but could not be
/// resolved to a date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{extractor}: cannot resolve '{text}': {reason}")]
pub struct OccurrenceError {
    /// Name of the extractor that produced the occurrence.
    pub extractor: &'static str,
    /// The matched text.
    pub text: String,
    /// Why resolution failed.
    pub reason: String,
}

impl OccurrenceError {
    pub(crate) fn new(extractor: &'static str, text: &str, reason: impl Into<String>) -> Self {
        Self {
            extractor,
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChronosError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Unparseable occurrences: {}", format_occurrences(.0))]
    Unparseable(Vec<OccurrenceError>),
}

fn format_occurrences(errors: &[OccurrenceError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<regex::Error> for ChronosError {
    fn from(e: regex::Error) -> Self {
        ChronosError::InvalidPattern(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChronosError>;
