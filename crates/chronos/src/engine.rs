//! Runs a fixed, ordered list of extractors over one text.
//!
//! The engine builds one [`Reference`] per call and hands it to every
//! extractor, so all of them agree on "now". Results are the concatenation of
//! each extractor's own results in registration order; they are never
//! re-sorted by position and never deduplicated.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::{ChronosError, OccurrenceError, Result};
use crate::extractor::{Extractor, RecognizedDate, Reference};
use crate::holiday::{ChristmasExtractor, NewYearExtractor};
use crate::iso::IsoExtractor;
use crate::relative::RelativeDayExtractor;

/// What to do with occurrences that match but cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip them and keep everything else.
    #[default]
    Permissive,
    /// Fail the call with every such occurrence listed.
    Strict,
}

/// Options for [`Engine::extract_with`] and [`crate::parse_with_options`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// An ordered set of extractors plus the options to run them with.
pub struct Engine {
    extractors: Vec<Box<dyn Extractor>>,
    options: ParseOptions,
}

impl Engine {
    /// An engine with no extractors; add them with [`Engine::register`].
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
            options: ParseOptions::default(),
        }
    }

    /// The built-in extractors in their fixed order: ISO 8601, Christmas,
    /// New Year, relative days.
    ///
    /// # Errors
    ///
    /// Returns [`ChronosError::InvalidPattern`] if a built-in pattern fails to
    /// compile, which indicates a defect in this crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new()
            .register(IsoExtractor::new()?)
            .register(ChristmasExtractor::new()?)
            .register(NewYearExtractor::new()?)
            .register(RelativeDayExtractor::new()?))
    }

    /// Append an extractor; it runs after every extractor registered before it.
    pub fn register(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Names of the registered extractors, in run order.
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Extract every recognizable date from `text`.
    ///
    /// `reference` defaults to the current system time. Absent or empty text
    /// returns an empty vector without running any extractor.
    ///
    /// # Errors
    ///
    /// In [`ParseMode::Strict`], returns [`ChronosError::Unparseable`] listing
    /// every occurrence that matched but could not be resolved. In
    /// [`ParseMode::Permissive`] this never fails.
    pub fn extract(
        &self,
        text: Option<&str>,
        reference: Option<DateTime<Utc>>,
    ) -> Result<Vec<RecognizedDate>> {
        self.extract_with(text, reference, &self.options)
    }

    /// Like [`Engine::extract`], overriding the engine's own options.
    pub fn extract_with(
        &self,
        text: Option<&str>,
        reference: Option<DateTime<Utc>>,
        options: &ParseOptions,
    ) -> Result<Vec<RecognizedDate>> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(Vec::new()),
        };
        let reference = Reference::from(reference);

        let mut dates = Vec::new();
        let mut failures: Vec<OccurrenceError> = Vec::new();

        for extractor in &self.extractors {
            let before = dates.len();
            for extraction in extractor.extract(text, &reference) {
                match extraction {
                    Ok(date) => dates.push(date),
                    Err(e) => {
                        debug!(
                            extractor = e.extractor,
                            text = %e.text,
                            reason = %e.reason,
                            "unparseable occurrence"
                        );
                        failures.push(e);
                    }
                }
            }
            trace!(
                extractor = extractor.name(),
                count = dates.len() - before,
                "extractor finished"
            );
        }

        if options.mode == ParseMode::Strict && !failures.is_empty() {
            return Err(ChronosError::Unparseable(failures));
        }
        Ok(dates)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
