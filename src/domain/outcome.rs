//! Per-record results shared by the extraction, validation and cleaning stages.
//!
//! A bad record never aborts a batch; it becomes a [`Skip`] in the stage's
//! [`StageReport`] so callers can count and inspect what was dropped.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why a single record was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Profile URL already processed from an earlier listing
    Duplicate,
    /// Page could not be fetched
    FetchFailed(String),
    /// Profile markup could not be turned into a record
    ExtractionFailed(String),
    /// Required key absent from the candidate record
    MissingField(String),
    /// Record could not be serialized or decoded
    Malformed(String),
    /// Candidate is not a JSON object
    NotAnObject,
}

impl SkipReason {
    /// Stable label used for skip counts
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::Duplicate => "duplicate",
            SkipReason::FetchFailed(_) => "fetch_failed",
            SkipReason::ExtractionFailed(_) => "extraction_failed",
            SkipReason::MissingField(_) => "missing_field",
            SkipReason::Malformed(_) => "malformed",
            SkipReason::NotAnObject => "not_an_object",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate => write!(f, "duplicate profile"),
            SkipReason::FetchFailed(msg) => write!(f, "fetch failed: {}", msg),
            SkipReason::ExtractionFailed(msg) => write!(f, "extraction failed: {}", msg),
            SkipReason::MissingField(key) => write!(f, "missing required key '{}'", key),
            SkipReason::Malformed(msg) => write!(f, "malformed record: {}", msg),
            SkipReason::NotAnObject => write!(f, "record is not an object"),
        }
    }
}

/// Result of pushing one record through one stage
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Accepted(T),
    Skipped(SkipReason),
}

impl<T, E: Into<SkipReason>> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Accepted(value),
            Err(e) => Outcome::Skipped(e.into()),
        }
    }
}

/// A dropped record and the identifier it was dropped under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skip {
    pub subject: String,
    pub reason: SkipReason,
}

/// Accepted values of one stage plus everything it dropped
#[derive(Debug, Clone)]
pub struct StageReport<T> {
    pub accepted: Vec<T>,
    pub skipped: Vec<Skip>,
}

impl<T> Default for StageReport<T> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> StageReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `subject`, logging skips as they happen.
    pub fn record(&mut self, subject: impl Into<String>, outcome: Outcome<T>) {
        match outcome {
            Outcome::Accepted(value) => self.accepted.push(value),
            Outcome::Skipped(reason) => self.skip(subject, reason),
        }
    }

    pub fn skip(&mut self, subject: impl Into<String>, reason: SkipReason) {
        let subject = subject.into();
        match &reason {
            SkipReason::Duplicate => tracing::debug!("Skipping {}: {}", subject, reason),
            _ => tracing::error!("Skipping {}: {}", subject, reason),
        }
        self.skipped.push(Skip { subject, reason });
    }

    /// Number of skips per [`SkipReason::kind`]
    pub fn skip_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for skip in &self.skipped {
            *counts.entry(skip.reason.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
