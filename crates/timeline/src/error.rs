//! Build-level errors and record-level diagnostics.

use serde::Serialize;
use thiserror::Error;

/// Build-level failure: no timeline (not even a partial one) is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// A required aggregate fetch failed outright.
    #[error("source `{name}` unavailable: {reason}")]
    SourceUnavailable { name: &'static str, reason: String },
}

impl TimelineError {
    pub fn source_unavailable(name: &'static str, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            name,
            reason: reason.into(),
        }
    }
}

/// A record that was missing an expected cross-reference or could not be
/// read. Recovered locally: only the dependent event or field is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedAggregate {
    pub record: String,
    pub reason: String,
}
