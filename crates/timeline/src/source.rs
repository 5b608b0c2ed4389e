//! Per-aggregate fetch state, as reported by the caller's fetch layer.

use serde::{Deserialize, Serialize};

/// State of one independently fetched aggregate collection.
///
/// JSON shape: `{"state": "pending"}`, `{"state": "failed", "reason": ".."}`
/// or `{"state": "ready", "data": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Source<T> {
    /// The fetch has not resolved yet.
    Pending,
    /// The fetch failed (not merely empty).
    Failed { reason: String },
    /// The fetch resolved; `data` may be an empty collection.
    Ready { data: T },
}

/// Borrowed view of a [`Source`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState<'a> {
    Pending,
    Failed(&'a str),
    Ready,
}

impl<T> Source<T> {
    pub fn ready(data: T) -> Self {
        Source::Ready { data }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Source::Failed {
            reason: reason.into(),
        }
    }

    pub fn state(&self) -> SourceState<'_> {
        match self {
            Source::Pending => SourceState::Pending,
            Source::Failed { reason } => SourceState::Failed(reason),
            Source::Ready { .. } => SourceState::Ready,
        }
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Source::Ready { data } => Some(data),
            Source::Pending | Source::Failed { .. } => None,
        }
    }
}

impl<T> Source<Vec<T>> {
    /// Resolved records, or nothing when the source is not ready.
    pub fn records(&self) -> &[T] {
        self.as_ready().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Source::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        let source: Source<Vec<u8>> = Source::default();
        assert_eq!(source.state(), SourceState::Pending);
        assert!(source.records().is_empty());
    }

    #[test]
    fn failed_exposes_reason() {
        let source: Source<Vec<u8>> = Source::failed("timeout");
        assert_eq!(source.state(), SourceState::Failed("timeout"));
        assert!(source.as_ready().is_none());
    }

    #[test]
    fn json_shape_uses_state_tag() {
        let ready: Source<Vec<u8>> = serde_json::from_str(r#"{"state":"ready","data":[1,2]}"#).unwrap();
        assert_eq!(ready.records(), &[1, 2]);

        let failed: Source<Vec<u8>> =
            serde_json::from_str(r#"{"state":"failed","reason":"503"}"#).unwrap();
        assert_eq!(failed.state(), SourceState::Failed("503"));

        let pending: Source<Vec<u8>> = serde_json::from_str(r#"{"state":"pending"}"#).unwrap();
        assert_eq!(pending, Source::Pending);
    }
}
