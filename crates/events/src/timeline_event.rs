use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::AggregateId;

use crate::event::Event;
use crate::kind::{EventKind, EventType};

/// Identity of a timeline event, unique within one build.
///
/// Derived from the source record id plus a facet (`{id}-requested`), so
/// rebuilding from the same snapshot yields the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn facet(source: impl core::fmt::Display, facet: &str) -> Self {
        Self(format!("{source}-{facet}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One typed, timestamped entry of an order timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EventId,
    pub time: DateTime<Utc>,
    pub order_id: AggregateId,
    /// Set on exactly one event per timeline: the earliest.
    pub first: bool,
    pub no_notification: bool,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl TimelineEvent {
    pub fn new(id: EventId, time: DateTime<Utc>, order_id: AggregateId, kind: EventKind) -> Self {
        Self {
            id,
            time,
            order_id,
            first: false,
            no_notification: false,
            kind,
        }
    }

    pub fn with_no_notification(mut self, no_notification: bool) -> Self {
        self.no_notification = no_notification;
        self
    }
}

impl Event for TimelineEvent {
    const SCHEMA_VERSION: u32 = 1;

    fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.time
    }
}
