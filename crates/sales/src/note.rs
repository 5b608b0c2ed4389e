//! Manual notes and system notifications attached to an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{AggregateId, Entity, RecordId, UserId};

/// Free-text note written by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    /// Order the note is attached to.
    pub resource_id: AggregateId,
    pub author_id: UserId,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Note {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Message sent by the system (e.g. "order.shipment_created" e-mail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub resource_id: AggregateId,
    pub to: String,
    pub event_name: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Notification {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
