use chrono::{DateTime, Utc};

use crate::kind::EventType;

/// A dated fact in an order's history.
///
/// Events are values: rebuilding from the same snapshot must produce equal
/// events, so implementors carry no identity beyond their own fields.
pub trait Event: Clone + core::fmt::Debug {
    /// Version of the serialized payload shape.
    const SCHEMA_VERSION: u32;

    fn event_type(&self) -> EventType;

    /// Business time of the fact, used for ordering.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Wire name of the event type (e.g. "edit-requested").
    fn type_name(&self) -> &'static str {
        self.event_type().as_str()
    }
}
