//! Timeline events: the output contract of the aggregation engine.
//!
//! A timeline is a list of [`TimelineEvent`]s. Each event carries a closed
//! [`EventKind`] with the payload the variant needs, plus any derived status
//! (see [`OverlayStatus`]) so consumers never re-derive state from raw records.

pub mod event;
pub mod kind;
pub mod overlay;
pub mod payload;
pub mod timeline_event;

pub use event::Event;
pub use kind::{EventKind, EventType};
pub use overlay::OverlayStatus;
pub use payload::{
    BalanceEvent, ClaimEvent, DeliveryEvent, EditEvent, EventItem, ExchangeEvent,
    FulfillmentEvent, FulfillmentSource, NoteEvent, NotificationEvent, PaidEvent, PlacedEvent,
    PriceChangeEvent, RefundEvent, ReturnEvent,
};
pub use timeline_event::{EventId, TimelineEvent};
