use serde::{Deserialize, Serialize};

use crate::payload::{
    BalanceEvent, ClaimEvent, DeliveryEvent, EditEvent, ExchangeEvent, FulfillmentEvent,
    NoteEvent, NotificationEvent, PaidEvent, PlacedEvent, PriceChangeEvent, RefundEvent,
    ReturnEvent,
};

/// Closed set of timeline event types (the tag of [`EventKind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Placed,
    Canceled,
    #[serde(rename = "price-change")]
    PriceChanged,
    Note,
    Notification,
    Refund,
    Paid,
    EditCreated,
    EditRequested,
    EditDeclined,
    EditCanceled,
    EditConfirmed,
    Fulfilled,
    Shipped,
    Exchange,
    Claim,
    Return,
    PaymentRequired,
    RefundRequired,
    Delivered,
    Inventoried,
    Rejected,
}

impl EventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::Placed => "placed",
            EventType::Canceled => "canceled",
            EventType::PriceChanged => "price-change",
            EventType::Note => "note",
            EventType::Notification => "notification",
            EventType::Refund => "refund",
            EventType::Paid => "paid",
            EventType::EditCreated => "edit-created",
            EventType::EditRequested => "edit-requested",
            EventType::EditDeclined => "edit-declined",
            EventType::EditCanceled => "edit-canceled",
            EventType::EditConfirmed => "edit-confirmed",
            EventType::Fulfilled => "fulfilled",
            EventType::Shipped => "shipped",
            EventType::Exchange => "exchange",
            EventType::Claim => "claim",
            EventType::Return => "return",
            EventType::PaymentRequired => "payment-required",
            EventType::RefundRequired => "refund-required",
            EventType::Delivered => "delivered",
            EventType::Inventoried => "inventoried",
            EventType::Rejected => "rejected",
        }
    }

    /// The `edit-*` family, toggled as a whole by the order-editing feature.
    pub const fn is_edit(self) -> bool {
        matches!(
            self,
            EventType::EditCreated
                | EventType::EditRequested
                | EventType::EditDeclined
                | EventType::EditCanceled
                | EventType::EditConfirmed
        )
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event type plus its variant payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventKind {
    Placed(PlacedEvent),
    Canceled,
    #[serde(rename = "price-change")]
    PriceChanged(PriceChangeEvent),
    Note(NoteEvent),
    Notification(NotificationEvent),
    Refund(RefundEvent),
    Paid(PaidEvent),
    EditCreated(EditEvent),
    EditRequested(EditEvent),
    EditDeclined(EditEvent),
    EditCanceled(EditEvent),
    EditConfirmed(EditEvent),
    Fulfilled(FulfillmentEvent),
    Shipped(FulfillmentEvent),
    Exchange(ExchangeEvent),
    Claim(ClaimEvent),
    Return(ReturnEvent),
    PaymentRequired(BalanceEvent),
    RefundRequired(BalanceEvent),
    Delivered(DeliveryEvent),
    Inventoried(DeliveryEvent),
    Rejected(DeliveryEvent),
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Placed(_) => EventType::Placed,
            EventKind::Canceled => EventType::Canceled,
            EventKind::PriceChanged(_) => EventType::PriceChanged,
            EventKind::Note(_) => EventType::Note,
            EventKind::Notification(_) => EventType::Notification,
            EventKind::Refund(_) => EventType::Refund,
            EventKind::Paid(_) => EventType::Paid,
            EventKind::EditCreated(_) => EventType::EditCreated,
            EventKind::EditRequested(_) => EventType::EditRequested,
            EventKind::EditDeclined(_) => EventType::EditDeclined,
            EventKind::EditCanceled(_) => EventType::EditCanceled,
            EventKind::EditConfirmed(_) => EventType::EditConfirmed,
            EventKind::Fulfilled(_) => EventType::Fulfilled,
            EventKind::Shipped(_) => EventType::Shipped,
            EventKind::Exchange(_) => EventType::Exchange,
            EventKind::Claim(_) => EventType::Claim,
            EventKind::Return(_) => EventType::Return,
            EventKind::PaymentRequired(_) => EventType::PaymentRequired,
            EventKind::RefundRequired(_) => EventType::RefundRequired,
            EventKind::Delivered(_) => EventType::Delivered,
            EventKind::Inventoried(_) => EventType::Inventoried,
            EventKind::Rejected(_) => EventType::Rejected,
        }
    }

    /// Payload shared by the `edit-*` variants.
    pub fn as_edit(&self) -> Option<&EditEvent> {
        match self {
            EventKind::EditCreated(e)
            | EventKind::EditRequested(e)
            | EventKind::EditDeclined(e)
            | EventKind::EditCanceled(e)
            | EventKind::EditConfirmed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_matches_as_str() {
        for ty in [
            EventType::Placed,
            EventType::PriceChanged,
            EventType::EditRequested,
            EventType::PaymentRequired,
            EventType::Inventoried,
        ] {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, serde_json::Value::String(ty.as_str().to_string()));
        }
    }

    #[test]
    fn only_edit_types_are_edits() {
        assert!(EventType::EditConfirmed.is_edit());
        assert!(!EventType::Placed.is_edit());
        assert!(!EventType::Exchange.is_edit());
    }

    #[test]
    fn unit_variant_serializes_with_type_tag() {
        let json = serde_json::to_value(EventKind::Canceled).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "canceled" }));
        assert_eq!(EventKind::Canceled.event_type(), EventType::Canceled);
    }
}
