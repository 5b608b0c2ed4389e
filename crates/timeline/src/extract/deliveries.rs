use ordertrail_events::{DeliveryEvent, EventId, EventKind, TimelineEvent};
use ordertrail_purchasing::Delivery;

use crate::extract::{Extraction, ItemCatalog, unique_by_id};
use crate::overlay::{NestedReturn, resolve_overlay};

/// Supplier deliveries: one event per lifecycle timestamp the delivery carries.
pub fn deliveries(deliveries: &[Delivery], catalog: &ItemCatalog<'_>, out: &mut Extraction) {
    for delivery in unique_by_id(deliveries) {
        let status = resolve_overlay(delivery, &NestedReturn::Absent);
        let owner = EventId::new(delivery.id.to_string());
        let items: Vec<_> = delivery
            .items
            .iter()
            .map(|i| catalog.event_item(i.item_id, i.quantity, &owner, out))
            .collect();

        let stamps = [
            ("delivered", delivery.delivered_at, EventKind::Delivered as fn(DeliveryEvent) -> EventKind),
            ("inventoried", delivery.inventoried_at, EventKind::Inventoried),
            ("rejected", delivery.rejected_at, EventKind::Rejected),
        ];

        for (facet, at, kind) in stamps {
            let Some(time) = at else { continue };
            let rejection_reason = if facet == "rejected" {
                delivery.rejection_reason.clone()
            } else {
                None
            };
            let payload = DeliveryEvent {
                delivery_id: delivery.id,
                status,
                items: items.clone(),
                rejection_reason,
            };
            out.push(
                TimelineEvent::new(
                    EventId::facet(delivery.id, facet),
                    time,
                    out.order_id(),
                    kind(payload),
                )
                .with_no_notification(delivery.no_notification),
            );
        }
    }
}
