use ordertrail_core::AggregateId;
use ordertrail_events::{EventId, EventKind, FulfillmentEvent, FulfillmentSource, TimelineEvent};
use ordertrail_sales::Fulfillment;

use crate::extract::{Extraction, ItemCatalog, unique_by_id};

/// `fulfilled` per fulfillment, plus `shipped` once it has a ship date.
///
/// Ids are scoped by the owning source, so the same fulfillment listed under
/// the order and under a sub-order yields distinct events.
pub fn fulfillments(
    list: &[Fulfillment],
    source: FulfillmentSource,
    source_id: AggregateId,
    catalog: &ItemCatalog<'_>,
    out: &mut Extraction,
) {
    for fulfillment in unique_by_id(list) {
        let scope = format!("{}-{source_id}-{}", source.as_str(), fulfillment.id);
        let fulfilled_id = EventId::facet(&scope, "fulfilled");
        let items = fulfillment
            .items
            .iter()
            .map(|i| catalog.event_item(i.item_id, i.quantity, &fulfilled_id, out))
            .collect::<Vec<_>>();

        let payload = FulfillmentEvent {
            fulfillment_id: fulfillment.id,
            source,
            source_id,
            items,
            location_id: fulfillment.location_id.clone(),
        };

        if let Some(shipped_at) = fulfillment.shipped_at {
            out.push(
                TimelineEvent::new(
                    EventId::facet(&scope, "shipped"),
                    shipped_at,
                    out.order_id(),
                    EventKind::Shipped(payload.clone()),
                )
                .with_no_notification(fulfillment.no_notification),
            );
        }

        out.push(
            TimelineEvent::new(
                fulfilled_id,
                fulfillment.created_at,
                out.order_id(),
                EventKind::Fulfilled(payload),
            )
            .with_no_notification(fulfillment.no_notification),
        );
    }
}
