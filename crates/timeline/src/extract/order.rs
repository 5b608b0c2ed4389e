//! Order-level events: placed, canceled, price changes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use ordertrail_core::{RecordId, UserId};
use ordertrail_events::{
    EventId, EventKind, PlacedEvent, PriceChangeEvent, TimelineEvent,
};

use crate::extract::{Extraction, ItemCatalog};
use crate::record::OrderRecord;

pub fn placed<O: OrderRecord>(order: &O, out: &mut Extraction) {
    let event = TimelineEvent::new(
        EventId::facet(order.order_id(), "placed"),
        order.created_at(),
        out.order_id(),
        EventKind::Placed(PlacedEvent {
            amount: out.money(order.total()),
            tax_rate_bps: order.tax_rate_bps(),
        }),
    );
    out.push(event);
}

pub fn canceled<O: OrderRecord>(order: &O, out: &mut Extraction) {
    if !order.is_canceled() {
        return;
    }
    out.push(TimelineEvent::new(
        EventId::facet(order.order_id(), "canceled"),
        order.updated_at(),
        out.order_id(),
        EventKind::Canceled,
    ));
}

/// Shape of one `metadata.timeline` entry.
#[derive(Debug, Deserialize)]
struct PriceLogEntry {
    #[serde(default)]
    item_id: Option<RecordId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    old_price: i64,
    new_price: i64,
    #[serde(alias = "time")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    actor: Option<UserId>,
}

/// One event per readable price-log entry. Unreadable entries are skipped
/// individually.
pub fn price_changes<O: OrderRecord>(order: &O, catalog: &ItemCatalog<'_>, out: &mut Extraction) {
    for (index, raw) in order.price_log().iter().enumerate() {
        let id = EventId::facet(order.order_id(), &format!("price-{index}"));
        let entry = match PriceLogEntry::deserialize(raw) {
            Ok(entry) => entry,
            Err(err) => {
                out.malformed(&id, format!("unreadable price-log entry: {err}"));
                continue;
            }
        };

        let item = entry.item_id.and_then(|item_id| catalog.get(item_id));
        if let (Some(item_id), None) = (entry.item_id, item) {
            out.malformed(&id, format!("unknown line item {item_id}"));
        }

        let kind = EventKind::PriceChanged(PriceChangeEvent {
            item_id: entry.item_id,
            title: entry.title.or_else(|| item.map(|i| i.title.clone())),
            thumbnail: entry.thumbnail.or_else(|| item.and_then(|i| i.thumbnail.clone())),
            old_unit_price: entry.old_price,
            new_unit_price: entry.new_price,
            currency: order.currency().clone(),
            actor: entry.actor,
        });
        out.push(TimelineEvent::new(id, entry.created_at, out.order_id(), kind));
    }
}
