//! Event extractors: one pure function per record kind.
//!
//! Extractors append to an [`Extraction`]; they never fail. A record missing a
//! cross-reference loses only the dependent field (reported through
//! [`Extraction::malformed`]), never the whole event.

pub mod balance;
pub mod deliveries;
pub mod edits;
pub mod fulfillment;
pub mod ledger;
pub mod messages;
pub mod order;
pub mod sub_orders;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use ordertrail_core::{AggregateId, CurrencyCode, Entity, Money, RecordId};
use ordertrail_events::{EventId, EventItem, TimelineEvent};
use ordertrail_sales::LineItem;

use crate::error::MalformedAggregate;

/// Accumulates the events and diagnostics of one build.
#[derive(Debug)]
pub struct Extraction {
    order_id: AggregateId,
    currency: CurrencyCode,
    events: Vec<TimelineEvent>,
    seen: HashSet<EventId>,
    degraded: Vec<MalformedAggregate>,
}

impl Extraction {
    pub fn new(order_id: AggregateId, currency: CurrencyCode) -> Self {
        Self {
            order_id,
            currency,
            events: Vec::new(),
            seen: HashSet::new(),
            degraded: Vec::new(),
        }
    }

    pub fn order_id(&self) -> AggregateId {
        self.order_id
    }

    /// Amount in the order's currency.
    pub fn money(&self, amount: i64) -> Money {
        Money::new(amount, self.currency.clone())
    }

    /// Appends an event; a second event with an id already taken in this
    /// build is dropped and reported.
    pub fn push(&mut self, event: TimelineEvent) {
        if !self.seen.insert(event.id.clone()) {
            self.malformed(&event.id, "duplicate event id");
            return;
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Most recent timestamp extracted so far.
    pub fn latest_time(&self) -> Option<DateTime<Utc>> {
        self.events.iter().map(|e| e.time).max()
    }

    pub fn malformed(&mut self, record: impl core::fmt::Display, reason: impl Into<String>) {
        let diagnostic = MalformedAggregate {
            record: record.to_string(),
            reason: reason.into(),
        };
        tracing::warn!(
            order_id = %self.order_id,
            record = %diagnostic.record,
            reason = %diagnostic.reason,
            "degraded timeline record"
        );
        self.degraded.push(diagnostic);
    }

    pub fn into_parts(self) -> (Vec<TimelineEvent>, Vec<MalformedAggregate>) {
        (self.events, self.degraded)
    }
}

/// Line items known to the snapshot (order items plus items added by
/// sub-orders), looked up by id.
#[derive(Debug, Default)]
pub struct ItemCatalog<'a> {
    by_id: HashMap<RecordId, &'a LineItem>,
}

impl<'a> ItemCatalog<'a> {
    pub fn new(items: &'a [LineItem]) -> Self {
        let mut catalog = Self::default();
        catalog.extend(items);
        catalog
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = &'a LineItem>) {
        for item in items {
            self.by_id.entry(item.id).or_insert(item);
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&'a LineItem> {
        self.by_id.get(&id).copied()
    }

    /// Item as displayed on an event; title and thumbnail are dropped (and
    /// the gap reported) when the line item is unknown.
    pub fn event_item(
        &self,
        item_id: RecordId,
        quantity: i64,
        owner: impl core::fmt::Display,
        out: &mut Extraction,
    ) -> EventItem {
        match self.get(item_id) {
            Some(item) => EventItem {
                item_id,
                quantity,
                title: Some(item.title.clone()),
                thumbnail: item.thumbnail.clone(),
            },
            None => {
                out.malformed(owner, format!("unknown line item {item_id}"));
                EventItem {
                    item_id,
                    quantity,
                    title: None,
                    thumbnail: None,
                }
            }
        }
    }
}

/// Records in input order, skipping any whose id was already seen.
pub fn unique_by_id<T: Entity>(records: &[T]) -> impl Iterator<Item = &T> {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().filter(move |r| seen.insert(r.id().clone()))
}
