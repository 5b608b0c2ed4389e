//! Build entry point: join barrier, extraction, sequencing.

use serde::Serialize;

use ordertrail_core::{AggregateId, AggregateRoot};
use ordertrail_events::{EventType, FulfillmentSource, TimelineEvent};

use crate::config::TimelineConfig;
use crate::error::{MalformedAggregate, TimelineError};
use crate::extract::{self, Extraction, ItemCatalog};
use crate::record::OrderRecord;
use crate::sequencer::sequence;
use crate::snapshot::Snapshot;
use crate::source::SourceState;
use crate::vocabulary::Vocabulary;

/// A fully built timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub order_id: AggregateId,
    /// Version of the order snapshot the timeline was built from.
    pub order_version: u64,
    /// Newest first; the last event carries `first`.
    pub events: Vec<TimelineEvent>,
    /// Records that were shown with missing fields or skipped.
    pub degraded: Vec<MalformedAggregate>,
}

impl Timeline {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Result of a build that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildStatus {
    Ready(Timeline),
    /// Required sources are still loading; nothing was extracted.
    Deferred { pending: Vec<&'static str> },
}

impl BuildStatus {
    pub fn timeline(&self) -> Option<&Timeline> {
        match self {
            BuildStatus::Ready(timeline) => Some(timeline),
            BuildStatus::Deferred { .. } => None,
        }
    }

    pub fn into_timeline(self) -> Option<Timeline> {
        match self {
            BuildStatus::Ready(timeline) => Some(timeline),
            BuildStatus::Deferred { .. } => None,
        }
    }
}

/// Builds the timeline of one order from its snapshot set.
///
/// Any failed required source fails the build, even while others are still
/// pending. Otherwise the build is deferred until every required source is
/// ready.
pub fn build<V: Vocabulary>(
    vocabulary: &V,
    snapshot: &Snapshot<V::Order, V::SubOrders>,
    config: &TimelineConfig,
) -> Result<BuildStatus, TimelineError> {
    let span = tracing::debug_span!("timeline.build", vocabulary = vocabulary.name());
    let _guard = span.enter();

    let editing = order_editing(vocabulary, config);
    let required = required_sources(vocabulary, snapshot, editing);

    if let Some((name, reason)) = required.iter().find_map(|(name, state)| match state {
        SourceState::Failed(reason) => Some((*name, *reason)),
        _ => None,
    }) {
        return Err(TimelineError::source_unavailable(name, reason));
    }

    let pending: Vec<&'static str> = required
        .iter()
        .filter(|(_, state)| matches!(state, SourceState::Pending))
        .map(|(name, _)| *name)
        .collect();
    let Some(order) = snapshot.order.as_ready().filter(|_| pending.is_empty()) else {
        tracing::debug!(?pending, "deferring timeline build");
        return Ok(BuildStatus::Deferred { pending });
    };

    let mut catalog = ItemCatalog::new(order.line_items());
    vocabulary.register_items(&snapshot.sub_orders, &mut catalog);

    let mut out = Extraction::new(order.order_id(), order.currency().clone());
    let supports = |ty: EventType| vocabulary.supports(ty);

    extract::order::placed(order, &mut out);
    if supports(EventType::Canceled) {
        extract::order::canceled(order, &mut out);
    }
    if supports(EventType::PriceChanged) {
        extract::order::price_changes(order, &catalog, &mut out);
    }
    if supports(EventType::Fulfilled) {
        extract::fulfillment::fulfillments(
            order.fulfillments(),
            FulfillmentSource::Order,
            order.order_id(),
            &catalog,
            &mut out,
        );
    }
    if supports(EventType::Note) {
        extract::messages::notes(snapshot.notes.records(), &mut out);
    }
    if supports(EventType::Notification) {
        extract::messages::notifications(snapshot.notifications.records(), &mut out);
    }
    if supports(EventType::Refund) {
        extract::ledger::refunds(snapshot.refunds.records(), &mut out);
    }
    if supports(EventType::Paid) {
        extract::ledger::paid(snapshot.payments.records(), &mut out);
    }
    let difference = if editing {
        extract::edits::edits(snapshot.edits.records(), &mut out);
        extract::balance::pending_difference(snapshot.edits.records())
    } else {
        Some(0)
    };
    vocabulary.extract_sub_orders(&snapshot.sub_orders, &catalog, &mut out);

    let synthetic = extract::balance::balance(order, difference, supports, &mut out);
    let (mut events, degraded) = out.into_parts();
    tracing::debug!(
        order_id = %order.order_id(),
        extracted = events.len(),
        synthetic = synthetic.len(),
        degraded = degraded.len(),
        "extracted timeline events"
    );
    events.splice(0..0, synthetic);

    Ok(match sequence(events) {
        Some(events) => BuildStatus::Ready(Timeline {
            order_id: order.order_id(),
            order_version: order.version(),
            events,
            degraded,
        }),
        None => BuildStatus::Deferred {
            pending: Vec::new(),
        },
    })
}

fn order_editing<V: Vocabulary>(vocabulary: &V, config: &TimelineConfig) -> bool {
    config.order_editing() && vocabulary.event_types().iter().any(|ty| ty.is_edit())
}

fn required_sources<'a, V: Vocabulary>(
    vocabulary: &V,
    snapshot: &'a Snapshot<V::Order, V::SubOrders>,
    editing: bool,
) -> Vec<(&'static str, SourceState<'a>)> {
    let optional = [
        (EventType::Paid, "payments", snapshot.payments.state()),
        (EventType::Refund, "refunds", snapshot.refunds.state()),
        (EventType::Note, "notes", snapshot.notes.state()),
        (EventType::Notification, "notifications", snapshot.notifications.state()),
    ];

    let mut required = vec![("order", snapshot.order.state())];
    required.extend(
        optional
            .into_iter()
            .filter(|(ty, _, _)| vocabulary.supports(*ty))
            .map(|(_, name, state)| (name, state)),
    );
    if editing {
        required.push(("edits", snapshot.edits.state()));
    }
    required.extend(vocabulary.sub_order_sources(&snapshot.sub_orders));
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use ordertrail_core::CurrencyCode;
    use ordertrail_events::EventKind;
    use ordertrail_sales::{
        FulfillmentStatus, PaymentStatus, SalesOrder, SalesOrderId, SalesOrderStatus,
    };
    use uuid::Uuid;

    use crate::config::FeatureFlags;
    use crate::snapshot::{SalesSnapshot, SalesSubOrders};
    use crate::source::Source;
    use crate::vocabulary::SalesVocabulary;

    fn t(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()
    }

    fn order() -> SalesOrder {
        SalesOrder {
            id: SalesOrderId::new(AggregateId::from_uuid(Uuid::from_u128(1))),
            version: 7,
            email: None,
            currency_code: CurrencyCode::parse("usd").unwrap(),
            total: 1000,
            paid_total: 1000,
            refunded_total: 0,
            tax_rate_bps: Some(1000),
            status: SalesOrderStatus::Pending,
            fulfillment_status: FulfillmentStatus::NotFulfilled,
            payment_status: PaymentStatus::Captured,
            items: Vec::new(),
            shipping_methods: Vec::new(),
            fulfillments: Vec::new(),
            metadata: serde_json::Value::Null,
            created_at: t(1),
            updated_at: t(1),
            canceled_at: None,
        }
    }

    fn ready_snapshot() -> SalesSnapshot {
        SalesSnapshot {
            order: Source::ready(order()),
            payments: Source::ready(Vec::new()),
            refunds: Source::ready(Vec::new()),
            edits: Source::ready(Vec::new()),
            notes: Source::ready(Vec::new()),
            notifications: Source::ready(Vec::new()),
            sub_orders: SalesSubOrders {
                swaps: Source::ready(Vec::new()),
                claims: Source::ready(Vec::new()),
                returns: Source::ready(Vec::new()),
            },
        }
    }

    #[test]
    fn nothing_loaded_is_deferred_not_empty() {
        let status = build(&SalesVocabulary, &SalesSnapshot::default(), &TimelineConfig::default())
            .unwrap();
        match status {
            BuildStatus::Deferred { pending } => {
                assert!(pending.contains(&"order"));
                assert!(pending.contains(&"edits"));
            }
            BuildStatus::Ready(_) => panic!("expected a deferred build"),
        }
    }

    #[test]
    fn one_pending_source_defers_the_build() {
        let mut snapshot = ready_snapshot();
        snapshot.notes = Source::Pending;
        let status = build(&SalesVocabulary, &snapshot, &TimelineConfig::default()).unwrap();
        assert_eq!(status, BuildStatus::Deferred { pending: vec!["notes"] });
    }

    #[test]
    fn failure_wins_over_pending() {
        let mut snapshot = ready_snapshot();
        snapshot.order = Source::Pending;
        snapshot.sub_orders.claims = Source::failed("502 from claims service");

        let err = build(&SalesVocabulary, &snapshot, &TimelineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TimelineError::source_unavailable("claims", "502 from claims service")
        );
    }

    #[test]
    fn edits_are_not_awaited_when_editing_is_disabled() {
        let mut snapshot = ready_snapshot();
        snapshot.edits = Source::Pending;
        let config = TimelineConfig::with_features(FeatureFlags::none());

        let timeline = build(&SalesVocabulary, &snapshot, &config)
            .unwrap()
            .into_timeline()
            .unwrap();
        assert!(timeline.events.iter().all(|e| !e.kind.event_type().is_edit()));
    }

    #[test]
    fn bare_order_yields_placed_only() {
        let timeline = build(&SalesVocabulary, &ready_snapshot(), &TimelineConfig::default())
            .unwrap()
            .into_timeline()
            .unwrap();

        assert_eq!(timeline.order_version, 7);
        assert_eq!(timeline.events.len(), 1);
        let placed = &timeline.events[0];
        assert!(placed.first);
        assert!(matches!(placed.kind, EventKind::Placed(ref p) if p.amount.amount == 1000));
        assert!(!timeline.is_degraded());
    }

    #[test]
    fn unpaid_order_gets_payment_required_but_keeps_placed_first() {
        let mut snapshot = ready_snapshot();
        if let Source::Ready { data } = &mut snapshot.order {
            data.paid_total = 0;
        }
        let timeline = build(&SalesVocabulary, &snapshot, &TimelineConfig::default())
            .unwrap()
            .into_timeline()
            .unwrap();

        let types: Vec<_> = timeline.events.iter().map(|e| e.kind.event_type()).collect();
        assert_eq!(types, vec![EventType::PaymentRequired, EventType::Placed]);
        assert!(timeline.events[1].first);
    }
}
