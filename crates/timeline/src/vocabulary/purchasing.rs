use ordertrail_events::EventType;
use ordertrail_purchasing::PurchaseOrder;

use crate::extract::{Extraction, ItemCatalog, deliveries};
use crate::snapshot::PurchaseSubOrders;
use crate::source::SourceState;
use crate::vocabulary::Vocabulary;

/// Supplier purchase orders: deliveries instead of exchanges and claims, no
/// order edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseVocabulary;

const PURCHASE_EVENTS: &[EventType] = &[
    EventType::Placed,
    EventType::Canceled,
    EventType::PriceChanged,
    EventType::Note,
    EventType::Notification,
    EventType::Refund,
    EventType::Paid,
    EventType::Delivered,
    EventType::Inventoried,
    EventType::Rejected,
    EventType::PaymentRequired,
    EventType::RefundRequired,
];

impl Vocabulary for PurchaseVocabulary {
    type Order = PurchaseOrder;
    type SubOrders = PurchaseSubOrders;

    fn name(&self) -> &'static str {
        "purchasing"
    }

    fn event_types(&self) -> &'static [EventType] {
        PURCHASE_EVENTS
    }

    fn sub_order_sources<'a>(
        &self,
        sub_orders: &'a PurchaseSubOrders,
    ) -> Vec<(&'static str, SourceState<'a>)> {
        vec![("deliveries", sub_orders.deliveries.state())]
    }

    fn register_items<'a>(
        &self,
        _sub_orders: &'a PurchaseSubOrders,
        _catalog: &mut ItemCatalog<'a>,
    ) {
    }

    fn extract_sub_orders(
        &self,
        sub_orders: &PurchaseSubOrders,
        catalog: &ItemCatalog<'_>,
        out: &mut Extraction,
    ) {
        deliveries::deliveries(sub_orders.deliveries.records(), catalog, out);
    }
}
