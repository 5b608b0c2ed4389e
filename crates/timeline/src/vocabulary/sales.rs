use ordertrail_events::EventType;
use ordertrail_sales::SalesOrder;

use crate::extract::{Extraction, ItemCatalog, sub_orders};
use crate::overlay::ReturnIndex;
use crate::snapshot::SalesSubOrders;
use crate::source::SourceState;
use crate::vocabulary::Vocabulary;

/// Storefront orders: exchanges, claims, returns and order edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesVocabulary;

const SALES_EVENTS: &[EventType] = &[
    EventType::Placed,
    EventType::Canceled,
    EventType::PriceChanged,
    EventType::Note,
    EventType::Notification,
    EventType::Refund,
    EventType::Paid,
    EventType::EditCreated,
    EventType::EditRequested,
    EventType::EditDeclined,
    EventType::EditCanceled,
    EventType::EditConfirmed,
    EventType::Fulfilled,
    EventType::Shipped,
    EventType::Exchange,
    EventType::Claim,
    EventType::Return,
    EventType::PaymentRequired,
    EventType::RefundRequired,
];

impl Vocabulary for SalesVocabulary {
    type Order = SalesOrder;
    type SubOrders = SalesSubOrders;

    fn name(&self) -> &'static str {
        "sales"
    }

    fn event_types(&self) -> &'static [EventType] {
        SALES_EVENTS
    }

    fn sub_order_sources<'a>(
        &self,
        sub_orders: &'a SalesSubOrders,
    ) -> Vec<(&'static str, SourceState<'a>)> {
        vec![
            ("swaps", sub_orders.swaps.state()),
            ("claims", sub_orders.claims.state()),
            ("returns", sub_orders.returns.state()),
        ]
    }

    fn register_items<'a>(&self, sub_orders: &'a SalesSubOrders, catalog: &mut ItemCatalog<'a>) {
        for swap in sub_orders.swaps.records() {
            catalog.extend(&swap.additional_items);
        }
        for claim in sub_orders.claims.records() {
            catalog.extend(&claim.additional_items);
        }
    }

    fn extract_sub_orders(
        &self,
        sub_orders: &SalesSubOrders,
        catalog: &ItemCatalog<'_>,
        out: &mut Extraction,
    ) {
        let returns = sub_orders.returns.records();
        let claims = sub_orders.claims.records();
        let index = ReturnIndex::new(returns);

        sub_orders::exchanges(sub_orders.swaps.records(), &index, catalog, out);
        sub_orders::claims(claims, &index, catalog, out);
        sub_orders::returns(returns, claims, catalog, out);
    }
}
