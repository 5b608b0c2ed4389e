//! Synthetic balance events (`payment-required`, `refund-required`).
//!
//! These are computed from order totals rather than read from a record. They
//! are stamped at the newest extracted time and placed ahead of the other
//! events, so on a tie they sort after them and never take `first`.

use ordertrail_events::{BalanceEvent, EventId, EventKind, EventType, TimelineEvent};
use ordertrail_sales::{EditStatus, OrderEditProposal};

use crate::extract::{Extraction, unique_by_id};
use crate::record::OrderRecord;

/// Outstanding amounts; a non-positive amount means no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub payment_required: i64,
    pub refund_required: i64,
}

impl Balance {
    /// `difference` is the sum still pending on requested edits. `None` when
    /// the amounts do not fit in an `i64`.
    pub fn compute<O: OrderRecord>(order: &O, difference: i64) -> Option<Self> {
        let expected = order.total().checked_add(difference)?;
        let held = order.paid_total().checked_sub(order.refunded_total())?;
        Some(Self {
            payment_required: expected.checked_sub(order.paid_total())?,
            refund_required: held.checked_sub(expected)?,
        })
    }
}

/// Sum of `difference_due` over proposals waiting on the customer, `None` on
/// overflow.
pub fn pending_difference(edits: &[OrderEditProposal]) -> Option<i64> {
    unique_by_id(edits)
        .filter(|e| e.status == EditStatus::Requested)
        .try_fold(0i64, |sum, e| sum.checked_add(e.difference_due))
}

/// Balance events for the extracted order. Amounts that overflow are reported
/// and produce no event.
pub fn balance<O: OrderRecord>(
    order: &O,
    difference: Option<i64>,
    supports: impl Fn(EventType) -> bool,
    out: &mut Extraction,
) -> Vec<TimelineEvent> {
    let Some(time) = out.latest_time() else {
        return Vec::new();
    };
    let Some(balance) = difference.and_then(|d| Balance::compute(order, d)) else {
        out.malformed(
            EventId::facet(order.order_id(), "balance"),
            "order totals overflow",
        );
        return Vec::new();
    };
    let candidates = [
        (
            EventType::PaymentRequired,
            "payment-required",
            balance.payment_required,
            EventKind::PaymentRequired as fn(BalanceEvent) -> EventKind,
        ),
        (
            EventType::RefundRequired,
            "refund-required",
            balance.refund_required,
            EventKind::RefundRequired,
        ),
    ];

    candidates
        .into_iter()
        .filter(|(ty, _, amount, _)| *amount > 0 && supports(*ty))
        .map(|(_, facet, amount, kind)| {
            TimelineEvent::new(
                EventId::facet(order.order_id(), facet),
                time,
                out.order_id(),
                kind(BalanceEvent {
                    amount: out.money(amount),
                }),
            )
        })
        .collect()
}
