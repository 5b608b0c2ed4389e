//! Money movements: captured payments and issued refunds.

use ordertrail_core::Money;
use ordertrail_events::{EventId, EventKind, PaidEvent, RefundEvent, TimelineEvent};
use ordertrail_sales::{PaymentRecord, RefundRecord};

use crate::extract::{Extraction, unique_by_id};

/// One `paid` event per ledger entry, so N captures give N events.
pub fn paid(payments: &[PaymentRecord], out: &mut Extraction) {
    for payment in unique_by_id(payments) {
        for (index, entry) in payment.paid_ledger.entries().iter().enumerate() {
            out.push(TimelineEvent::new(
                EventId::facet(payment.id, &format!("paid-{index}")),
                entry.paid_at,
                out.order_id(),
                EventKind::Paid(PaidEvent {
                    payment_id: payment.id,
                    capture_index: index,
                    amount: Money::new(entry.amount, payment.currency_code.clone()),
                }),
            ));
        }
    }
}

pub fn refunds(refunds: &[RefundRecord], out: &mut Extraction) {
    for refund in unique_by_id(refunds) {
        out.push(TimelineEvent::new(
            EventId::facet(refund.id, "refund"),
            refund.created_at,
            out.order_id(),
            EventKind::Refund(RefundEvent {
                amount: out.money(refund.amount),
                reason: refund.reason,
                note: refund.note.clone(),
            }),
        ));
    }
}
