//! Operator actions a UI may offer next to an event.
//!
//! Decided from the event's derived fields only, so callers never look at the
//! raw records again.

use serde::Serialize;

use ordertrail_events::{EventKind, OverlayStatus, TimelineEvent};
use ordertrail_purchasing::DeliveryStatus;
use ordertrail_sales::{EditStatus, FulfillmentStatus, SubOrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorAction {
    CancelReturn,
    ReceiveReturn,
    CancelExchange,
    ReceiveExchangeReturn,
    CancelClaim,
    RequestEdit,
    ConfirmEdit,
    CancelEdit,
    CapturePayment,
    IssueRefund,
    ResendNotification,
    MarkInventoried,
    RejectDelivery,
}

pub fn offerable(event: &TimelineEvent) -> Vec<OperatorAction> {
    use OperatorAction::*;

    match &event.kind {
        EventKind::Return(ret) => match ret.status {
            OverlayStatus::Own(SubOrderStatus::Requested) => vec![CancelReturn, ReceiveReturn],
            OverlayStatus::Own(SubOrderStatus::RequiresAction) => vec![ReceiveReturn],
            _ => Vec::new(),
        },
        EventKind::Exchange(swap) => {
            let mut actions = Vec::new();
            if !swap.status.is_canceled() && swap.fulfillment_status == FulfillmentStatus::NotFulfilled
            {
                actions.push(CancelExchange);
            }
            if swap.status == OverlayStatus::Return(SubOrderStatus::Requested) {
                actions.push(ReceiveExchangeReturn);
            }
            actions
        }
        EventKind::Claim(claim) => {
            if !claim.status.is_canceled()
                && claim.fulfillment_status == FulfillmentStatus::NotFulfilled
            {
                vec![CancelClaim]
            } else {
                Vec::new()
            }
        }
        EventKind::EditCreated(edit)
        | EventKind::EditRequested(edit)
        | EventKind::EditDeclined(edit)
        | EventKind::EditCanceled(edit)
        | EventKind::EditConfirmed(edit) => match edit.current_status {
            EditStatus::Requested => vec![ConfirmEdit, CancelEdit],
            EditStatus::Created => vec![RequestEdit, CancelEdit],
            EditStatus::Declined | EditStatus::Canceled | EditStatus::Confirmed => Vec::new(),
        },
        EventKind::PaymentRequired(_) => vec![CapturePayment],
        EventKind::RefundRequired(_) => vec![IssueRefund],
        EventKind::Notification(_) => vec![ResendNotification],
        EventKind::Delivered(delivery)
        | EventKind::Inventoried(delivery)
        | EventKind::Rejected(delivery) => match delivery.status {
            OverlayStatus::Own(DeliveryStatus::Delivered) => vec![MarkInventoried, RejectDelivery],
            _ => Vec::new(),
        },
        EventKind::Placed(_)
        | EventKind::Canceled
        | EventKind::PriceChanged(_)
        | EventKind::Note(_)
        | EventKind::Refund(_)
        | EventKind::Paid(_)
        | EventKind::Fulfilled(_)
        | EventKind::Shipped(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ordertrail_core::{AggregateId, CurrencyCode, Money};
    use ordertrail_events::{BalanceEvent, EventId, ReturnEvent};
    use ordertrail_sales::ReturnId;
    use uuid::Uuid;

    fn event(kind: EventKind) -> TimelineEvent {
        TimelineEvent::new(
            EventId::new("e"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            AggregateId::from_uuid(Uuid::from_u128(1)),
            kind,
        )
    }

    fn ret(status: OverlayStatus<SubOrderStatus>) -> TimelineEvent {
        event(EventKind::Return(ReturnEvent {
            return_id: ReturnId::new(AggregateId::from_uuid(Uuid::from_u128(2))),
            status,
            swap_id: None,
            items: Vec::new(),
            refund_amount: None,
            requested_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            received_at: None,
            canceled_at: None,
        }))
    }

    #[test]
    fn cancel_return_only_when_requested() {
        assert_eq!(
            offerable(&ret(OverlayStatus::Own(SubOrderStatus::Requested))),
            vec![OperatorAction::CancelReturn, OperatorAction::ReceiveReturn]
        );
        assert!(offerable(&ret(OverlayStatus::Own(SubOrderStatus::Received))).is_empty());
        assert!(offerable(&ret(OverlayStatus::Canceled)).is_empty());
    }

    #[test]
    fn balances_offer_money_actions() {
        let amount = Money::new(10, CurrencyCode::parse("EUR").unwrap());
        assert_eq!(
            offerable(&event(EventKind::PaymentRequired(BalanceEvent { amount }))),
            vec![OperatorAction::CapturePayment]
        );
        assert!(offerable(&event(EventKind::Canceled)).is_empty());
    }
}
