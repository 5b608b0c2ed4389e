//! Snapshot fixtures shared by the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use ordertrail_core::{AggregateId, CurrencyCode, RecordId, UserId};
use ordertrail_events::{EventType, TimelineEvent};
use ordertrail_purchasing::{
    DeliveredItem, Delivery, DeliveryId, DeliveryStatus, PurchaseOrder, PurchaseOrderId,
    PurchaseOrderStatus, SupplierId,
};
use ordertrail_sales::{
    Claim, ClaimId, ClaimItem, ClaimPaymentStatus, ClaimType, EditStatus, Fulfillment,
    FulfillmentItem, FulfillmentStatus, LineItem, Note, Notification, OrderEditId,
    OrderEditProposal, PaidEntry, PaidLedger, PaymentRecord, PaymentStatus, RefundReason,
    RefundRecord, Return, ReturnId, ReturnItem, SalesOrder, SalesOrderId, SalesOrderStatus,
    SubOrderStatus, Swap, SwapId,
};
use ordertrail_timeline::{
    PurchaseSnapshot, PurchaseSubOrders, PurchaseVocabulary, SalesSnapshot, SalesSubOrders,
    SalesVocabulary, Source, Timeline, TimelineConfig, build,
};

pub const ORDER: u128 = 1;
pub const SHIRT: u128 = 100;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

pub fn at(hours: i64) -> DateTime<Utc> {
    t0() + Duration::hours(hours)
}

pub fn aid(n: u128) -> AggregateId {
    AggregateId::from_uuid(Uuid::from_u128(n))
}

pub fn rid(n: u128) -> RecordId {
    RecordId::from_uuid(Uuid::from_u128(n))
}

pub fn uid(n: u128) -> UserId {
    UserId::from_uuid(Uuid::from_u128(n))
}

pub fn currency() -> CurrencyCode {
    CurrencyCode::parse("VND").unwrap()
}

pub fn line_item(n: u128, title: &str, unit_price: i64) -> LineItem {
    LineItem {
        id: rid(n),
        title: title.to_string(),
        thumbnail: Some(format!("https://cdn.example.com/{n}.png")),
        quantity: 1,
        unit_price,
    }
}

pub fn sales_order(total: i64, paid_total: i64, refunded_total: i64) -> SalesOrder {
    SalesOrder {
        id: SalesOrderId::new(aid(ORDER)),
        version: 3,
        email: Some("buyer@example.com".to_string()),
        currency_code: currency(),
        total,
        paid_total,
        refunded_total,
        tax_rate_bps: Some(1000),
        status: SalesOrderStatus::Pending,
        fulfillment_status: FulfillmentStatus::NotFulfilled,
        payment_status: PaymentStatus::Captured,
        items: vec![line_item(SHIRT, "Linen shirt", total)],
        shipping_methods: Vec::new(),
        fulfillments: Vec::new(),
        metadata: json!({}),
        created_at: t0(),
        updated_at: t0(),
        canceled_at: None,
    }
}

pub fn sales_snapshot(order: SalesOrder) -> SalesSnapshot {
    SalesSnapshot {
        order: Source::ready(order),
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

pub fn fulfillment(n: u128, item: u128, created: i64, shipped: Option<i64>) -> Fulfillment {
    Fulfillment {
        id: rid(n),
        items: vec![FulfillmentItem {
            item_id: rid(item),
            quantity: 1,
        }],
        location_id: Some("warehouse-1".to_string()),
        no_notification: false,
        created_at: at(created),
        shipped_at: shipped.map(at),
    }
}

pub fn payment(n: u128, captures: &[(i64, i64)]) -> PaymentRecord {
    PaymentRecord {
        id: rid(n),
        currency_code: currency(),
        amount: captures.iter().map(|(amount, _)| amount).sum(),
        amount_refunded: 0,
        provider_id: Some("manual".to_string()),
        paid_ledger: PaidLedger(
            captures
                .iter()
                .map(|&(amount, hour)| PaidEntry {
                    amount,
                    paid_at: at(hour),
                })
                .collect(),
        ),
        created_at: t0(),
    }
}

pub fn refund(n: u128, amount: i64, hour: i64) -> RefundRecord {
    RefundRecord {
        id: rid(n),
        payment_id: None,
        amount,
        reason: RefundReason::Other,
        note: Some("customer changed their mind".to_string()),
        created_at: at(hour),
    }
}

pub fn note(n: u128, hour: i64) -> Note {
    Note {
        id: rid(n),
        resource_id: aid(ORDER),
        author_id: uid(7),
        value: "called the customer".to_string(),
        created_at: at(hour),
    }
}

pub fn notification(n: u128, hour: i64) -> Notification {
    Notification {
        id: rid(n),
        resource_id: aid(ORDER),
        to: "buyer@example.com".to_string(),
        event_name: "order.placed".to_string(),
        created_at: at(hour),
    }
}

pub fn swap(n: u128, return_id: Option<u128>, hour: i64) -> Swap {
    Swap {
        id: SwapId::new(aid(n)),
        order_id: SalesOrderId::new(aid(ORDER)),
        status: SubOrderStatus::Requested,
        payment_status: PaymentStatus::Awaiting,
        fulfillment_status: FulfillmentStatus::NotFulfilled,
        return_id: return_id.map(|r| ReturnId::new(aid(r))),
        cart_id: None,
        additional_items: vec![line_item(n + 1000, "Wool shirt", 60000)],
        fulfillments: Vec::new(),
        difference_due: Some(10000),
        no_notification: false,
        created_at: at(hour),
        canceled_at: None,
    }
}

pub fn claim(n: u128, claim_type: ClaimType, return_id: Option<u128>, hour: i64) -> Claim {
    Claim {
        id: ClaimId::new(aid(n)),
        order_id: SalesOrderId::new(aid(ORDER)),
        claim_type,
        status: SubOrderStatus::Requested,
        payment_status: ClaimPaymentStatus::Na,
        fulfillment_status: FulfillmentStatus::NotFulfilled,
        return_id: return_id.map(|r| ReturnId::new(aid(r))),
        claim_items: vec![ClaimItem {
            item_id: rid(SHIRT),
            quantity: 1,
            reason: "production_failure".to_string(),
            note: None,
        }],
        additional_items: vec![line_item(n + 1000, "Linen shirt (replacement)", 0)],
        fulfillments: Vec::new(),
        refund_amount: None,
        no_notification: false,
        created_at: at(hour),
        canceled_at: None,
    }
}

pub fn return_order(n: u128, status: SubOrderStatus, hour: i64) -> Return {
    Return {
        id: ReturnId::new(aid(n)),
        order_id: SalesOrderId::new(aid(ORDER)),
        status,
        swap_id: None,
        claim_id: None,
        items: vec![ReturnItem {
            item_id: rid(SHIRT),
            quantity: 1,
            reason: None,
            note: None,
        }],
        refund_amount: Some(50000),
        no_notification: false,
        created_at: at(hour),
        updated_at: at(hour),
        received_at: None,
        canceled_at: None,
    }
}

pub fn edit(n: u128, status: EditStatus, difference_due: i64, hour: i64) -> OrderEditProposal {
    OrderEditProposal {
        id: OrderEditId::new(aid(n)),
        order_id: SalesOrderId::new(aid(ORDER)),
        status,
        changes: Vec::new(),
        difference_due,
        internal_note: None,
        created_by: uid(7),
        created_at: at(hour),
        requested_by: None,
        requested_at: None,
        declined_by: None,
        declined_at: None,
        declined_reason: None,
        canceled_by: None,
        canceled_at: None,
        confirmed_by: None,
        confirmed_at: None,
    }
}

pub fn purchase_order(total: i64, paid_total: i64) -> PurchaseOrder {
    PurchaseOrder {
        id: PurchaseOrderId::new(aid(ORDER)),
        version: 1,
        supplier_id: SupplierId::new(aid(2)),
        currency_code: currency(),
        total,
        paid_total,
        refunded_total: 0,
        status: PurchaseOrderStatus::Ordered,
        lines: vec![line_item(SHIRT, "Linen roll", total)],
        metadata: json!({}),
        created_at: t0(),
        updated_at: t0(),
        canceled_at: None,
    }
}

pub fn delivery(n: u128, status: DeliveryStatus, delivered: Option<i64>) -> Delivery {
    Delivery {
        id: DeliveryId::new(aid(n)),
        purchase_order_id: PurchaseOrderId::new(aid(ORDER)),
        status,
        items: vec![DeliveredItem {
            item_id: rid(SHIRT),
            quantity: 10,
        }],
        no_notification: false,
        created_at: t0(),
        delivered_at: delivered.map(at),
        inventoried_at: None,
        rejected_at: None,
        rejection_reason: None,
        canceled_at: None,
    }
}

pub fn purchase_snapshot(order: PurchaseOrder, deliveries: Vec<Delivery>) -> PurchaseSnapshot {
    PurchaseSnapshot {
        order: Source::ready(order),
        payments: Source::ready(Vec::new()),
        refunds: Source::ready(Vec::new()),
        edits: Source::Pending,
        notes: Source::ready(Vec::new()),
        notifications: Source::ready(Vec::new()),
        sub_orders: PurchaseSubOrders {
            deliveries: Source::ready(deliveries),
        },
    }
}

pub fn build_sales(snapshot: &SalesSnapshot) -> Timeline {
    build_sales_with(snapshot, &TimelineConfig::default())
}

pub fn build_sales_with(snapshot: &SalesSnapshot, config: &TimelineConfig) -> Timeline {
    build(&SalesVocabulary, snapshot, config)
        .expect("build should not fail")
        .into_timeline()
        .expect("timeline should be ready")
}

pub fn build_purchase(snapshot: &PurchaseSnapshot) -> Timeline {
    build(&PurchaseVocabulary, snapshot, &TimelineConfig::default())
        .expect("build should not fail")
        .into_timeline()
        .expect("timeline should be ready")
}

pub fn types(timeline: &Timeline) -> Vec<EventType> {
    timeline.events.iter().map(|e| e.kind.event_type()).collect()
}

pub fn of_type(timeline: &Timeline, ty: EventType) -> Vec<&TimelineEvent> {
    timeline
        .events
        .iter()
        .filter(|e| e.kind.event_type() == ty)
        .collect()
}

pub fn assert_unique_ids(timeline: &Timeline) {
    let ids: std::collections::HashSet<_> = timeline.events.iter().map(|e| &e.id).collect();
    assert_eq!(ids.len(), timeline.events.len(), "duplicate event ids");
}
