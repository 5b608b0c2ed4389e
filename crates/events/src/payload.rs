//! Variant payloads carried by [`crate::EventKind`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{AggregateId, CurrencyCode, Money, RecordId, UserId};
use ordertrail_purchasing::{DeliveryId, DeliveryStatus};
use ordertrail_sales::{
    ClaimId, ClaimPaymentStatus, ClaimType, EditStatus, FulfillmentStatus, ItemChange,
    OrderEditId, PaymentStatus, RefundReason, ReturnId, SubOrderStatus, SwapId,
};

use crate::overlay::OverlayStatus;

/// A line item as shown on an event.
///
/// `title`/`thumbnail` come from the referenced line item and are `None`
/// when that line item is not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub item_id: RecordId,
    pub quantity: i64,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub amount: Money,
    pub tax_rate_bps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChangeEvent {
    pub item_id: Option<RecordId>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub old_unit_price: i64,
    pub new_unit_price: i64,
    pub currency: CurrencyCode,
    pub actor: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub author_id: UserId,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub to: String,
    pub event_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundEvent {
    pub amount: Money,
    pub reason: RefundReason,
    pub note: Option<String>,
}

/// One capture recorded in a payment's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidEvent {
    pub payment_id: RecordId,
    /// Position of the capture in the payment's ledger.
    pub capture_index: usize,
    pub amount: Money,
}

/// Shared payload of the `edit-*` events.
///
/// `current_status` is the proposal's status at build time, which may be
/// further along than the stage the event marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    pub edit_id: OrderEditId,
    pub current_status: EditStatus,
    pub actor: Option<UserId>,
    pub changes: Vec<ItemChange>,
    pub difference_due: Money,
    pub reason: Option<String>,
}

/// What a fulfillment was made for; drives label selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentSource {
    Order,
    Exchange,
    Claim,
}

impl FulfillmentSource {
    pub fn as_str(self) -> &'static str {
        match self {
            FulfillmentSource::Order => "order",
            FulfillmentSource::Exchange => "exchange",
            FulfillmentSource::Claim => "claim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentEvent {
    pub fulfillment_id: RecordId,
    pub source: FulfillmentSource,
    pub source_id: AggregateId,
    pub items: Vec<EventItem>,
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeEvent {
    pub swap_id: SwapId,
    pub status: OverlayStatus<SubOrderStatus>,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub return_id: Option<ReturnId>,
    /// `None` when the swap has no return or the return is missing.
    pub return_status: Option<SubOrderStatus>,
    pub exchange_items: Vec<EventItem>,
    pub return_items: Vec<EventItem>,
    pub difference_due: Option<Money>,
    pub requested_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEvent {
    pub claim_id: ClaimId,
    pub claim_type: ClaimType,
    pub status: OverlayStatus<SubOrderStatus>,
    pub payment_status: ClaimPaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub return_id: Option<ReturnId>,
    pub return_status: Option<SubOrderStatus>,
    pub claim_items: Vec<EventItem>,
    pub new_items: Vec<EventItem>,
    pub refund_amount: Option<Money>,
    pub requested_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnEvent {
    pub return_id: ReturnId,
    pub status: OverlayStatus<SubOrderStatus>,
    pub swap_id: Option<SwapId>,
    pub items: Vec<EventItem>,
    pub refund_amount: Option<Money>,
    pub requested_at: DateTime<Utc>,
    pub received_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
}

/// Outstanding balance (payment-required / refund-required).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEvent {
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub delivery_id: DeliveryId,
    pub status: OverlayStatus<DeliveryStatus>,
    pub items: Vec<EventItem>,
    pub rejection_reason: Option<String>,
}
