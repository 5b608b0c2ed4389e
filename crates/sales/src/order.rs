use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use ordertrail_core::{AggregateRoot, CurrencyCode, Entity, RecordId};

use crate::status::{FulfillmentStatus, PaymentStatus};

ordertrail_core::aggregate_newtype!(
    /// Sales order identifier.
    SalesOrderId
);

/// Sales order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesOrderStatus {
    Pending,
    Completed,
    Archived,
    Canceled,
    RequiresAction,
}

/// Order line: what was bought, how many, at which unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: i64,
}

impl Entity for LineItem {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: RecordId,
    pub name: String,
    pub price: i64,
}

/// Quantity of one line item packed into a fulfillment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentItem {
    pub item_id: RecordId,
    pub quantity: i64,
}

/// One pick/pack/ship run for an order, swap or claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub id: RecordId,
    #[serde(default)]
    pub items: Vec<FulfillmentItem>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub no_notification: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
}

impl Entity for Fulfillment {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Snapshot of a sales order as returned by the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: SalesOrderId,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub email: Option<String>,
    pub currency_code: CurrencyCode,
    pub total: i64,
    #[serde(default)]
    pub paid_total: i64,
    #[serde(default)]
    pub refunded_total: i64,
    /// Tax rate in basis points (1250 = 12.5%).
    #[serde(default)]
    pub tax_rate_bps: Option<u32>,
    pub status: SalesOrderStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub shipping_methods: Vec<ShippingMethod>,
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
    /// Free-form metadata. `metadata.timeline` holds the price-change log.
    #[serde(default)]
    pub metadata: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl SalesOrder {
    pub fn is_canceled(&self) -> bool {
        matches!(self.status, SalesOrderStatus::Canceled)
    }

    /// Raw entries of the embedded price-change log (`metadata.timeline`).
    ///
    /// Entries are free-form JSON; a missing or non-array log reads as empty.
    pub fn price_log(&self) -> &[JsonValue] {
        self.metadata
            .get("timeline")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl AggregateRoot for SalesOrder {
    type Id = SalesOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
