//! Supplier deliveries against a purchase order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{Entity, RecordId};

use crate::order::PurchaseOrderId;

ordertrail_core::aggregate_newtype!(
    /// Delivery identifier.
    DeliveryId
);

/// Delivery lifecycle: goods arrive, then are either put into stock or
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Inventoried,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredItem {
    pub item_id: RecordId,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub purchase_order_id: PurchaseOrderId,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub items: Vec<DeliveredItem>,
    #[serde(default)]
    pub no_notification: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub inventoried_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Entity for Delivery {
    type Id = DeliveryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
