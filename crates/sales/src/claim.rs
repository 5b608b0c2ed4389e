//! Claims: customer complaints resolved via refund or replacement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{Entity, RecordId};

use crate::order::{Fulfillment, LineItem, SalesOrderId};
use crate::return_order::ReturnId;
use crate::status::{FulfillmentStatus, SubOrderStatus};

ordertrail_core::aggregate_newtype!(
    /// Claim identifier.
    ClaimId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Refund,
    Replace,
}

/// Refund progress of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPaymentStatus {
    Na,
    NotRefunded,
    Refunded,
}

/// A claimed line item and why it was claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimItem {
    pub item_id: RecordId,
    pub quantity: i64,
    pub reason: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub order_id: SalesOrderId,
    pub claim_type: ClaimType,
    pub status: SubOrderStatus,
    pub payment_status: ClaimPaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    #[serde(default)]
    pub return_id: Option<ReturnId>,
    #[serde(default)]
    pub claim_items: Vec<ClaimItem>,
    /// Replacement items (replace claims only).
    #[serde(default)]
    pub additional_items: Vec<LineItem>,
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
    #[serde(default)]
    pub refund_amount: Option<i64>,
    #[serde(default)]
    pub no_notification: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Claim {
    pub fn is_replacement(&self) -> bool {
        matches!(self.claim_type, ClaimType::Replace)
    }
}

impl Entity for Claim {
    type Id = ClaimId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
