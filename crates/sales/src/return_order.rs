//! Returns (RMAs): items sent back, standalone or on behalf of a swap/claim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{Entity, RecordId};

use crate::claim::ClaimId;
use crate::order::SalesOrderId;
use crate::status::SubOrderStatus;
use crate::swap::SwapId;

ordertrail_core::aggregate_newtype!(
    /// Return identifier.
    ReturnId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub item_id: RecordId,
    pub quantity: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    pub id: ReturnId,
    pub order_id: SalesOrderId,
    pub status: SubOrderStatus,
    #[serde(default)]
    pub swap_id: Option<SwapId>,
    #[serde(default)]
    pub claim_id: Option<ClaimId>,
    #[serde(default)]
    pub items: Vec<ReturnItem>,
    #[serde(default)]
    pub refund_amount: Option<i64>,
    #[serde(default)]
    pub no_notification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Entity for Return {
    type Id = ReturnId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
