//! Swaps (exchanges): returned items traded for different items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{AggregateId, Entity};

use crate::order::{Fulfillment, LineItem, SalesOrderId};
use crate::return_order::ReturnId;
use crate::status::{FulfillmentStatus, PaymentStatus, SubOrderStatus};

ordertrail_core::aggregate_newtype!(
    /// Swap identifier.
    SwapId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub id: SwapId,
    /// Owning order (back-reference, not ownership).
    pub order_id: SalesOrderId,
    pub status: SubOrderStatus,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    /// The return that brings the exchanged items back.
    #[serde(default)]
    pub return_id: Option<ReturnId>,
    /// Cart used to price the replacement items.
    #[serde(default)]
    pub cart_id: Option<AggregateId>,
    /// Items sent out in exchange.
    #[serde(default)]
    pub additional_items: Vec<LineItem>,
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
    /// Positive when the customer owes money, negative when owed a refund.
    #[serde(default)]
    pub difference_due: Option<i64>,
    #[serde(default)]
    pub no_notification: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Entity for Swap {
    type Id = SwapId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
