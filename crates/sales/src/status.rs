//! Status vocabularies shared by orders and their sub-orders.

use serde::{Deserialize, Serialize};

/// Fulfillment progress of an order, swap or claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    NotFulfilled,
    PartiallyFulfilled,
    Fulfilled,
    PartiallyShipped,
    Shipped,
    PartiallyReturned,
    Returned,
    Canceled,
    RequiresAction,
}

impl FulfillmentStatus {
    /// Whether any fulfillment work has been recorded.
    pub fn has_progress(self) -> bool {
        !matches!(self, FulfillmentStatus::NotFulfilled)
    }
}

/// Payment progress of an order or swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotPaid,
    Awaiting,
    Captured,
    PartiallyRefunded,
    Refunded,
    DifferenceRefunded,
    Canceled,
    RequiresAction,
}

/// Lifecycle status of a compound sub-order (swap, claim, return).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubOrderStatus {
    Requested,
    Received,
    RequiresAction,
    Completed,
    Canceled,
}
