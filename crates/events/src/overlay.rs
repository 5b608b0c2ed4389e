use serde::{Deserialize, Serialize};

use ordertrail_sales::SubOrderStatus;

/// The single authoritative status shown for a compound sub-order.
///
/// `S` is the sub-order's own lifecycle status type (`SubOrderStatus` for
/// swaps, claims and returns; `DeliveryStatus` for supplier deliveries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum OverlayStatus<S> {
    /// The sub-order was canceled; nothing recorded afterwards matters.
    Canceled,
    /// A replacement claim whose return has been received.
    Refunded,
    /// Status of the nested return.
    Return(SubOrderStatus),
    /// The sub-order's own status, unmodified.
    Own(S),
}

impl<S> OverlayStatus<S> {
    pub fn is_canceled(&self) -> bool {
        matches!(self, OverlayStatus::Canceled)
    }
}
