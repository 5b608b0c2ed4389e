//! The aggregate snapshot set handed to one build.

use serde::{Deserialize, Serialize};

use ordertrail_purchasing::{Delivery, PurchaseOrder};
use ordertrail_sales::{
    Claim, Note, Notification, OrderEditProposal, PaymentRecord, RefundRecord, Return, SalesOrder,
    Swap,
};

use crate::source::Source;

/// Everything fetched for one order id.
///
/// `O` is the order aggregate, `X` the vocabulary's sub-order collections.
/// Sources that were never fetched default to [`Source::Pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "O: Serialize, X: Serialize",
    deserialize = "O: Deserialize<'de>, X: Deserialize<'de> + Default"
))]
pub struct Snapshot<O, X> {
    #[serde(default)]
    pub order: Source<O>,
    #[serde(default)]
    pub payments: Source<Vec<PaymentRecord>>,
    #[serde(default)]
    pub refunds: Source<Vec<RefundRecord>>,
    #[serde(default)]
    pub edits: Source<Vec<OrderEditProposal>>,
    #[serde(default)]
    pub notes: Source<Vec<Note>>,
    #[serde(default)]
    pub notifications: Source<Vec<Notification>>,
    #[serde(default)]
    pub sub_orders: X,
}

impl<O, X: Default> Default for Snapshot<O, X> {
    fn default() -> Self {
        Self {
            order: Source::Pending,
            payments: Source::Pending,
            refunds: Source::Pending,
            edits: Source::Pending,
            notes: Source::Pending,
            notifications: Source::Pending,
            sub_orders: X::default(),
        }
    }
}

/// Sub-order collections of a sales order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSubOrders {
    #[serde(default)]
    pub swaps: Source<Vec<Swap>>,
    #[serde(default)]
    pub claims: Source<Vec<Claim>>,
    #[serde(default)]
    pub returns: Source<Vec<Return>>,
}

/// Sub-order collections of a purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSubOrders {
    #[serde(default)]
    pub deliveries: Source<Vec<Delivery>>,
}

pub type SalesSnapshot = Snapshot<SalesOrder, SalesSubOrders>;
pub type PurchaseSnapshot = Snapshot<PurchaseOrder, PurchaseSubOrders>;
