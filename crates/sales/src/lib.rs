//! Sales order snapshots.
//!
//! Read-only representations of a sales order and the records that hang off
//! it (exchanges, claims, returns, payments, refunds, edit proposals, notes,
//! notifications) as fetched from the order-management service. No IO, no
//! derivation beyond small accessors; the timeline engine consumes these.

pub mod claim;
pub mod edit;
pub mod note;
pub mod order;
pub mod payment;
pub mod return_order;
pub mod status;
pub mod swap;

pub use claim::{Claim, ClaimId, ClaimItem, ClaimPaymentStatus, ClaimType};
pub use edit::{EditStatus, ItemChange, ItemChangeType, OrderEditId, OrderEditProposal};
pub use note::{Note, Notification};
pub use order::{
    Fulfillment, FulfillmentItem, LineItem, SalesOrder, SalesOrderId, SalesOrderStatus,
    ShippingMethod,
};
pub use payment::{PaidEntry, PaidLedger, PaymentRecord, RefundReason, RefundRecord};
pub use return_order::{Return, ReturnId, ReturnItem};
pub use status::{FulfillmentStatus, PaymentStatus, SubOrderStatus};
pub use swap::{Swap, SwapId};
