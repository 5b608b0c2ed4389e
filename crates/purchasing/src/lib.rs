//! Purchasing snapshots: supplier purchase orders and their deliveries.
//!
//! Same shape as the sales snapshots (read-only, no IO) but with the
//! supplier-side vocabulary: goods are delivered, inventoried or rejected
//! instead of exchanged or claimed.

pub mod delivery;
pub mod order;

pub use delivery::{DeliveredItem, Delivery, DeliveryId, DeliveryStatus};
pub use order::{PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus, SupplierId};
