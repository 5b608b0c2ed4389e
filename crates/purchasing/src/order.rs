use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use ordertrail_core::{AggregateRoot, CurrencyCode};
use ordertrail_sales::LineItem;

ordertrail_core::aggregate_newtype!(
    /// Purchase order identifier.
    PurchaseOrderId
);

ordertrail_core::aggregate_newtype!(
    /// Supplier (party) identifier.
    SupplierId
);

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Draft,
    Ordered,
    PartiallyReceived,
    Received,
    Closed,
    Canceled,
}

/// Snapshot of a supplier purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    #[serde(default)]
    pub version: u64,
    pub supplier_id: SupplierId,
    pub currency_code: CurrencyCode,
    pub total: i64,
    #[serde(default)]
    pub paid_total: i64,
    #[serde(default)]
    pub refunded_total: i64,
    pub status: PurchaseOrderStatus,
    #[serde(default)]
    pub lines: Vec<LineItem>,
    /// Free-form metadata. `metadata.timeline` holds the price-change log.
    #[serde(default)]
    pub metadata: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    pub fn is_canceled(&self) -> bool {
        matches!(self.status, PurchaseOrderStatus::Canceled)
    }

    /// Raw entries of the embedded price-change log (`metadata.timeline`).
    pub fn price_log(&self) -> &[JsonValue] {
        self.metadata
            .get("timeline")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_supplier_order() {
        let order: PurchaseOrder = serde_json::from_value(json!({
            "id": "0190f5a0-0000-7000-8000-0000000000aa",
            "supplier_id": "0190f5a0-0000-7000-8000-0000000000bb",
            "currency_code": "eur",
            "total": 120000,
            "status": "partially_received",
            "metadata": { "timeline": [{}] },
            "created_at": "2024-03-01T08:00:00Z",
            "updated_at": "2024-03-02T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(order.status, PurchaseOrderStatus::PartiallyReceived);
        assert_eq!(order.currency_code.as_str(), "EUR");
        assert_eq!(order.price_log().len(), 1);
        assert!(!order.is_canceled());
        assert_eq!(order.version(), 0);
    }
}
