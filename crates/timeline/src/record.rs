//! What the shared extractors need to know about an order aggregate.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use ordertrail_core::{AggregateId, AggregateRoot, CurrencyCode};
use ordertrail_purchasing::PurchaseOrder;
use ordertrail_sales::{Fulfillment, LineItem, SalesOrder};

/// Order-level view shared by every vocabulary.
pub trait OrderRecord: AggregateRoot {
    fn order_id(&self) -> AggregateId;
    fn currency(&self) -> &CurrencyCode;
    /// Amount shown on the "placed" event.
    fn total(&self) -> i64;
    fn paid_total(&self) -> i64;
    fn refunded_total(&self) -> i64;
    fn tax_rate_bps(&self) -> Option<u32>;
    fn is_canceled(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn line_items(&self) -> &[LineItem];
    /// Raw `metadata.timeline` entries.
    fn price_log(&self) -> &[JsonValue];

    /// Order-level fulfillments; orders without outbound shipping have none.
    fn fulfillments(&self) -> &[Fulfillment] {
        &[]
    }
}

impl OrderRecord for SalesOrder {
    fn order_id(&self) -> AggregateId {
        self.id.aggregate_id()
    }

    fn currency(&self) -> &CurrencyCode {
        &self.currency_code
    }

    fn total(&self) -> i64 {
        self.total
    }

    fn paid_total(&self) -> i64 {
        self.paid_total
    }

    fn refunded_total(&self) -> i64 {
        self.refunded_total
    }

    fn tax_rate_bps(&self) -> Option<u32> {
        self.tax_rate_bps
    }

    fn is_canceled(&self) -> bool {
        SalesOrder::is_canceled(self)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    fn price_log(&self) -> &[JsonValue] {
        SalesOrder::price_log(self)
    }

    fn fulfillments(&self) -> &[Fulfillment] {
        &self.fulfillments
    }
}

impl OrderRecord for PurchaseOrder {
    fn order_id(&self) -> AggregateId {
        self.id.aggregate_id()
    }

    fn currency(&self) -> &CurrencyCode {
        &self.currency_code
    }

    fn total(&self) -> i64 {
        self.total
    }

    fn paid_total(&self) -> i64 {
        self.paid_total
    }

    fn refunded_total(&self) -> i64 {
        self.refunded_total
    }

    fn tax_rate_bps(&self) -> Option<u32> {
        None
    }

    fn is_canceled(&self) -> bool {
        PurchaseOrder::is_canceled(self)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn line_items(&self) -> &[LineItem] {
        &self.lines
    }

    fn price_log(&self) -> &[JsonValue] {
        PurchaseOrder::price_log(self)
    }
}
