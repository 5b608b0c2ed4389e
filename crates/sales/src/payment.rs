//! Payments (with their capture ledger) and refunds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{CurrencyCode, Entity, RecordId};

/// One partial capture against a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidEntry {
    pub amount: i64,
    pub paid_at: DateTime<Utc>,
}

/// Ordered capture history of a payment. Supports multiple captures per
/// payment; entries are kept exactly as recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaidLedger(pub Vec<PaidEntry>);

impl PaidLedger {
    pub fn entries(&self) -> &[PaidEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all captured amounts.
    pub fn captured_total(&self) -> i64 {
        self.0.iter().map(|e| e.amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: RecordId,
    pub currency_code: CurrencyCode,
    pub amount: i64,
    #[serde(default)]
    pub amount_refunded: i64,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub paid_ledger: PaidLedger,
    pub created_at: DateTime<Utc>,
}

impl Entity for PaymentRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    Discount,
    Return,
    Swap,
    Claim,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRecord {
    pub id: RecordId,
    #[serde(default)]
    pub payment_id: Option<RecordId>,
    pub amount: i64,
    pub reason: RefundReason,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for RefundRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
