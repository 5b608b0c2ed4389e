//! Order edit proposals: request/confirm/decline/cancel lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordertrail_core::{Entity, RecordId, UserId};

use crate::order::{LineItem, SalesOrderId};

ordertrail_core::aggregate_newtype!(
    /// Order edit proposal identifier.
    OrderEditId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditStatus {
    Created,
    Requested,
    Declined,
    Canceled,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemChangeType {
    ItemAdd,
    ItemRemove,
    ItemUpdate,
}

/// One line-item change carried by a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub change_type: ItemChangeType,
    /// Line item before the change (absent for additions).
    #[serde(default)]
    pub original_line_item: Option<LineItem>,
    /// Line item after the change (absent for removals).
    #[serde(default)]
    pub line_item: Option<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEditProposal {
    pub id: OrderEditId,
    pub order_id: SalesOrderId,
    pub status: EditStatus,
    #[serde(default)]
    pub changes: Vec<ItemChange>,
    /// Amount the customer owes (positive) or is owed (negative) once confirmed.
    #[serde(default)]
    pub difference_due: i64,
    #[serde(default)]
    pub internal_note: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub requested_by: Option<UserId>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub declined_by: Option<UserId>,
    #[serde(default)]
    pub declined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub declined_reason: Option<String>,
    #[serde(default)]
    pub canceled_by: Option<UserId>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_by: Option<UserId>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl OrderEditProposal {
    pub fn is_requested(&self) -> bool {
        matches!(self.status, EditStatus::Requested)
    }
}

impl Entity for OrderEditProposal {
    type Id = OrderEditId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
