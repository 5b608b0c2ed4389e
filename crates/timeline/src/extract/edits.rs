//! Order-edit proposals.
//!
//! A proposal yields `edit-created` plus one event per lifecycle timestamp it
//! carries. The stamps are independent: a proposal requested, then canceled,
//! shows both.

use chrono::{DateTime, Utc};

use ordertrail_core::UserId;
use ordertrail_events::{EditEvent, EventId, EventKind, TimelineEvent};
use ordertrail_sales::OrderEditProposal;

use crate::extract::{Extraction, unique_by_id};

pub fn edits(proposals: &[OrderEditProposal], out: &mut Extraction) {
    for edit in unique_by_id(proposals) {
        let stamps: [(&str, Option<DateTime<Utc>>, Option<UserId>, fn(EditEvent) -> EventKind); 5] = [
            ("created", Some(edit.created_at), Some(edit.created_by), EventKind::EditCreated),
            ("requested", edit.requested_at, edit.requested_by, EventKind::EditRequested),
            ("declined", edit.declined_at, edit.declined_by, EventKind::EditDeclined),
            ("canceled", edit.canceled_at, edit.canceled_by, EventKind::EditCanceled),
            ("confirmed", edit.confirmed_at, edit.confirmed_by, EventKind::EditConfirmed),
        ];

        for (facet, at, actor, kind) in stamps {
            let Some(time) = at else { continue };
            let reason = if facet == "declined" {
                edit.declined_reason.clone()
            } else {
                None
            };
            let payload = EditEvent {
                edit_id: edit.id,
                current_status: edit.status,
                actor,
                changes: edit.changes.clone(),
                difference_due: out.money(edit.difference_due),
                reason,
            };
            out.push(TimelineEvent::new(
                EventId::facet(edit.id, facet),
                time,
                out.order_id(),
                kind(payload),
            ));
        }
    }
}
