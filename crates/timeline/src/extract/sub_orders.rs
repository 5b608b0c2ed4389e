//! Exchanges (swaps), claims and returns.
//!
//! Each sub-order yields one event at its request time, carrying its resolved
//! overlay status and cancellation time.
//! Exchanges and claims also yield their fulfillments once fulfillment has
//! started. A return linked to a claim is shown through the claim only.

use std::collections::HashSet;

use ordertrail_events::{
    ClaimEvent, EventId, EventItem, EventKind, ExchangeEvent, FulfillmentSource, ReturnEvent,
    TimelineEvent,
};
use ordertrail_sales::{Claim, FulfillmentStatus, LineItem, Return, ReturnId, Swap};

use crate::extract::fulfillment::fulfillments;
use crate::extract::{Extraction, ItemCatalog, unique_by_id};
use crate::overlay::{NestedReturn, ReturnIndex, resolve_overlay};

fn added_item(item: &LineItem) -> EventItem {
    EventItem {
        item_id: item.id,
        quantity: item.quantity,
        title: Some(item.title.clone()),
        thumbnail: item.thumbnail.clone(),
    }
}

fn returned_items(
    nested: &NestedReturn<'_>,
    owner: &EventId,
    catalog: &ItemCatalog<'_>,
    out: &mut Extraction,
) -> Vec<EventItem> {
    match nested.found() {
        Some(ret) => ret
            .items
            .iter()
            .map(|i| catalog.event_item(i.item_id, i.quantity, owner, out))
            .collect(),
        None => Vec::new(),
    }
}

fn report_missing(nested: &NestedReturn<'_>, owner: &EventId, out: &mut Extraction) {
    if let NestedReturn::Missing(id) = nested {
        out.malformed(owner, format!("references unknown return {id}"));
    }
}

pub fn exchanges(
    swaps: &[Swap],
    returns: &ReturnIndex<'_>,
    catalog: &ItemCatalog<'_>,
    out: &mut Extraction,
) {
    for swap in unique_by_id(swaps) {
        let id = EventId::facet(swap.id, "exchange");
        let nested = returns.nested(swap);
        report_missing(&nested, &id, out);

        let payload = ExchangeEvent {
            swap_id: swap.id,
            status: resolve_overlay(swap, &nested),
            payment_status: swap.payment_status,
            fulfillment_status: swap.fulfillment_status,
            return_id: swap.return_id,
            return_status: nested.found().map(|r| r.status),
            exchange_items: swap.additional_items.iter().map(added_item).collect(),
            return_items: returned_items(&nested, &id, catalog, out),
            difference_due: swap.difference_due.map(|amount| out.money(amount)),
            requested_at: swap.created_at,
            canceled_at: swap.canceled_at,
        };
        out.push(
            TimelineEvent::new(
                id,
                swap.created_at,
                out.order_id(),
                EventKind::Exchange(payload),
            )
            .with_no_notification(swap.no_notification),
        );

        if swap.fulfillment_status != FulfillmentStatus::NotFulfilled {
            fulfillments(
                &swap.fulfillments,
                FulfillmentSource::Exchange,
                swap.id.aggregate_id(),
                catalog,
                out,
            );
        }
    }
}

pub fn claims(
    claims: &[Claim],
    returns: &ReturnIndex<'_>,
    catalog: &ItemCatalog<'_>,
    out: &mut Extraction,
) {
    for claim in unique_by_id(claims) {
        let id = EventId::facet(claim.id, "claim");
        let nested = returns.nested(claim);
        report_missing(&nested, &id, out);

        let claim_items = claim
            .claim_items
            .iter()
            .map(|i| catalog.event_item(i.item_id, i.quantity, &id, out))
            .collect();

        let payload = ClaimEvent {
            claim_id: claim.id,
            claim_type: claim.claim_type,
            status: resolve_overlay(claim, &nested),
            payment_status: claim.payment_status,
            fulfillment_status: claim.fulfillment_status,
            return_id: claim.return_id,
            return_status: nested.found().map(|r| r.status),
            claim_items,
            new_items: claim.additional_items.iter().map(added_item).collect(),
            refund_amount: claim.refund_amount.map(|amount| out.money(amount)),
            requested_at: claim.created_at,
            canceled_at: claim.canceled_at,
        };
        out.push(
            TimelineEvent::new(
                id,
                claim.created_at,
                out.order_id(),
                EventKind::Claim(payload),
            )
            .with_no_notification(claim.no_notification),
        );

        if claim.fulfillment_status != FulfillmentStatus::NotFulfilled {
            fulfillments(
                &claim.fulfillments,
                FulfillmentSource::Claim,
                claim.id.aggregate_id(),
                catalog,
                out,
            );
        }
    }
}

/// Standalone and exchange returns. Returns owned by a claim (through their
/// own `claim_id` or the claim's `return_id`) are skipped.
pub fn returns(
    returns: &[Return],
    claims: &[Claim],
    catalog: &ItemCatalog<'_>,
    out: &mut Extraction,
) {
    let claimed: HashSet<ReturnId> = claims.iter().filter_map(|c| c.return_id).collect();

    for ret in unique_by_id(returns) {
        if ret.claim_id.is_some() || claimed.contains(&ret.id) {
            continue;
        }

        let id = EventId::facet(ret.id, "return");
        let items = ret
            .items
            .iter()
            .map(|i| catalog.event_item(i.item_id, i.quantity, &id, out))
            .collect();

        let payload = ReturnEvent {
            return_id: ret.id,
            status: resolve_overlay(ret, &NestedReturn::Absent),
            swap_id: ret.swap_id,
            items,
            refund_amount: ret.refund_amount.map(|amount| out.money(amount)),
            requested_at: ret.created_at,
            received_at: ret.received_at,
            canceled_at: ret.canceled_at,
        };
        out.push(
            TimelineEvent::new(
                id,
                ret.created_at,
                out.order_id(),
                EventKind::Return(payload),
            )
            .with_no_notification(ret.no_notification),
        );
    }
}
