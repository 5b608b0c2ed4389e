//! Status overlay resolution for compound, cancelable sub-orders.
//!
//! A swap, claim, return or delivery has its own status, but the status an
//! operator needs is a reconciliation of that status with cancellation and
//! the state of the nested return. [`resolve_overlay`] is that derivation,
//! written once and parametrized by [`CompoundSubOrder`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use ordertrail_events::OverlayStatus;
use ordertrail_purchasing::{Delivery, DeliveryStatus};
use ordertrail_sales::{Claim, ClaimType, Return, ReturnId, SubOrderStatus, Swap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubOrderKind {
    Swap,
    Claim(ClaimType),
    Return,
    Delivery,
}

pub trait CompoundSubOrder {
    type Status: Copy;

    fn kind(&self) -> SubOrderKind;
    fn own_status(&self) -> Self::Status;
    fn canceled_at(&self) -> Option<DateTime<Utc>>;

    /// Id of the return this sub-order points at, if any.
    fn nested_return_id(&self) -> Option<ReturnId> {
        None
    }
}

impl CompoundSubOrder for Swap {
    type Status = SubOrderStatus;

    fn kind(&self) -> SubOrderKind {
        SubOrderKind::Swap
    }

    fn own_status(&self) -> SubOrderStatus {
        self.status
    }

    fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    fn nested_return_id(&self) -> Option<ReturnId> {
        self.return_id
    }
}

impl CompoundSubOrder for Claim {
    type Status = SubOrderStatus;

    fn kind(&self) -> SubOrderKind {
        SubOrderKind::Claim(self.claim_type)
    }

    fn own_status(&self) -> SubOrderStatus {
        self.status
    }

    fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    fn nested_return_id(&self) -> Option<ReturnId> {
        self.return_id
    }
}

impl CompoundSubOrder for Return {
    type Status = SubOrderStatus;

    fn kind(&self) -> SubOrderKind {
        SubOrderKind::Return
    }

    fn own_status(&self) -> SubOrderStatus {
        self.status
    }

    fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }
}

impl CompoundSubOrder for Delivery {
    type Status = DeliveryStatus;

    fn kind(&self) -> SubOrderKind {
        SubOrderKind::Delivery
    }

    fn own_status(&self) -> DeliveryStatus {
        self.status
    }

    fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }
}

/// Id-based lookup of the returns in a snapshot.
#[derive(Debug, Default)]
pub struct ReturnIndex<'a> {
    by_id: HashMap<ReturnId, &'a Return>,
}

impl<'a> ReturnIndex<'a> {
    pub fn new(returns: &'a [Return]) -> Self {
        let mut by_id = HashMap::with_capacity(returns.len());
        for ret in returns {
            by_id.entry(ret.id).or_insert(ret);
        }
        Self { by_id }
    }

    pub fn get(&self, id: ReturnId) -> Option<&'a Return> {
        self.by_id.get(&id).copied()
    }

    pub fn nested<T: CompoundSubOrder>(&self, sub: &T) -> NestedReturn<'a> {
        match sub.nested_return_id() {
            None => NestedReturn::Absent,
            Some(id) => match self.get(id) {
                Some(ret) => NestedReturn::Found(ret),
                None => NestedReturn::Missing(id),
            },
        }
    }
}

/// Outcome of looking up a sub-order's nested return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedReturn<'a> {
    /// The sub-order references no return.
    Absent,
    Found(&'a Return),
    /// The sub-order references a return that is not in the snapshot.
    Missing(ReturnId),
}

impl<'a> NestedReturn<'a> {
    pub fn found(&self) -> Option<&'a Return> {
        match *self {
            NestedReturn::Found(ret) => Some(ret),
            NestedReturn::Absent | NestedReturn::Missing(_) => None,
        }
    }
}

/// Effective status of a compound sub-order. First match wins:
///
/// 1. canceled (non-null `canceled_at`), whatever happened afterwards
/// 2. replacement claim whose return was received: refunded
/// 3. nested return present: the return's status
/// 4. the sub-order's own status
pub fn resolve_overlay<T: CompoundSubOrder>(
    sub: &T,
    nested: &NestedReturn<'_>,
) -> OverlayStatus<T::Status> {
    if sub.canceled_at().is_some() {
        return OverlayStatus::Canceled;
    }

    match (sub.kind(), nested.found()) {
        (SubOrderKind::Claim(ClaimType::Replace), Some(ret))
            if ret.status == SubOrderStatus::Received =>
        {
            OverlayStatus::Refunded
        }
        (_, Some(ret)) => OverlayStatus::Return(ret.status),
        (_, None) => OverlayStatus::Own(sub.own_status()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ordertrail_core::AggregateId;
    use ordertrail_sales::{ClaimId, ClaimPaymentStatus, FulfillmentStatus, SalesOrderId};
    use uuid::Uuid;

    fn t(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn id(n: u128) -> AggregateId {
        AggregateId::from_uuid(Uuid::from_u128(n))
    }

    fn ret(n: u128, status: SubOrderStatus) -> Return {
        Return {
            id: ReturnId::new(id(n)),
            order_id: SalesOrderId::new(id(1)),
            status,
            swap_id: None,
            claim_id: None,
            items: Vec::new(),
            refund_amount: None,
            no_notification: false,
            created_at: t(2),
            updated_at: t(3),
            received_at: None,
            canceled_at: None,
        }
    }

    fn claim(claim_type: ClaimType, return_id: Option<u128>) -> Claim {
        Claim {
            id: ClaimId::new(id(20)),
            order_id: SalesOrderId::new(id(1)),
            claim_type,
            status: SubOrderStatus::Requested,
            payment_status: ClaimPaymentStatus::NotRefunded,
            fulfillment_status: FulfillmentStatus::NotFulfilled,
            return_id: return_id.map(|n| ReturnId::new(id(n))),
            claim_items: Vec::new(),
            additional_items: Vec::new(),
            fulfillments: Vec::new(),
            refund_amount: None,
            no_notification: false,
            created_at: t(2),
            canceled_at: None,
        }
    }

    #[test]
    fn cancellation_overrides_everything() {
        let returns = vec![ret(10, SubOrderStatus::Received)];
        let index = ReturnIndex::new(&returns);
        let mut c = claim(ClaimType::Replace, Some(10));
        c.fulfillment_status = FulfillmentStatus::Fulfilled;
        c.canceled_at = Some(t(5));

        assert_eq!(resolve_overlay(&c, &index.nested(&c)), OverlayStatus::Canceled);
    }

    #[test]
    fn received_return_on_replacement_claim_is_refunded() {
        let returns = vec![ret(10, SubOrderStatus::Received)];
        let index = ReturnIndex::new(&returns);
        let c = claim(ClaimType::Replace, Some(10));

        assert_eq!(resolve_overlay(&c, &index.nested(&c)), OverlayStatus::Refunded);
    }

    #[test]
    fn refund_claim_shows_return_status_instead() {
        let returns = vec![ret(10, SubOrderStatus::Received)];
        let index = ReturnIndex::new(&returns);
        let c = claim(ClaimType::Refund, Some(10));

        assert_eq!(
            resolve_overlay(&c, &index.nested(&c)),
            OverlayStatus::Return(SubOrderStatus::Received)
        );
    }

    #[test]
    fn pending_return_shows_return_status() {
        let returns = vec![ret(10, SubOrderStatus::RequiresAction)];
        let index = ReturnIndex::new(&returns);
        let c = claim(ClaimType::Replace, Some(10));

        assert_eq!(
            resolve_overlay(&c, &index.nested(&c)),
            OverlayStatus::Return(SubOrderStatus::RequiresAction)
        );
    }

    #[test]
    fn missing_nested_return_falls_back_to_own_status() {
        let index = ReturnIndex::new(&[]);
        let c = claim(ClaimType::Replace, Some(99));
        let nested = index.nested(&c);

        assert_eq!(nested, NestedReturn::Missing(ReturnId::new(id(99))));
        assert_eq!(
            resolve_overlay(&c, &nested),
            OverlayStatus::Own(SubOrderStatus::Requested)
        );
    }

    #[test]
    fn return_resolves_to_its_own_status() {
        let r = ret(10, SubOrderStatus::Requested);
        let index = ReturnIndex::new(std::slice::from_ref(&r));

        assert_eq!(index.nested(&r), NestedReturn::Absent);
        assert_eq!(
            resolve_overlay(&r, &NestedReturn::Absent),
            OverlayStatus::Own(SubOrderStatus::Requested)
        );
    }
}
