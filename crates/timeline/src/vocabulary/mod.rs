//! Order-kind vocabularies.
//!
//! The engine is the same for every order kind. A [`Vocabulary`] tells it
//! which event types exist in the domain and how to read the domain's
//! sub-orders.

mod purchasing;
mod sales;

pub use purchasing::PurchaseVocabulary;
pub use sales::SalesVocabulary;

use ordertrail_events::EventType;

use crate::extract::{Extraction, ItemCatalog};
use crate::record::OrderRecord;
use crate::source::SourceState;

pub trait Vocabulary {
    type Order: OrderRecord;
    type SubOrders: Default;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Closed set of event types this domain produces.
    fn event_types(&self) -> &'static [EventType];

    fn supports(&self, ty: EventType) -> bool {
        self.event_types().contains(&ty)
    }

    /// Sub-order sources a build has to wait for, by name.
    fn sub_order_sources<'a>(
        &self,
        sub_orders: &'a Self::SubOrders,
    ) -> Vec<(&'static str, SourceState<'a>)>;

    /// Adds line items introduced by sub-orders to the catalog.
    fn register_items<'a>(&self, sub_orders: &'a Self::SubOrders, catalog: &mut ItemCatalog<'a>);

    fn extract_sub_orders(
        &self,
        sub_orders: &Self::SubOrders,
        catalog: &ItemCatalog<'_>,
        out: &mut Extraction,
    );
}
