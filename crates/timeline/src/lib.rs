//! Timeline aggregation engine.
//!
//! Turns a set of independently fetched order snapshots into one ordered,
//! typed list of [`TimelineEvent`]s:
//!
//! 1. **Join barrier** ([`source`]): nothing is built until every required
//!    source has resolved; a failed source fails the whole build.
//! 2. **Extraction** ([`extract`]): one pure extractor per record kind.
//! 3. **Status overlay** ([`overlay`]): one derivation for every compound
//!    sub-order kind.
//! 4. **Sequencing** ([`sequencer`]): newest first, earliest flagged `first`.
//!
//! The engine is parametrized by a [`Vocabulary`] (sales orders or supplier
//! purchase orders) instead of being duplicated per order kind. It holds no
//! state between builds.

pub mod actions;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod overlay;
pub mod record;
pub mod sequencer;
pub mod snapshot;
pub mod source;
pub mod vocabulary;

pub use actions::{OperatorAction, offerable};
pub use config::{ConfigError, Feature, FeatureFlags, TimelineConfig};
pub use engine::{BuildStatus, Timeline, build};
pub use error::{MalformedAggregate, TimelineError};
pub use ordertrail_events::TimelineEvent;
pub use overlay::{CompoundSubOrder, NestedReturn, ReturnIndex, SubOrderKind, resolve_overlay};
pub use record::OrderRecord;
pub use sequencer::sequence;
pub use snapshot::{PurchaseSnapshot, PurchaseSubOrders, SalesSnapshot, SalesSubOrders, Snapshot};
pub use source::{Source, SourceState};
pub use vocabulary::{PurchaseVocabulary, SalesVocabulary, Vocabulary};
