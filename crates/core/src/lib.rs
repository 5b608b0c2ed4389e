//! `ordertrail-core`: shared building blocks for order snapshots.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, money, and the small traits the snapshot crates implement.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, RecordId, UserId};
pub use money::{CurrencyCode, Money};
pub use value_object::ValueObject;
