//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are interchangeable. `Money` and `CurrencyCode`
/// are the value objects of this workspace; timeline payloads embed them by
/// value instead of referencing the records they came from.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
