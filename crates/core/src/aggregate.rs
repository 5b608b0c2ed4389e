//! Aggregate root trait for fetched order snapshots.

/// Aggregate root marker + minimal interface.
///
/// Snapshots handed to the timeline engine are read-only copies of remote
/// aggregates. The engine never mutates them; callers use `id()` + `version()`
/// as the key when memoizing timelines across builds.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state, as reported
    /// by the source system.
    fn version(&self) -> u64;
}
