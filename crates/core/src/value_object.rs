//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one with the new values. This keeps them safe to share across
/// threads and lets them behave like primitives.
///
/// - **Value Object**: no identity (`ProductNo("001") == ProductNo("001")`)
/// - **Entity**: has identity (two orders with the same lines are still
///   different orders)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
