//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A `Registration` is a value object, a `Car` is an entity
//! identified by one.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Registration(String);
///
/// impl ValueObject for Registration {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
