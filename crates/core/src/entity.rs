//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are "the same" when their ids match, regardless of the rest of
/// their state (a rented car is still the same car).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this entity is identified by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
