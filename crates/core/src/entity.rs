//! Entity trait: identity + continuity across state changes.

use uuid::Uuid;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Copy + Eq + core::hash::Hash + core::fmt::Debug + Into<Uuid>;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
