//! Entity trait: things the shop tracks by identity (products, customers).

/// An object identified by its id rather than by its attribute values.
///
/// Two products with the same `ProductId` refer to the same catalog entry even
/// if one copy carries a stale name.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// `true` when both values refer to the same entity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
