/// Identifier shared by every catalog entity kind.
pub type EntityId = i64;

/// The two parallel collections managed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Provider,
}

impl EntityKind {
    /// Fixed store key under which the collection is persisted.
    pub fn store_key(&self) -> &'static str {
        match self {
            EntityKind::Product => "products",
            EntityKind::Provider => "providers",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Product => write!(f, "product"),
            EntityKind::Provider => write!(f, "provider"),
        }
    }
}

/// An entity that lives in a persisted catalog collection.
///
/// Entities are created from a `Draft` (everything but the id) and are never
/// mutated afterwards.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    type Draft: Send + 'static;

    fn id(&self) -> EntityId;

    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Sample entities installed when nothing valid is stored.
    fn seed() -> Vec<Self>;

    /// Structural check applied to data read back from the store.
    fn is_well_formed(&self) -> bool {
        true
    }
}
