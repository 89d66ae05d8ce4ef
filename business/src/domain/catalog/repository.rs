use super::entity::{CatalogEntity, EntityId};
use crate::domain::errors::RepositoryError;

/// Port for one persisted catalog collection.
///
/// Implementations load (or seed) the collection once on construction and
/// persist after every mutation.
pub trait CatalogRepository<E: CatalogEntity>: Send + Sync {
    /// Snapshot of the collection in insertion order.
    fn all(&self) -> Result<Vec<E>, RepositoryError>;

    /// Assigns the next id, appends and persists. Returns the stored entity.
    fn add(&self, draft: E::Draft) -> Result<E, RepositoryError>;

    /// Removes the entity with `id` if present. Removing an absent id is a no-op.
    fn remove(&self, id: EntityId) -> Result<(), RepositoryError>;
}
