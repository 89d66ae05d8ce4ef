use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use business::domain::catalog::entity::{CatalogEntity, EntityId};
use business::domain::catalog::id_sequence::IdSequence;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::StoredEntity;
use crate::store::{KeyValueStore, StoreError};

/// Source of the current time in unix milliseconds.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    Utc::now().timestamp_millis()
}

struct CatalogState<E> {
    items: Vec<E>,
    ids: IdSequence,
}

/// One catalog collection kept as a JSON array under its kind's store key.
pub struct StoreCatalogRepository<E: StoredEntity> {
    store: Arc<dyn KeyValueStore>,
    state: Mutex<CatalogState<E>>,
    clock: Clock,
}

impl<E: StoredEntity> StoreCatalogRepository<E> {
    /// Loads the collection, or installs and persists the seed list when the
    /// stored data is absent, unreadable or malformed.
    pub fn load_or_seed(store: Arc<dyn KeyValueStore>) -> Result<Self, RepositoryError> {
        let items = match Self::read(store.as_ref()) {
            Some(items) => items,
            None => {
                let seed = E::seed();
                Self::persist(store.as_ref(), &seed)?;
                tracing::info!(
                    "Seeded {} sample {}s under `{}`",
                    seed.len(),
                    E::KIND,
                    E::KIND.store_key()
                );
                seed
            }
        };

        let ids = IdSequence::from_existing(items.iter().map(E::id));
        Ok(Self {
            store,
            state: Mutex::new(CatalogState { items, ids }),
            clock: system_clock,
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn read(store: &dyn KeyValueStore) -> Option<Vec<E>> {
        let key = E::KIND.store_key();
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Could not read `{}`, falling back to seed: {}", key, e);
                return None;
            }
        };

        let records: Vec<E::Record> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Malformed `{}`, falling back to seed: {}", key, e);
                return None;
            }
        };

        let items: Vec<E> = records.into_iter().map(E::from_record).collect();
        if !items.iter().all(E::is_well_formed) || has_duplicate_ids(&items) {
            tracing::warn!("Invalid entries in `{}`, falling back to seed", key);
            return None;
        }
        Some(items)
    }

    fn persist(store: &dyn KeyValueStore, items: &[E]) -> Result<(), RepositoryError> {
        let records: Vec<E::Record> = items.iter().map(E::to_record).collect();
        let raw = serde_json::to_string(&records).map_err(StoreError::from)?;
        store.set(E::KIND.store_key(), &raw)?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, CatalogState<E>>, RepositoryError> {
        self.state.lock().map_err(|_| RepositoryError::Persistence)
    }
}

fn has_duplicate_ids<E: CatalogEntity>(items: &[E]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item.id()))
}

impl<E: StoredEntity> CatalogRepository<E> for StoreCatalogRepository<E> {
    fn all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.lock()?.items.clone())
    }

    fn add(&self, draft: E::Draft) -> Result<E, RepositoryError> {
        let mut state = self.lock()?;
        let Some(id) = state.ids.next((self.clock)()) else {
            tracing::error!("No ids left in `{}`", E::KIND.store_key());
            return Err(RepositoryError::Persistence);
        };
        let entity = E::from_draft(id, draft);

        state.items.push(entity.clone());
        if let Err(e) = Self::persist(self.store.as_ref(), &state.items) {
            state.items.pop();
            return Err(e);
        }
        Ok(entity)
    }

    fn remove(&self, id: EntityId) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        let Some(position) = state.items.iter().position(|item| item.id() == id) else {
            return Ok(());
        };

        let removed = state.items.remove(position);
        if let Err(e) = Self::persist(self.store.as_ref(), &state.items) {
            state.items.insert(position, removed);
            return Err(e);
        }
        Ok(())
    }
}
