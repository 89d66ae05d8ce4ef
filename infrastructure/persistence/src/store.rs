use business::domain::errors::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.io_error")]
    Io(#[from] std::io::Error),
    #[error("store.encode_error")]
    Encode(#[from] serde_json::Error),
    #[error("store.lock_poisoned")]
    Poisoned,
}

impl From<StoreError> for RepositoryError {
    fn from(_: StoreError) -> Self {
        RepositoryError::Persistence
    }
}

/// String-keyed text store shared by every repository.
///
/// A miss is `Ok(None)`; errors only come from the backing medium.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
