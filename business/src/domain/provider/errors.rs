use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
