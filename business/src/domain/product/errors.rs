use crate::domain::errors::{RepositoryError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
