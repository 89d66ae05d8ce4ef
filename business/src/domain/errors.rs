/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
}

/// Rejected form input. Each variant names the field that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation.name_empty")]
    NameEmpty,
    #[error("validation.invalid_price")]
    InvalidPrice,
    #[error("validation.invalid_stock")]
    InvalidStock,
}

impl ValidationError {
    /// Name of the form field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameEmpty => "name",
            ValidationError::InvalidPrice => "price",
            ValidationError::InvalidStock => "stock",
        }
    }
}
