use crate::domain::errors::RepositoryError;

use super::model::Session;

pub trait SessionRepository: Send + Sync {
    fn current(&self) -> Result<Session, RepositoryError>;

    /// Persists `session`. A logged-out session removes both stored keys.
    fn save(&self, session: &Session) -> Result<(), RepositoryError>;
}
