use std::sync::{Arc, Mutex};

use business::domain::errors::RepositoryError;
use business::domain::session::model::{
    CURRENT_USER_KEY, LOGGED_IN_KEY, LOGGED_IN_MARKER, Session,
};
use business::domain::session::repository::SessionRepository;

use crate::store::KeyValueStore;

/// Session persisted as two plain keys next to the catalog collections.
pub struct StoreSessionRepository {
    store: Arc<dyn KeyValueStore>,
    session: Mutex<Session>,
}

impl StoreSessionRepository {
    /// Restores the session saved by a previous run, if any.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let marker = store.get(LOGGED_IN_KEY).ok().flatten();
        let user = store.get(CURRENT_USER_KEY).ok().flatten();
        let session = Session::restore(marker.as_deref(), user.as_deref());
        if let Some(user) = session.user() {
            tracing::info!("Restored session for {}", user);
        }

        Self {
            store,
            session: Mutex::new(session),
        }
    }
}

impl SessionRepository for StoreSessionRepository {
    fn current(&self) -> Result<Session, RepositoryError> {
        let session = self
            .session
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(session.clone())
    }

    fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        let mut current = self
            .session
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;

        match session.user() {
            // The marker goes last so a failed write never pairs it with a stale user.
            Some(user) => {
                let previous = self.store.get(CURRENT_USER_KEY)?;
                self.store.set(CURRENT_USER_KEY, user)?;
                if let Err(e) = self.store.set(LOGGED_IN_KEY, LOGGED_IN_MARKER) {
                    let rollback = match previous {
                        Some(previous) => self.store.set(CURRENT_USER_KEY, &previous),
                        None => self.store.remove(CURRENT_USER_KEY),
                    };
                    if let Err(rollback) = rollback {
                        tracing::warn!("Could not restore `{}`: {}", CURRENT_USER_KEY, rollback);
                    }
                    return Err(e.into());
                }
            }
            None => {
                self.store.remove(LOGGED_IN_KEY)?;
                self.store.remove(CURRENT_USER_KEY)?;
            }
        }

        *current = session.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::MemoryStore;
    use crate::store::StoreError;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    /// Memory store whose writes to the login marker always fail.
    struct MarkerWriteFails(MemoryStore);

    impl KeyValueStore for MarkerWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == LOGGED_IN_KEY {
                return Err(StoreError::Poisoned);
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn should_start_logged_out_on_empty_store() {
        let repo = StoreSessionRepository::restore(store());
        assert!(!repo.current().unwrap().is_logged_in());
    }

    #[test]
    fn should_persist_both_keys_on_login() {
        let store = store();
        let repo = StoreSessionRepository::restore(store.clone());

        repo.save(&Session::logged_in("alice")).unwrap();

        assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("currentUser").unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn should_restore_session_after_restart() {
        let store = store();
        StoreSessionRepository::restore(store.clone())
            .save(&Session::logged_in("alice"))
            .unwrap();

        let restored = StoreSessionRepository::restore(store);

        assert_eq!(restored.current().unwrap().user(), Some("alice"));
    }

    #[test]
    fn should_remove_both_keys_on_logout() {
        let store = store();
        let repo = StoreSessionRepository::restore(store.clone());
        repo.save(&Session::logged_in("alice")).unwrap();

        repo.save(&Session::logged_out()).unwrap();

        assert_eq!(store.get("isLoggedIn").unwrap(), None);
        assert_eq!(store.get("currentUser").unwrap(), None);
        assert!(!StoreSessionRepository::restore(store)
            .current()
            .unwrap()
            .is_logged_in());
    }

    #[test]
    fn should_not_restore_without_literal_marker() {
        let store = store();
        store.set("isLoggedIn", "yes").unwrap();
        store.set("currentUser", "alice").unwrap();

        let repo = StoreSessionRepository::restore(store);

        assert!(!repo.current().unwrap().is_logged_in());
    }

    #[test]
    fn should_keep_stored_session_when_marker_write_fails() {
        let inner = MemoryStore::new();
        inner.set("isLoggedIn", "true").unwrap();
        inner.set("currentUser", "alice").unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(MarkerWriteFails(inner));
        let repo = StoreSessionRepository::restore(store.clone());

        let result = repo.save(&Session::logged_in("bob"));

        assert_eq!(result, Err(RepositoryError::Persistence));
        assert_eq!(repo.current().unwrap().user(), Some("alice"));
        assert_eq!(store.get("currentUser").unwrap().as_deref(), Some("alice"));
        assert_eq!(
            StoreSessionRepository::restore(store).current().unwrap().user(),
            Some("alice")
        );
    }

    #[test]
    fn should_leave_no_user_behind_when_first_login_fails() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MarkerWriteFails(MemoryStore::new()));
        let repo = StoreSessionRepository::restore(store.clone());

        assert!(repo.save(&Session::logged_in("bob")).is_err());

        assert_eq!(store.get("currentUser").unwrap(), None);
        assert!(!repo.current().unwrap().is_logged_in());
    }
}
