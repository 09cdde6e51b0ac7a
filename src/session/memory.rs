use super::{Session, SessionStore, SESSION_KEYS};
use crate::app::AppError;
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

/// In-process session store, used by embedders that keep state in memory and by tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
    saves: AtomicUsize,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the raw entries.
    ///
    /// # Errors
    /// Returns `AppError::Store` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<BTreeMap<String, String>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::Store("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        for (key, value) in session.entries() {
            entries.insert(key.to_string(), value);
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, AppError> {
        let entries = self.lock()?;
        Ok(Session::from_entries(&entries))
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        for key in SESSION_KEYS {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, SecretString};

    fn session() -> Session {
        Session {
            auth_token: SecretString::from("tok"),
            user_name: "Maria".to_string(),
            user_email: "maria@example.com".to_string(),
        }
    }

    #[test]
    fn save_load_clear() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated().unwrap());

        store.save(&session()).unwrap();
        assert_eq!(store.save_count(), 1);
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.auth_token.expose_secret(), "tok");
        assert_eq!(loaded.user_email, "maria@example.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn load_ignores_partial_entries() {
        let store = MemorySessionStore::new();
        store.save(&session()).unwrap();
        store
            .entries
            .lock()
            .unwrap()
            .remove(crate::session::AUTH_TOKEN_KEY);
        assert!(store.load().unwrap().is_none());
        assert!(!store.is_authenticated().unwrap());
    }
}
