//! Session storage
//!
//! Sessions live for the whole process. The table lock is only held to look
//! up or insert a session; each session carries its own lock for reads and
//! updates.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use super::SessionState;
use crate::error::Result;

/// Handle to one session's state
pub type SharedSession = Arc<Mutex<SessionState>>;

/// Storage for sessions keyed by an opaque identifier
pub trait SessionStore: Send + Sync {
    /// Existing session, if any
    fn get(&self, id: &str) -> Option<SharedSession>;

    /// Existing session, or a new one built by `create`
    ///
    /// `create` runs without the table lock held. If another caller inserts
    /// the same id first, its session wins and the built one is dropped.
    ///
    /// # Errors
    /// Propagates the error from `create`.
    fn get_or_create<F>(&self, id: &str, create: F) -> Result<SharedSession>
    where
        F: FnOnce() -> Result<SessionState>;

    /// Overwrite a session's state, creating the session if needed
    fn replace(&self, id: &str, state: SessionState) -> SharedSession;
}

/// Lock a mutex, recovering the data if a previous holder panicked
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-local session table
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<FxHashMap<String, SharedSession>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Option<SharedSession> {
        lock(&self.sessions).get(id).cloned()
    }

    fn get_or_create<F>(&self, id: &str, create: F) -> Result<SharedSession>
    where
        F: FnOnce() -> Result<SessionState>,
    {
        if let Some(existing) = self.get(id) {
            return Ok(existing);
        }

        let built = Arc::new(Mutex::new(create()?));
        let session = lock(&self.sessions)
            .entry(id.to_string())
            .or_insert(built)
            .clone();
        Ok(session)
    }

    fn replace(&self, id: &str, state: SessionState) -> SharedSession {
        let mut table = lock(&self.sessions);
        if let Some(session) = table.get(id).cloned() {
            drop(table);
            *lock(&session) = state;
            return session;
        }

        let session = Arc::new(Mutex::new(state));
        table.insert(id.to_string(), Arc::clone(&session));
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::error::AdvisorError;
    use crate::wordlists::Language;

    fn state(list: &[&str]) -> SessionState {
        let words = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        SessionState::new(Language::En, words)
    }

    #[test]
    fn get_or_create_builds_once() {
        let store = InMemorySessionStore::new();
        let mut calls = 0;

        let first = store
            .get_or_create("a", || {
                calls += 1;
                Ok(state(&["crane"]))
            })
            .unwrap();
        let second = store
            .get_or_create("a", || panic!("session already exists"))
            .unwrap();

        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_creation_leaves_no_session() {
        let store = InMemorySessionStore::new();
        let result = store.get_or_create("a", || Err(AdvisorError::NoCandidates));

        assert!(result.is_err());
        assert!(store.get("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create("a", || Ok(state(&["crane", "slate"]))).unwrap();
        let b = store.get_or_create("b", || Ok(state(&["crane", "slate"]))).unwrap();

        lock(&a).candidates.clear();

        assert!(lock(&a).candidates.is_empty());
        assert_eq!(lock(&b).candidates.len(), 2);
    }

    #[test]
    fn replace_overwrites_in_place() {
        let store = InMemorySessionStore::new();
        let original = store.get_or_create("a", || Ok(state(&["crane"]))).unwrap();

        let replaced = store.replace("a", state(&["slate", "irate"]));

        assert!(Arc::ptr_eq(&original, &replaced));
        assert_eq!(lock(&original).candidates.len(), 2);
    }

    #[test]
    fn replace_creates_missing_session() {
        let store = InMemorySessionStore::new();
        store.replace("fresh", state(&["crane"]));

        let session = store.get("fresh").unwrap();
        assert_eq!(lock(&session).candidates.len(), 1);
    }

    #[test]
    fn poisoned_session_is_still_usable() {
        let store = InMemorySessionStore::new();
        let session = store.get_or_create("a", || Ok(state(&["crane"]))).unwrap();

        let poisoner = Arc::clone(&session);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(session.is_poisoned());
        assert_eq!(lock(&session).candidates.len(), 1);
    }
}
