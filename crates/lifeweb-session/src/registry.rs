//! Registry of connected sessions.
//!
//! A growable map from [`SessionId`] to [`SessionInfo`], shared by every
//! connection handler. Entries are added when a connection is accepted
//! and removed when its session ends, so the registry's size is always
//! the number of live sessions.

use std::error::Error;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use indexmap::IndexMap;
use tracing::info;

/// Identifies a session within one registry.
///
/// Allocated sequentially from 1 and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SessionId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// What the registry knows about a live session.
#[derive(Clone, Debug)]
pub struct SessionInfo {
    /// The session's identifier.
    pub id: SessionId,
    /// Label for the remote party, typically its socket address.
    pub remote: String,
    /// When the session was registered.
    pub connected_at: Instant,
}

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No session with this id is registered.
    UnknownSession(SessionId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSession(id) => write!(f, "unknown session {id}"),
        }
    }
}

impl Error for RegistryError {}

struct Inner {
    next_id: u64,
    sessions: IndexMap<SessionId, SessionInfo>,
}

/// Thread-safe registry of live sessions, in registration order.
pub struct SessionRegistry {
    inner: Mutex<Inner>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                sessions: IndexMap::new(),
            }),
        }
    }

    // Entries are plain metadata; a poisoned lock still guards whole values.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a session for `remote` and return its new id.
    pub fn register(&self, remote: impl Into<String>) -> SessionId {
        let mut inner = self.lock();
        let id = SessionId(inner.next_id);
        inner.next_id += 1;
        let info = SessionInfo {
            id,
            remote: remote.into(),
            connected_at: Instant::now(),
        };
        inner.sessions.insert(id, info);
        info!(
            session = %id,
            sessions = inner.sessions.len(),
            "session registered"
        );
        id
    }

    /// Remove a session, returning what was known about it.
    pub fn unregister(&self, id: SessionId) -> Result<SessionInfo, RegistryError> {
        let mut inner = self.lock();
        let info = inner
            .sessions
            .shift_remove(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        info!(
            session = %id,
            remote = %info.remote,
            connected_for_ms = info.connected_at.elapsed().as_millis() as u64,
            sessions = inner.sessions.len(),
            "session unregistered"
        );
        Ok(info)
    }

    /// Look up a live session.
    pub fn get(&self, id: SessionId) -> Option<SessionInfo> {
        self.lock().sessions.get(&id).cloned()
    }

    /// Whether `id` is a live session.
    pub fn contains(&self, id: SessionId) -> bool {
        self.lock().sessions.contains_key(&id)
    }

    /// Ids of all live sessions, oldest first.
    pub fn ids(&self) -> Vec<SessionId> {
        self.lock().sessions.keys().copied().collect()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.lock().sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn register_allocates_sequential_ids() {
        let reg = SessionRegistry::new();
        assert!(reg.is_empty());
        let a = reg.register("10.0.0.1:5000");
        let b = reg.register("10.0.0.2:5000");
        assert_eq!((a, b), (SessionId(1), SessionId(2)));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(b).map(|i| i.remote), Some("10.0.0.2:5000".into()));
    }

    #[test]
    fn unregister_removes_and_preserves_order() {
        let reg = SessionRegistry::new();
        let a = reg.register("a");
        let b = reg.register("b");
        let c = reg.register("c");
        let info = reg.unregister(b).unwrap();
        assert_eq!(info.id, b);
        assert!(!reg.contains(b));
        assert_eq!(reg.ids(), vec![a, c]);
    }

    #[test]
    fn unregister_unknown_fails() {
        let reg = SessionRegistry::new();
        let id = reg.register("a");
        reg.unregister(id).unwrap();
        assert!(matches!(
            reg.unregister(id),
            Err(RegistryError::UnknownSession(missing)) if missing == id
        ));
    }

    #[test]
    fn ids_are_never_reused() {
        let reg = SessionRegistry::new();
        let a = reg.register("a");
        reg.unregister(a).unwrap();
        let b = reg.register("b");
        assert_ne!(a, b);
    }

    #[test]
    fn grows_past_any_fixed_size() {
        let reg = SessionRegistry::new();
        for i in 0..500 {
            reg.register(format!("peer-{i}"));
        }
        assert_eq!(reg.len(), 500);
    }

    #[test]
    fn concurrent_registration() {
        let reg = Arc::new(SessionRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let reg = Arc::clone(&reg);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| reg.register(format!("{t}-{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut all: Vec<SessionId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
        assert_eq!(reg.len(), 400);
    }
}
