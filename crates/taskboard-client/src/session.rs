//! Session Store
//!
//! Holds the bearer token and the signed-in email. Expiry is never tracked
//! here; the server tells us when a token is no longer good.

use std::sync::{Mutex, PoisonError};

/// Authenticated identity for the current browser context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: String,
}

/// Storage abstraction for the session.
///
/// Implementations must never fail: reads return `None` when nothing is
/// stored, and `clear_session` is idempotent.
pub trait SessionStore: Send + Sync {
    fn set_session(&self, token: &str, identity: &str);

    fn token(&self) -> Option<String>;

    fn identity(&self) -> Option<String>;

    fn clear_session(&self);

    /// Both values, or `None` when either is missing.
    fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            identity: self.identity()?,
        })
    }

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// In-process store, used by tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: &str, identity: &str) -> Self {
        let store = Self::new();
        store.set_session(token, identity);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn set_session(&self, token: &str, identity: &str) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(Session {
            token: token.to_string(),
            identity: identity.to_string(),
        });
    }

    fn token(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    fn identity(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.identity.clone())
    }

    fn clear_session(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Wraps a store and calls `on_change` after every login and logout.
///
/// Logout can leave the route untouched (already on Home), so anything that
/// renders session state has to follow the store itself.
pub struct NotifyingStore<S> {
    inner: S,
    on_change: Box<dyn Fn() + Send + Sync>,
}

impl<S: SessionStore> NotifyingStore<S> {
    pub fn new(inner: S, on_change: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner,
            on_change: Box::new(on_change),
        }
    }
}

impl<S: SessionStore> SessionStore for NotifyingStore<S> {
    fn set_session(&self, token: &str, identity: &str) {
        self.inner.set_session(token, identity);
        (self.on_change)();
    }

    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    fn identity(&self) -> Option<String> {
        self.inner.identity()
    }

    fn clear_session(&self) {
        self.inner.clear_session();
        (self.on_change)();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_empty_store_is_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        assert_eq!(store.identity(), None);
        assert_eq!(store.session(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_and_clear() {
        let store = MemorySessionStore::new();
        store.set_session("opaque.token", "ana@example.com");
        assert_eq!(store.token().as_deref(), Some("opaque.token"));
        assert_eq!(store.identity().as_deref(), Some("ana@example.com"));

        store.clear_session();
        store.clear_session();
        assert_eq!(store.session(), None);
    }

    #[test]
    fn test_set_replaces_previous_session() {
        let store = MemorySessionStore::with_session("first", "a@example.com");
        store.set_session("second", "b@example.com");
        assert_eq!(
            store.session(),
            Some(Session {
                token: "second".into(),
                identity: "b@example.com".into(),
            })
        );
    }

    #[test]
    fn test_notifying_store_reports_writes_only() {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = changes.clone();
        let store = NotifyingStore::new(MemorySessionStore::new(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_session("tok", "ana@example.com");
        assert_eq!(store.identity().as_deref(), Some("ana@example.com"));
        assert!(store.is_authenticated());
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        store.clear_session();
        assert!(!store.is_authenticated());
        assert_eq!(changes.load(Ordering::SeqCst), 2);
    }
}
