//! Session Gate
//!
//! The one place where a failed call is turned into an action. Credential
//! failures end the session and send the user to the login view; anything
//! else stays local to the view that made the call.

use std::sync::Arc;

use crate::error::{ApiError, ErrorKind};
use crate::route::{Navigator, Route};
use crate::session::SessionStore;

pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please login again.";
pub const LOGIN_REQUIRED_NOTICE: &str = "Please login to continue.";

/// What a view should do with a failure after the gate has seen it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session cleared and navigation to login issued; show the notice
    Redirected { notice: String },
    /// Render inline in the view; session untouched
    Local(ApiError),
}

impl GateOutcome {
    pub fn message(&self) -> String {
        match self {
            GateOutcome::Redirected { notice } => notice.clone(),
            GateOutcome::Local(err) => err.user_message(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, GateOutcome::Redirected { .. })
    }
}

/// Shared by every view; cheap to clone
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGate {
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Current token, or an `AuthRequired` failure for anonymous users.
    pub fn token(&self) -> Result<String, ApiError> {
        self.store.token().ok_or_else(ApiError::auth_required)
    }

    /// Classify a failure and act on it.
    pub fn intercept(&self, err: ApiError) -> GateOutcome {
        match err.kind {
            ErrorKind::AuthExpired | ErrorKind::AuthRequired => {
                let notice = if err.kind == ErrorKind::AuthExpired {
                    SESSION_EXPIRED_NOTICE
                } else {
                    LOGIN_REQUIRED_NOTICE
                };
                log::info!("Credential rejected ({:?}); clearing session", err.kind);
                self.store.clear_session();
                self.navigator.navigate(Route::Login);
                GateOutcome::Redirected {
                    notice: notice.to_string(),
                }
            }
            _ => GateOutcome::Local(err),
        }
    }

    /// Redirect anonymous users away from a protected view.
    ///
    /// Returns the token when there is one.
    pub fn require_session(&self) -> Result<String, GateOutcome> {
        self.token().map_err(|err| self.intercept(err))
    }

    /// Explicit logout
    pub fn end_session(&self) {
        log::info!("Logging out");
        self.store.clear_session();
        self.navigator.navigate(Route::Home);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::session::{MemorySessionStore, NotifyingStore};
    use crate::testing::RecordingNavigator;

    fn gate_with(store: Arc<MemorySessionStore>) -> (SessionGate, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        (SessionGate::new(store, navigator.clone()), navigator)
    }

    #[test]
    fn test_expired_clears_and_redirects() {
        let store = Arc::new(MemorySessionStore::with_session("tok", "ana@example.com"));
        let (gate, navigator) = gate_with(store.clone());

        let outcome = gate.intercept(ApiError::from_response(401, r#"{"error":"jwt expired"}"#));

        assert_eq!(
            outcome,
            GateOutcome::Redirected {
                notice: SESSION_EXPIRED_NOTICE.into()
            }
        );
        assert_eq!(store.token(), None);
        assert_eq!(navigator.last(), Some(Route::Login));
    }

    #[test]
    fn test_other_failures_keep_session() {
        let store = Arc::new(MemorySessionStore::with_session("tok", "ana@example.com"));
        let (gate, navigator) = gate_with(store.clone());

        let outcome = gate.intercept(ApiError::from_response(403, r#"{"message":"Not the owner"}"#));

        assert!(!outcome.is_redirect());
        assert_eq!(outcome.message(), "Not the owner");
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(navigator.last(), None);
    }

    #[test]
    fn test_anonymous_require_session_redirects() {
        let store = Arc::new(MemorySessionStore::new());
        let (gate, navigator) = gate_with(store);

        let outcome = gate.require_session().unwrap_err();
        assert_eq!(outcome.message(), LOGIN_REQUIRED_NOTICE);
        assert_eq!(navigator.last(), Some(Route::Login));
    }

    #[test]
    fn test_end_session_goes_home() {
        let store = Arc::new(MemorySessionStore::with_session("tok", "ana@example.com"));
        let (gate, navigator) = gate_with(store.clone());

        gate.end_session();
        assert!(!store.is_authenticated());
        assert_eq!(navigator.last(), Some(Route::Home));
    }

    #[test]
    fn test_end_session_on_home_still_reports_logout() {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = changes.clone();
        let store = Arc::new(NotifyingStore::new(
            MemorySessionStore::with_session("tok", "ana@example.com"),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));
        let navigator = Arc::new(RecordingNavigator::default());
        navigator.navigate(Route::Home);
        let gate = SessionGate::new(store.clone(), navigator.clone());

        gate.end_session();

        assert!(!store.is_authenticated());
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.visits(), vec![Route::Home, Route::Home]);
    }
}
