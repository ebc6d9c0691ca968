//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use taskboard_client::{
    ApiClient, ClientConfig, Navigator, NotifyingStore, Route, SessionGate, SessionStore, TaskboardApi,
};

use crate::navigation::HistoryNavigator;
use crate::storage::BrowserSessionStore;

/// App-wide services, cloned into every page
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub api: Arc<dyn TaskboardApi>,
    /// Single place where credential failures end the session
    pub gate: SessionGate,
    /// Active view
    pub route: ReadSignal<Route>,
    /// Bumped on every login and logout
    pub session_changes: ReadSignal<u32>,
    navigator: HistoryNavigator,
}

impl AppContext {
    pub fn new(config: ClientConfig, route: RwSignal<Route>) -> Self {
        let navigator = HistoryNavigator::new(route);
        let api: Arc<dyn TaskboardApi> = Arc::new(ApiClient::new(&config));
        let session_changes = RwSignal::new(0u32);
        let store: Arc<dyn SessionStore> = Arc::new(NotifyingStore::new(BrowserSessionStore, move || {
            session_changes.try_update(|n| *n = n.wrapping_add(1));
        }));
        Self {
            gate: SessionGate::new(store, Arc::new(navigator)),
            config,
            api,
            route: route.read_only(),
            session_changes: session_changes.read_only(),
            navigator,
        }
    }

    pub fn navigator(&self) -> HistoryNavigator {
        self.navigator
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn identity(&self) -> Option<String> {
        self.gate.store().identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.store().is_authenticated()
    }

    /// Clear the session and go back to the landing page
    pub fn logout(&self) {
        self.gate.end_session();
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
