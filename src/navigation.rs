//! History-backed Navigation
//!
//! The active view lives in a signal; every switch is mirrored into the
//! address bar with `pushState`, and back/forward update the signal.

use leptos::prelude::*;
use taskboard_client::{Navigator, Route};
use wasm_bindgen::JsValue;

/// Route from the current `location.pathname`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    route: RwSignal<Route>,
}

impl HistoryNavigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }

    /// Follow browser back/forward buttons
    pub fn listen_popstate(&self) {
        let route = self.route;
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            route.set(current_route());
        });
        on_cleanup(move || handle.remove());
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        log::debug!("Navigating to {}", route.path());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
                .is_err()
            {
                log::warn!("pushState failed for {}", route.path());
            }
        }
        self.route.set(route);
    }
}
