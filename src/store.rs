//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use taskboard_client::GateOutcome;

/// Toasts dismiss themselves after this long
pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible toasts, newest last
    pub toasts: Vec<Toast>,
    /// Id handed to the next toast
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast and schedule its dismissal
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next = next.wrapping_add(1);
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        store_remove_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_remove_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Surface a failure that already went through the session gate.
///
/// Redirect notices are warnings; everything else is an error.
pub fn store_report(store: &AppStore, outcome: &GateOutcome) {
    let kind = if outcome.is_redirect() {
        ToastKind::Warning
    } else {
        ToastKind::Error
    };
    store_push_toast(store, kind, outcome.message());
}
