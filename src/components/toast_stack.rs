//! Toast Stack Component
//!
//! Renders the store's toasts; click dismisses early.

use leptos::prelude::*;

use crate::store::{store_remove_toast, use_app_store, AppStateStoreFields, Toast};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            role="alert"
                            on:click=move |_| store_remove_toast(&store, id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
