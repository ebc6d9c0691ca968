//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::auth::{failure_message, sign_in, LOGIN_FAILED};
use taskboard_client::{MountGuard, Route};

use crate::components::NavLink;
use crate::context::use_app;
use crate::store::{store_push_toast, use_app_store, ToastKind};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let ctx = ctx.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = sign_in(
                ctx.api.as_ref(),
                ctx.gate.store().as_ref(),
                &email.get_untracked(),
                &password.get_untracked(),
                None,
            )
            .await;
            if guard.is_live() {
                submitting.set(false);
            }
            match result {
                Ok(message) => {
                    store_push_toast(&store, ToastKind::Success, message);
                    ctx.navigate(Route::Dashboard);
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    store_push_toast(&store, ToastKind::Error, failure_message(&err, LOGIN_FAILED));
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        class="form-control"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class="form-control"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <NavLink to=Route::Register>"Register"</NavLink>
            </p>
        </div>
    }
}
