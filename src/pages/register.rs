//! Register Page
//!
//! Sign-up form with a reCAPTCHA widget rendered on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::auth::{failure_message, sign_up, REGISTER_FAILED};
use taskboard_client::{MountGuard, Route};

use crate::captcha;
use crate::components::NavLink;
use crate::config;
use crate::context::use_app;
use crate::store::{store_push_toast, use_app_store, ToastKind};

const CAPTCHA_CONTAINER: &str = "register-captcha";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();

    let user_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let widget = RwSignal::new(None::<f64>);

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    // runs after the container is in the DOM
    Effect::new(move |_| {
        widget.set(captcha::render(CAPTCHA_CONTAINER, config::recaptcha_site_key()));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let token = captcha::response(widget.get_untracked());
        submitting.set(true);
        let ctx = ctx.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = sign_up(
                ctx.api.as_ref(),
                &user_name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                token,
            )
            .await;
            if guard.is_live() {
                submitting.set(false);
            }
            match result {
                Ok(response) => {
                    store_push_toast(&store, ToastKind::Success, response.message);
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    log::warn!("Registration failed: {}", err);
                    store_push_toast(&store, ToastKind::Error, failure_message(&err, REGISTER_FAILED));
                    if guard.is_live() {
                        captcha::reset(widget.get_untracked());
                    }
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <h2>"Register"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="register-name">"User Name"</label>
                    <input
                        id="register-name"
                        type="text"
                        class="form-control"
                        placeholder="Enter user name"
                        prop:value=move || user_name.get()
                        on:input=move |ev| user_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        type="email"
                        class="form-control"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        type="password"
                        class="form-control"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div id=CAPTCHA_CONTAINER class="form-group"></div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <NavLink to=Route::Login>"Login"</NavLink>
            </p>
        </div>
    }
}
